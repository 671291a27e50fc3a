//! # Catalog State
//!
//! The catalog the session renders product tiles from. Loaded once at
//! startup, read-only afterwards.

use std::fs;

use cosmic_core::Catalog;
use tracing::info;

use crate::error::AppError;
use crate::state::ConfigState;

#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState { catalog }
    }

    /// Loads the catalog named by the config, or the built-in sample.
    ///
    /// ## Errors
    /// - `AppError::CatalogRead` if the file cannot be read
    /// - `AppError::Catalog` if the JSON is malformed or an entry is invalid
    pub fn load(config: &ConfigState) -> Result<Self, AppError> {
        let Some(path) = &config.catalog_path else {
            let catalog = Catalog::sample();
            info!(products = catalog.len(), "Using built-in sample catalog");
            return Ok(CatalogState::new(catalog));
        };

        let json = fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
            path: path.clone(),
            source,
        })?;
        let catalog = Catalog::from_json(&json)?;

        info!(?path, products = catalog.len(), "Catalog loaded from file");
        Ok(CatalogState::new(catalog))
    }

    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_core::{CoreError, ProductId};
    use std::io::Write;

    fn config_with_path(path: &std::path::Path) -> ConfigState {
        ConfigState {
            catalog_path: Some(path.to_path_buf()),
            ..ConfigState::default()
        }
    }

    #[test]
    fn test_defaults_to_sample() {
        let state = CatalogState::load(&ConfigState::default()).unwrap();
        assert_eq!(state.inner().len(), 6);
    }

    #[test]
    fn test_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 21, "name": "Meteor Shard", "price": 12500,
                "image": "https://cdn/meteor.jpg", "category": "Rare"}}]"#
        )
        .unwrap();

        let state = CatalogState::load(&config_with_path(file.path())).unwrap();
        let product = state.inner().get(ProductId::new(21)).unwrap();
        assert_eq!(product.name, "Meteor Shard");
        assert_eq!(product.price.units(), 12500);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogState::load(&config_with_path(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, AppError::CatalogRead { .. }));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "A", "price": 1, "image": "a", "category": "X"}},
                {{"id": 1, "name": "B", "price": 2, "image": "b", "category": "Y"}}]"#
        )
        .unwrap();

        let err = CatalogState::load(&config_with_path(file.path())).unwrap_err();
        assert!(matches!(
            err,
            AppError::Catalog(CoreError::DuplicateProductId(_))
        ));
    }
}
