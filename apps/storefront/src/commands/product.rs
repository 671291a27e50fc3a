//! # Product Commands
//!
//! Read-only access to the catalog for rendering product tiles.

use cosmic_core::{Product, ProductId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;

/// Returns every product in catalog order.
pub fn list_products(catalog: &CatalogState) -> Vec<Product> {
    debug!("list_products command");
    catalog.inner().products().to_vec()
}

/// Returns a single product.
///
/// ## Errors
/// `NOT_FOUND` when the id is not in the catalog.
pub fn get_product(catalog: &CatalogState, product_id: ProductId) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product command");
    Ok(catalog.inner().require(product_id)?.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use cosmic_core::Catalog;

    #[test]
    fn test_list_products_keeps_order() {
        let catalog = CatalogState::new(Catalog::sample());
        let names: Vec<String> = list_products(&catalog).into_iter().map(|p| p.name).collect();

        assert_eq!(names.first().map(String::as_str), Some("Cosmic Essence"));
        assert_eq!(names.last().map(String::as_str), Some("Galaxy Spirit"));
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_get_product() {
        let catalog = CatalogState::new(Catalog::sample());

        let product = get_product(&catalog, ProductId::new(3)).unwrap();
        assert_eq!(product.name, "Starlight Vision");

        let err = get_product(&catalog, ProductId::new(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
