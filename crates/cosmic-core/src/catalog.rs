//! # Catalog
//!
//! The read-only, ordered list of products supplied at startup.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog::sample()  ──┐                                                 │
//! │                       ├──► Catalog::new() ──► validate each entry       │
//! │  Catalog::from_json() ┘                       reject duplicate ids      │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │                                   get(id) / products() (never mutated)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::types::{Product, ProductId};
use crate::validation::validate_product;

const IMAGE_ESSENCE: &str = "https://cdn.poehali.dev/projects/8f708a31-3ae5-416e-a482-9f0868cfadd4/files/a7620c55-7945-4772-b25a-99fbbc6aa5f7.jpg";
const IMAGE_DREAM: &str = "https://cdn.poehali.dev/projects/8f708a31-3ae5-416e-a482-9f0868cfadd4/files/180d377b-fcb4-4cb2-a4d1-8f980d55cb0d.jpg";
const IMAGE_VISION: &str = "https://cdn.poehali.dev/projects/8f708a31-3ae5-416e-a482-9f0868cfadd4/files/9cc27a23-4cc9-41a1-b83f-6db151d96758.jpg";

/// An ordered product catalog with unique ids.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every entry.
    ///
    /// ## Errors
    /// - `CoreError::Validation` for the first invalid entry
    /// - `CoreError::DuplicateProductId` if two entries share an id
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product)?;
            if !seen.insert(product.id) {
                return Err(CoreError::DuplicateProductId(product.id));
            }
        }

        Ok(Catalog { products })
    }

    /// Parses a JSON array of products and validates it.
    ///
    /// ```rust
    /// use cosmic_core::Catalog;
    ///
    /// let json = r#"[{"id": 7, "name": "Comet Tail", "price": 1500,
    ///                 "image": "https://cdn/comet.jpg", "category": "New"}]"#;
    /// let catalog = Catalog::from_json(json).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::new(products)
    }

    /// The six-product catalog the storefront ships with.
    pub fn sample() -> Self {
        Catalog {
            products: vec![
                Product::new(1u32, "Cosmic Essence", 2999, IMAGE_ESSENCE, "Premium"),
                Product::new(2u32, "Lunar Dream", 1899, IMAGE_DREAM, "Bestseller"),
                Product::new(3u32, "Starlight Vision", 3499, IMAGE_VISION, "New"),
                Product::new(4u32, "Aurora Glow", 2499, IMAGE_ESSENCE, "Popular"),
                Product::new(5u32, "Nebula Touch", 2799, IMAGE_DREAM, "Premium"),
                Product::new(6u32, "Galaxy Spirit", 3199, IMAGE_VISION, "Exclusive"),
            ],
        }
    }

    /// Looks a product up by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`], but absence is an error.
    pub fn require(&self, id: ProductId) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 6);

        let dream = catalog.get(ProductId::new(2)).unwrap();
        assert_eq!(dream.name, "Lunar Dream");
        assert_eq!(dream.price.units(), 1899);
        assert_eq!(dream.category, "Bestseller");
    }

    #[test]
    fn test_sample_catalog_passes_validation() {
        let rebuilt = Catalog::new(Catalog::sample().products().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), 6);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.categories(),
            vec!["Premium", "Bestseller", "New", "Popular", "Exclusive"]
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let products = vec![
            Product::new(1u32, "A", 10, "img", "X"),
            Product::new(1u32, "B", 20, "img", "Y"),
        ];
        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateProductId(id) if id == ProductId::new(1)));
    }

    #[test]
    fn test_rejects_invalid_entry() {
        let products = vec![Product::new(1u32, "A", -5, "img", "X")];
        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustNotBeNegative { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 10, "name": "Moon Dust", "price": 990, "image": "https://cdn/m.jpg", "category": "Sale"},
            {"id": 11, "name": "Sun Flare", "price": 4200, "image": "https://cdn/s.jpg", "category": "New"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[1].name, "Sun Flare");
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::InvalidCatalog(_)));
    }

    #[test]
    fn test_require_missing() {
        let catalog = Catalog::sample();
        assert!(catalog.require(ProductId::new(1)).is_ok());
        assert!(matches!(
            catalog.require(ProductId::new(99)),
            Err(CoreError::ProductNotFound(_))
        ));
    }
}
