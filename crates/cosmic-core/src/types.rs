//! # Domain Types
//!
//! Catalog-side types shared by the cart and the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │   ProductId     │        │    Product      │                        │
//! │  │  ─────────────  │        │  ─────────────  │                        │
//! │  │  u32            │◄───────│  id             │                        │
//! │  │  stable for the │        │  name           │                        │
//! │  │  catalog's life │        │  price (Money)  │                        │
//! │  └─────────────────┘        │  image (URI)    │                        │
//! │                             │  category       │                        │
//! │                             └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `category` is a free-text label ("Premium", "Bestseller", ...). It drives
//! the badge text on a product tile and nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Catalog identifier of a product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product shown in the catalog.
///
/// Immutable once the catalog is built. The cart copies the fields it needs
/// at the moment of the first add, see [`crate::cart::CartItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,

    /// Display name shown on the tile and in the cart.
    pub name: String,

    /// Price in whole currency units.
    pub price: Money,

    /// URI of the product image.
    pub image: String,

    /// Free-text label, rendered as a badge.
    pub category: String,
}

impl Product {
    /// Convenience constructor used by the sample catalog and tests.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: i64,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price: Money::from_units(price),
            image: image.into(),
            category: category.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
