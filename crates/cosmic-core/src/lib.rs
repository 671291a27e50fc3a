//! # cosmic-core: Pure Storefront Logic for Cosmic Store
//!
//! This crate holds the catalog and cart logic of the storefront as plain
//! data and pure functions. Nothing here touches I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cosmic Store Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (tiles, cart panel, badge)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               storefront commands (apps/storefront)             │   │
//! │  │     list_products, add_to_cart, update_cart_item, ...           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cosmic-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Catalog  │  │   │
//! │  │   │ ProductId │  │           │  │ CartItem  │  │ validation│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO ENVIRONMENT • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product`, `ProductId`
//! - [`money`] - Whole-unit `Money`
//! - [`catalog`] - Read-only product catalog
//! - [`cart`] - The cart and its derived totals
//! - [`validation`] - Catalog entry rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cosmic_core::{AddOutcome, Cart, Catalog, ProductId};
//!
//! let catalog = Catalog::sample();
//! let mut cart = Cart::new();
//!
//! let essence = catalog.get(ProductId::new(1)).unwrap();
//! assert_eq!(cart.add(essence), AddOutcome::Added);
//! cart.add(essence);
//!
//! let totals = cart.totals();
//! assert_eq!(totals.total_items, 2);
//! assert_eq!(totals.total_price.units(), 5998);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{AddOutcome, Cart, CartItem, CartTotals, QuantityUpdate};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
