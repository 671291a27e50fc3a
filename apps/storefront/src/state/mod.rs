//! # State Module
//!
//! Session state for the storefront.
//!
//! ## Why Multiple State Types?
//! Each command declares exactly which state it needs, and tests can build
//! any combination without a global.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐      │
//! │  │   ConfigState    │  │  CatalogState    │  │    CartState     │      │
//! │  │                  │  │                  │  │                  │      │
//! │  │  store name      │  │  Catalog         │  │  session id      │      │
//! │  │  currency        │  │  (read-only)     │  │  Cart            │      │
//! │  │  catalog path    │  │                  │  │  (mutable)       │      │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::ConfigState;
