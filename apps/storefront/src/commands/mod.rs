//! # Commands Module
//!
//! Everything the presentation layer may call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog reads
//! ├── cart.rs     ◄─── Cart reads, mutations, checkout
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn list_products(catalog: &CatalogState)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs catalog, cart and somewhere to send the toast
//! fn add_to_cart(catalog: &CatalogState, cart: &mut CartState, notifier: &dyn Notifier, id)
//! ```

pub mod cart;
pub mod config;
pub mod product;
