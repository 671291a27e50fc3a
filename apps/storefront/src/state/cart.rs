//! # Cart State
//!
//! The shopper's cart for one session.
//!
//! ## Ownership
//! The session driver owns a `CartState` and hands `&mut` to the commands
//! that change it. Everything runs on one thread, one event at a time, so
//! there is no lock. A second session simply gets a second `CartState`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopper Action          Command                 Cart Change            │
//! │  ──────────────          ───────                 ───────────            │
//! │  Click "Add to cart" ──► add_to_cart() ────────► Cart::add              │
//! │  Click "+" / "−" ──────► update_cart_item() ───► Cart::update_quantity  │
//! │  Click trash ──────────► remove_from_cart() ───► Cart::remove           │
//! │  Open cart panel ──────► get_cart() ───────────► (read only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cosmic_core::Cart;
use uuid::Uuid;

#[derive(Debug)]
pub struct CartState {
    session_id: Uuid,
    cart: Cart,
}

impl CartState {
    /// Creates an empty cart for a fresh session.
    pub fn new() -> Self {
        CartState {
            session_id: Uuid::new_v4(),
            cart: Cart::new(),
        }
    }

    /// Identifies the session in logs and checkout summaries.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_independent() {
        let a = CartState::new();
        let b = CartState::new();

        assert_ne!(a.session_id(), b.session_id());
        assert!(a.cart().is_empty());
        assert!(b.cart().is_empty());
    }
}
