//! # Cart
//!
//! The shopper's in-memory cart and its derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shopper Action           Cart Method              State Change         │
//! │  ──────────────           ───────────              ────────────         │
//! │                                                                         │
//! │  "Add to cart" ─────────► add(&product) ─────────► push or qty += 1    │
//! │                                                                         │
//! │  "+" / "−" ─────────────► update_quantity(id, Δ) ► qty += Δ if > 0     │
//! │                                                                         │
//! │  Trash icon ────────────► remove(id) ────────────► drop line if present │
//! │                                                                         │
//! │  Badge / cart panel ────► totals() ──────────────► (read only)          │
//! │                                                                         │
//! │  Unknown ids are never an error: remove and update are no-ops.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id
//! - Every quantity is at least 1
//! - Totals are recomputed on every call, nothing is cached

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// ## Snapshot Semantics
/// Product fields are copied when the line is first created. Adding the same
/// id again only bumps the quantity, so name and price keep the values seen
/// at the first add even if the catalog later says otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    pub id: ProductId,

    /// Name at time of adding (frozen)
    pub name: String,

    /// Price at time of adding (frozen)
    pub price: Money,

    pub image: String,

    pub category: String,

    /// Always >= 1
    pub quantity: i64,

    /// When this line was created
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a line with quantity 1 from a product snapshot.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Whether a "−" control should be enabled for this line.
    ///
    /// Decrementing at quantity 1 has no effect in the store, so renderers
    /// disable the control instead.
    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }
}

// =============================================================================
// Operation Outcomes
// =============================================================================

/// What [`Cart::add`] did. Callers use it to decide on a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended with quantity 1.
    Added,
    /// An existing line was bumped to `quantity`.
    Incremented { quantity: i64 },
}

impl AddOutcome {
    pub fn is_new_line(&self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// What [`Cart::update_quantity`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// No line with that id; nothing changed.
    NotInCart,
    /// The quantity moved from `from` to `to`.
    Updated { from: i64, to: i64 },
    /// The change would have left the quantity at zero or below, so the
    /// line kept `quantity`. The line is never removed this way.
    Unchanged { quantity: i64 },
}

// =============================================================================
// Totals
// =============================================================================

/// Derived totals for the badge and the cart panel footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct lines.
    pub line_count: usize,
    /// Sum of quantities (the badge number).
    pub total_items: i64,
    /// Sum of price × quantity.
    pub total_price: Money,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart for one session.
///
/// Owned by whoever drives the session; create as many independent carts
/// as needed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Line with the same id exists: quantity += 1, nothing else changes
    /// - Otherwise: appends a new line with quantity 1
    ///
    /// Never fails. Any product value is accepted.
    pub fn add(&mut self, product: &Product) -> AddOutcome {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return AddOutcome::Incremented {
                quantity: item.quantity,
            };
        }

        self.items.push(CartItem::from_product(product));
        AddOutcome::Added
    }

    /// Removes the line for `product_id`, returning it if it was present.
    ///
    /// Idempotent: removing an absent id leaves the cart unchanged.
    pub fn remove(&mut self, product_id: ProductId) -> Option<CartItem> {
        let index = self.items.iter().position(|i| i.id == product_id)?;
        Some(self.items.remove(index))
    }

    /// Adjusts the quantity of a line by `delta`.
    ///
    /// ## Behavior
    /// - Unknown id: no-op
    /// - `quantity + delta > 0`: quantity is replaced
    /// - Otherwise: the line is left exactly as it was (no clamp to 1, no
    ///   removal). A `-2` at quantity 2 does nothing.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> QuantityUpdate {
        let Some(item) = self.items.iter_mut().find(|i| i.id == product_id) else {
            return QuantityUpdate::NotInCart;
        };

        let from = item.quantity;
        let to = from.saturating_add(delta);
        if to > 0 {
            item.quantity = to;
            QuantityUpdate::Updated { from, to }
        } else {
            QuantityUpdate::Unchanged { quantity: from }
        }
    }

    /// Recomputes the totals from the current lines.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            line_count: self.items.len(),
            total_items: self
                .items
                .iter()
                .fold(0i64, |acc, i| acc.saturating_add(i.quantity)),
            total_price: self.items.iter().map(CartItem::line_total).sum(),
        }
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == product_id)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
