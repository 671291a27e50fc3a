//! # Cart Commands
//!
//! Commands the presentation layer calls to read and change the cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart    ┌──────────┐   checkout    ┌──────────┐ │
//! │  │  Empty   │─────────────────►│ In Cart  │──────────────►│ Summary  │ │
//! │  │  Cart    │◄─────────────────│          │  (no effect   │ shown    │ │
//! │  └──────────┘  remove last     └──────────┘   on the cart)└──────────┘ │
//! │                                  │      ▲                               │
//! │                                  └──────┘                               │
//! │                         update_cart_item / remove_from_cart             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use cosmic_core::{AddOutcome, Cart, CartItem, CartTotals, Money, ProductId, QuantityUpdate};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::notify::{Notification, Notifier};
use crate::state::{CartState, CatalogState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: cart.totals(),
        }
    }
}

/// Result of `add_to_cart`: the touched line plus the whole cart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    pub product_id: ProductId,
    /// `true` when the product got a fresh line, `false` when an existing
    /// line was incremented.
    pub new_line: bool,
    /// Quantity of the touched line after the add.
    pub quantity: i64,
    #[serde(flatten)]
    pub cart: CartResponse,
}

/// What the shopper sees after pressing "Checkout".
///
/// Checkout submits nothing. The cart is left as it was.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub session_id: Uuid,
    pub line_count: usize,
    pub total_items: i64,
    pub total_price: Money,
    pub cart_created_at: DateTime<Utc>,
    pub requested_at: DateTime<Utc>,
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart.cart())
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases by one
/// - Otherwise: appended as a new line with quantity 1
/// - Either way a "added to cart" notification goes to `notifier`
///
/// ## Errors
/// `NOT_FOUND` if the id is not in the catalog. The cart is untouched and
/// nothing is notified.
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &mut CartState,
    notifier: &dyn Notifier,
    product_id: ProductId,
) -> Result<AddToCartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog.inner().require(product_id)?;
    let outcome = cart.cart_mut().add(product);

    let quantity = match outcome {
        AddOutcome::Added => 1,
        AddOutcome::Incremented { quantity } => quantity,
    };
    debug!(
        product_id = %product_id,
        new_line = outcome.is_new_line(),
        quantity,
        "cart line added"
    );

    notifier.notify(Notification::added_to_cart(&product.name));

    Ok(AddToCartResponse {
        product_id,
        new_line: outcome.is_new_line(),
        quantity,
        cart: CartResponse::from(cart.cart()),
    })
}

/// Changes a line's quantity by `delta` (+1 / -1 from the cart panel).
///
/// Never fails. Unknown ids and changes that would take the quantity to
/// zero or below leave the cart as it was.
pub fn update_cart_item(cart: &mut CartState, product_id: ProductId, delta: i64) -> CartResponse {
    debug!(product_id = %product_id, delta, "update_cart_item command");

    match cart.cart_mut().update_quantity(product_id, delta) {
        QuantityUpdate::Updated { from, to } => {
            debug!(product_id = %product_id, from, to, "quantity updated")
        }
        QuantityUpdate::Unchanged { quantity } => {
            debug!(product_id = %product_id, quantity, "quantity kept, change would reach zero")
        }
        QuantityUpdate::NotInCart => debug!(product_id = %product_id, "not in cart"),
    }

    CartResponse::from(cart.cart())
}

/// Removes a line from the cart. Removing an absent id is a no-op.
pub fn remove_from_cart(cart: &mut CartState, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    if let Some(item) = cart.cart_mut().remove(product_id) {
        debug!(product_id = %product_id, quantity = item.quantity, "cart line removed");
    }

    CartResponse::from(cart.cart())
}

/// Summarises the cart when the shopper presses "Checkout".
///
/// ## Errors
/// `VALIDATION_ERROR` when the cart is empty, since there is nothing to
/// check out.
pub fn checkout(cart: &CartState) -> Result<CheckoutSummary, ApiError> {
    debug!("checkout command");

    if cart.cart().is_empty() {
        return Err(ApiError::validation("Cart is empty"));
    }

    let totals = cart.cart().totals();
    info!(
        session_id = %cart.session_id(),
        total_items = totals.total_items,
        total_price = %totals.total_price,
        "checkout requested"
    );

    Ok(CheckoutSummary {
        session_id: cart.session_id(),
        line_count: totals.line_count,
        total_items: totals.total_items,
        total_price: totals.total_price,
        cart_created_at: cart.cart().created_at(),
        requested_at: Utc::now(),
    })
}
