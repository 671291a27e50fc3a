//! # Notifications
//!
//! Toast-style confirmations shown after a product is added to the cart.
//!
//! The cart never notifies anyone. `add_to_cart` inspects the outcome of
//! `Cart::add` and hands a [`Notification`] to whatever [`Notifier`] the
//! caller supplied. Notifying cannot fail and cannot undo the cart change.

use std::cell::RefCell;

use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn added_to_cart(product_name: &str) -> Self {
        Notification {
            title: "Added to cart".to_string(),
            description: format!("{} has been added to your cart", product_name),
        }
    }
}

/// Fire-and-forget sink for notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log instead of showing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        info!(
            title = %notification.title,
            description = %notification.description,
            "notification"
        );
    }
}

/// Queues notifications until the renderer drains and displays them.
#[derive(Debug, Default)]
pub struct Outbox {
    pending: RefCell<Vec<Notification>>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every queued notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.pending.take()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl Notifier for Outbox {
    fn notify(&self, notification: Notification) {
        debug!(title = %notification.title, "notification queued");
        self.pending.borrow_mut().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_to_cart_text() {
        let n = Notification::added_to_cart("Lunar Dream");
        assert_eq!(n.title, "Added to cart");
        assert_eq!(n.description, "Lunar Dream has been added to your cart");
    }

    #[test]
    fn test_outbox_drains_in_order() {
        let outbox = Outbox::new();
        outbox.notify(Notification::added_to_cart("A"));
        outbox.notify(Notification::added_to_cart("B"));

        let drained = outbox.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].description, "A has been added to your cart");
        assert!(outbox.is_empty());
        assert!(outbox.drain().is_empty());
    }

    #[test]
    fn test_log_notifier_accepts_anything() {
        LogNotifier.notify(Notification::added_to_cart(""));
    }
}
