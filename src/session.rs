use crate::cart::CartStore;
use crate::models::OrderSnapshot;
use chrono::Utc;
use tracing::{debug, info};

/// Confirmation flow. Holds the snapshot while the confirmation view is open.
#[derive(Debug, Default)]
pub struct OrderSession {
    snapshot: Option<OrderSnapshot>,
}

impl OrderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_confirm(&self, cart: &CartStore) -> bool {
        !cart.is_empty()
    }

    /// Captures the cart and opens the confirmation view. Does nothing on an
    /// empty cart; returns whether a snapshot was taken.
    pub fn confirm(&mut self, cart: &CartStore) -> bool {
        if !self.can_confirm(cart) {
            debug!("confirm ignored: cart is empty");
            return false;
        }

        let totals = cart.totals();
        info!(lines = cart.len(), items = totals.count, total = totals.price, "order confirmed");
        self.snapshot = Some(OrderSnapshot {
            lines: cart.lines().to_vec(),
            total: totals.price,
            item_count: totals.count,
            confirmed_at: Utc::now(),
        });
        true
    }

    /// Clears the cart and closes the confirmation view.
    pub fn start_new_order(&mut self, cart: &mut CartStore) {
        cart.clear();
        self.snapshot = None;
        info!("new order started");
    }

    /// Closes the confirmation view; the cart keeps its lines.
    pub fn dismiss(&mut self) {
        if self.snapshot.take().is_some() {
            debug!("confirmation dismissed");
        }
    }

    pub fn is_confirming(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<&OrderSnapshot> {
        self.snapshot.as_ref()
    }
}
