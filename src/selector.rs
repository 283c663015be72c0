//! Per-card quantity selector.
//!
//! A selector starts collapsed. Adding the item to the cart opens it with a
//! displayed quantity of one and an inactivity deadline. Every edit pushes the
//! deadline out again; the deadline expiring or a click outside the card
//! collapses it without touching the cart.

use crate::cart::CartStore;
use crate::error::CartError;
use crate::models::Item;
use crate::timer::{TimerId, TimerQueue};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

pub const DEFAULT_INACTIVITY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectorPhase {
    Collapsed,
    Open,
}

#[derive(Debug)]
pub struct SelectorController {
    item: Item,
    phase: SelectorPhase,
    displayed_quantity: u32,
    pending_timer: Option<TimerId>,
    timeout: Duration,
}

impl SelectorController {
    pub fn new(item: Item, timeout: Duration) -> Self {
        Self {
            item,
            phase: SelectorPhase::Collapsed,
            displayed_quantity: 1,
            pending_timer: None,
            timeout,
        }
    }

    pub fn phase(&self) -> SelectorPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == SelectorPhase::Open
    }

    pub fn displayed_quantity(&self) -> u32 {
        self.displayed_quantity
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending_timer
    }

    /// "Add to cart": puts one unit in the cart and opens the editor.
    pub fn open(
        &mut self,
        cart: &mut CartStore,
        timers: &mut TimerQueue,
        now: Instant,
    ) -> Result<(), CartError> {
        if self.is_open() {
            debug!(item = %self.item.name, "selector already open");
            return Ok(());
        }

        cart.add_item(&self.item, 1)?;
        self.displayed_quantity = 1;
        self.phase = SelectorPhase::Open;
        self.rearm(timers, now);
        debug!(item = %self.item.name, "selector opened");
        Ok(())
    }

    /// Raises the displayed quantity and tops the cart line up to match. Only
    /// a positive difference is added; a line already above the displayed
    /// quantity is left alone.
    pub fn increment(
        &mut self,
        cart: &mut CartStore,
        timers: &mut TimerQueue,
        now: Instant,
    ) -> Result<(), CartError> {
        if !self.is_open() {
            return Ok(());
        }

        let next = self
            .displayed_quantity
            .checked_add(1)
            .ok_or(CartError::InvalidQuantity(i64::from(self.displayed_quantity) + 1))?;

        match cart.line_for(&self.item.name).map(|l| l.quantity) {
            Some(in_cart) => {
                if next > in_cart {
                    cart.add_item(&self.item, next - in_cart)?;
                }
            }
            // Line was removed elsewhere while we were open.
            None => {
                cart.add_item(&self.item, 1)?;
            }
        }

        self.displayed_quantity = next;
        self.rearm(timers, now);
        debug!(item = %self.item.name, displayed = self.displayed_quantity, "selector incremented");
        Ok(())
    }

    /// Lowers the displayed quantity and sets the cart line to it. Floors at one.
    pub fn decrement(
        &mut self,
        cart: &mut CartStore,
        timers: &mut TimerQueue,
        now: Instant,
    ) -> Result<(), CartError> {
        if !self.is_open() || self.displayed_quantity <= 1 {
            return Ok(());
        }

        self.displayed_quantity -= 1;

        if let Some(id) = cart.line_for(&self.item.name).map(|l| l.id) {
            cart.update_quantity(id, self.displayed_quantity)?;
        }

        self.rearm(timers, now);
        debug!(item = %self.item.name, displayed = self.displayed_quantity, "selector decremented");
        Ok(())
    }

    /// Returns true if `id` was this selector's live deadline and it collapsed.
    pub fn timer_fired(&mut self, id: TimerId, timers: &mut TimerQueue) -> bool {
        if self.pending_timer != Some(id) {
            return false;
        }
        self.pending_timer = None;
        self.collapse(timers);
        debug!(item = %self.item.name, "selector closed after inactivity");
        true
    }

    /// A pointer went down somewhere other than this card.
    pub fn outside_interaction(&mut self, timers: &mut TimerQueue) -> bool {
        let was_open = self.is_open();
        self.collapse(timers);
        if was_open {
            debug!(item = %self.item.name, "selector closed by outside interaction");
        }
        was_open
    }

    /// Tear-down when the card is unmounted.
    pub fn dispose(&mut self, timers: &mut TimerQueue) {
        self.collapse(timers);
    }

    fn collapse(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.pending_timer.take() {
            timers.cancel(id);
        }
        self.phase = SelectorPhase::Collapsed;
        self.displayed_quantity = 1;
    }

    fn rearm(&mut self, timers: &mut TimerQueue, now: Instant) {
        let deadline = now + self.timeout;
        self.pending_timer = Some(timers.rearm(self.pending_timer, &self.item.name, deadline));
    }
}
