use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::config::ShopConfig;
use crate::error::CartError;
use crate::models::{CardView, CartView, Item, LineId, OrderLine, OrderSnapshot, Totals};
use crate::selector::SelectorController;
use crate::session::OrderSession;
use crate::timer::TimerQueue;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Owns every piece of shop state and applies events to it one at a time.
///
/// Commands never fail toward the caller. Rejected input is logged and
/// leaves the state untouched.
#[derive(Debug)]
pub struct Shop {
    catalog: Catalog,
    cart: CartStore,
    session: OrderSession,
    selectors: HashMap<String, SelectorController>,
    timers: TimerQueue,
    selector_timeout: Duration,
}

impl Shop {
    /// Every catalog item gets a card, so every item starts with a mounted
    /// selector.
    pub fn new(catalog: Catalog, selector_timeout: Duration) -> Self {
        let mut shop = Self {
            catalog,
            cart: CartStore::new(),
            session: OrderSession::new(),
            selectors: HashMap::new(),
            timers: TimerQueue::new(),
            selector_timeout,
        };

        let names: Vec<String> = shop.catalog.items().iter().map(|i| i.name.clone()).collect();
        for name in names {
            report("mount_card", shop.mount_card(&name));
        }
        shop
    }

    pub fn from_config(config: &ShopConfig) -> Self {
        Self::new(
            Catalog::load_or_empty(&config.catalog_path),
            config.selector_timeout(),
        )
    }

    // ----- cart commands -----

    pub fn add_to_cart(&mut self, name: &str, quantity: i64) {
        let result = self.catalog_item(name).and_then(|item| {
            let quantity = positive_quantity(quantity)?;
            self.cart.add_item(&item, quantity).map(|_| ())
        });
        report("add_to_cart", result);
    }

    pub fn update_quantity(&mut self, id: LineId, quantity: i64) {
        let result = u32::try_from(quantity)
            .map_err(|_| CartError::InvalidQuantity(quantity))
            .and_then(|quantity| self.cart.update_quantity(id, quantity));
        report("update_quantity", result);
    }

    pub fn remove_from_cart(&mut self, id: LineId) {
        report("remove_from_cart", self.cart.remove_item(id));
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // ----- order commands -----

    pub fn confirm_order(&mut self) -> bool {
        self.session.confirm(&self.cart)
    }

    pub fn dismiss_confirmation(&mut self) {
        self.session.dismiss();
    }

    pub fn start_new_order(&mut self) {
        self.session.start_new_order(&mut self.cart);
    }

    // ----- selector events -----

    pub fn mount_card(&mut self, name: &str) -> Result<(), CartError> {
        if self.selectors.contains_key(name) {
            return Ok(());
        }
        let item = self.catalog_item(name)?;
        self.selectors.insert(
            name.to_string(),
            SelectorController::new(item, self.selector_timeout),
        );
        Ok(())
    }

    /// Disposes the card's selector, canceling its deadline. An unmounted card
    /// no longer hears outside interactions.
    pub fn unmount_card(&mut self, name: &str) {
        if let Some(mut selector) = self.selectors.remove(name) {
            selector.dispose(&mut self.timers);
            debug!(item = %name, "card unmounted");
        }
    }

    pub fn open_selector(&mut self, name: &str, now: Instant) {
        let result = match self.selectors.get_mut(name) {
            Some(selector) => selector.open(&mut self.cart, &mut self.timers, now),
            None => Err(CartError::NotMounted(name.to_string())),
        };
        report("open_selector", result);
    }

    pub fn increment(&mut self, name: &str, now: Instant) {
        let result = match self.selectors.get_mut(name) {
            Some(selector) => selector.increment(&mut self.cart, &mut self.timers, now),
            None => Err(CartError::NotMounted(name.to_string())),
        };
        report("increment", result);
    }

    pub fn decrement(&mut self, name: &str, now: Instant) {
        let result = match self.selectors.get_mut(name) {
            Some(selector) => selector.decrement(&mut self.cart, &mut self.timers, now),
            None => Err(CartError::NotMounted(name.to_string())),
        };
        report("decrement", result);
    }

    /// A pointer went down on `target` (`None` when it landed on no card).
    /// Every other mounted selector treats it as an outside interaction.
    /// Returns the cards that collapsed.
    pub fn pointer_down(&mut self, target: Option<&str>) -> Vec<String> {
        let mut closed = Vec::new();
        for (name, selector) in self.selectors.iter_mut() {
            if Some(name.as_str()) == target {
                continue;
            }
            if selector.outside_interaction(&mut self.timers) {
                closed.push(name.clone());
            }
        }
        closed.sort();
        closed
    }

    /// Fires every deadline due at `now`. Returns the cards that collapsed.
    pub fn tick(&mut self, now: Instant) -> Vec<String> {
        let mut closed = Vec::new();
        for expired in self.timers.pop_due(now) {
            let fired = self
                .selectors
                .get_mut(&expired.owner)
                .is_some_and(|selector| selector.timer_fired(expired.id, &mut self.timers));
            if fired {
                closed.push(expired.owner);
            } else {
                debug!(owner = %expired.owner, "stale selector timer ignored");
            }
        }
        closed
    }

    // ----- reads -----

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &[OrderLine] {
        self.cart.lines()
    }

    pub fn totals(&self) -> Totals {
        self.cart.totals()
    }

    pub fn can_confirm(&self) -> bool {
        self.session.can_confirm(&self.cart)
    }

    pub fn snapshot(&self) -> Option<&OrderSnapshot> {
        self.session.snapshot()
    }

    pub fn cart_quantity(&self, name: &str) -> u32 {
        self.cart.line_for(name).map_or(0, |l| l.quantity)
    }

    pub fn cart_view(&self) -> CartView {
        CartView {
            lines: self.cart.lines().to_vec(),
            totals: self.totals(),
            can_confirm: self.can_confirm(),
            confirming: self.session.is_confirming(),
        }
    }

    pub fn selector(&self, name: &str) -> Option<&SelectorController> {
        self.selectors.get(name)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn cards(&self) -> Vec<CardView> {
        self.catalog
            .items()
            .iter()
            .map(|item| {
                let selector = self.selectors.get(&item.name);
                CardView {
                    item: item.clone(),
                    selector_open: selector.is_some_and(SelectorController::is_open),
                    displayed_quantity: selector.map_or(1, SelectorController::displayed_quantity),
                    cart_quantity: self.cart_quantity(&item.name),
                }
            })
            .collect()
    }

    fn catalog_item(&self, name: &str) -> Result<Item, CartError> {
        self.catalog
            .get(name)
            .cloned()
            .ok_or_else(|| CartError::UnknownItem(name.to_string()))
    }
}

fn positive_quantity(quantity: i64) -> Result<u32, CartError> {
    match u32::try_from(quantity) {
        Ok(q) if q >= 1 => Ok(q),
        _ => Err(CartError::InvalidQuantity(quantity)),
    }
}

fn report(op: &str, result: Result<(), CartError>) {
    match result {
        Ok(()) => {}
        Err(e @ CartError::UnknownLineId(_)) => debug!(op, error = %e, "ignored"),
        Err(e) => warn!(op, error = %e, "rejected"),
    }
}
