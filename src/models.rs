use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ImageSet {
    pub thumbnail: String,
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
}

/// A catalog entry. `name` is the identity used for cart matching.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub image: ImageSet,
}

/// Opaque cart line token. Minted by the cart store, never reused.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line-{}", self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderLine {
    pub id: LineId,
    pub item: Item,
    pub quantity: u32,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        self.item.price * self.quantity as f64
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub count: u64,
    pub price: f64,
}

/// Read-only copy of the cart taken when the order is confirmed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderSnapshot {
    pub lines: Vec<OrderLine>,
    pub total: f64,
    pub item_count: u64,
    pub confirmed_at: DateTime<Utc>,
}

/// What the presentation layer needs to draw one product card.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CardView {
    pub item: Item,
    pub selector_open: bool,
    pub displayed_quantity: u32,
    pub cart_quantity: u32,
}

/// Cart contents plus the figures the cart panel shows.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartView {
    pub lines: Vec<OrderLine>,
    pub totals: Totals,
    pub can_confirm: bool,
    /// True while the confirmation view is showing a snapshot.
    pub confirming: bool,
}
