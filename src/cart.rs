use crate::error::CartError;
use crate::models::{Item, LineId, OrderLine, Totals};
use tracing::debug;

/// Sole owner and writer of the cart lines. Lines keep insertion order and
/// there is never more than one line per item name.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<OrderLine>,
    next_id: u64,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `item`, merging into the existing line for the
    /// same name if there is one. A merge that would overflow the line is
    /// rejected and leaves the line as it was.
    pub fn add_item(&mut self, item: &Item, quantity: u32) -> Result<LineId, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(0));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item.name == item.name) {
            line.quantity = line
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::InvalidQuantity(i64::from(quantity)))?;
            debug!(line = %line.id, item = %item.name, quantity = line.quantity, "cart line incremented");
            return Ok(line.id);
        }

        let id = self.mint_id();
        self.lines.push(OrderLine {
            id,
            item: item.clone(),
            quantity,
        });
        debug!(line = %id, item = %item.name, quantity, "cart line added");
        Ok(id)
    }

    /// Absolute set. Zero removes the line.
    pub fn update_quantity(&mut self, id: LineId, new_quantity: u32) -> Result<(), CartError> {
        if new_quantity == 0 {
            return self.remove_item(id);
        }

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(CartError::UnknownLineId(id))?;
        line.quantity = new_quantity;
        debug!(line = %id, quantity = new_quantity, "cart line quantity set");
        Ok(())
    }

    pub fn remove_item(&mut self, id: LineId) -> Result<(), CartError> {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        if self.lines.len() == before {
            return Err(CartError::UnknownLineId(id));
        }
        debug!(line = %id, "cart line removed");
        Ok(())
    }

    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            debug!(lines = self.lines.len(), "cart cleared");
        }
        self.lines.clear();
    }

    pub fn totals(&self) -> Totals {
        Totals {
            count: self.lines.iter().map(|l| u64::from(l.quantity)).sum(),
            price: self.lines.iter().map(OrderLine::line_total).sum(),
        }
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&OrderLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// The line holding `name`, if that item is in the cart.
    pub fn line_for(&self, name: &str) -> Option<&OrderLine> {
        self.lines.iter().find(|l| l.item.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn mint_id(&mut self) -> LineId {
        self.next_id += 1;
        LineId(self.next_id)
    }
}
