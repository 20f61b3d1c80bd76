//! Shopping cart.
//!
//! A cart holds at most one line per kitchen id, and every line has a
//! quantity of at least one. Lines are kept in the order they were added.

use rust_decimal::Decimal;

use super::kitchen::{Kitchen, KitchenId};

/// One entry in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub kitchen: Kitchen,
    quantity: u32,
}

impl CartLine {
    fn new(kitchen: Kitchen, quantity: u32) -> Self {
        Self { kitchen, quantity }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price times quantity; an unparseable price counts as zero.
    ///
    /// Saturates at the `Decimal` bounds instead of overflowing.
    pub fn subtotal(&self) -> Decimal {
        self.kitchen
            .unit_price()
            .unwrap_or(Decimal::ZERO)
            .saturating_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, id: KitchenId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.kitchen.id == id)
    }

    fn line_mut(&mut self, id: KitchenId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.kitchen.id == id)
    }

    /// Add one unit of `kitchen`. Returns the line's new quantity.
    pub fn add(&mut self, kitchen: &Kitchen) -> u32 {
        self.add_quantity(kitchen, 1)
    }

    /// Add `quantity` units of `kitchen`, merging with an existing line.
    ///
    /// A zero quantity leaves the cart unchanged and returns the current
    /// quantity (zero if the kitchen is not in the cart).
    pub fn add_quantity(&mut self, kitchen: &Kitchen, quantity: u32) -> u32 {
        if quantity == 0 {
            return self.line(kitchen.id).map_or(0, CartLine::quantity);
        }

        match self.line_mut(kitchen.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
                line.quantity
            }
            None => {
                self.lines.push(CartLine::new(kitchen.clone(), quantity));
                quantity
            }
        }
    }

    /// Add one unit to an existing line. Returns `None` if there is no line.
    pub fn increase(&mut self, id: KitchenId) -> Option<u32> {
        let line = self.line_mut(id)?;
        line.quantity = line.quantity.saturating_add(1);
        Some(line.quantity)
    }

    /// Take one unit off a line, removing the line when it would hit zero.
    ///
    /// Returns the remaining quantity (`Some(0)` when the line was removed),
    /// or `None` if there is no line.
    pub fn decrease(&mut self, id: KitchenId) -> Option<u32> {
        let index = self.lines.iter().position(|line| line.kitchen.id == id)?;
        let line = &mut self.lines[index];
        if line.quantity > 1 {
            line.quantity -= 1;
            Some(line.quantity)
        } else {
            self.lines.remove(index);
            Some(0)
        }
    }

    /// Drop a line regardless of its quantity.
    pub fn remove(&mut self, id: KitchenId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.kitchen.id != id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Sum of the line subtotals, saturating at the `Decimal` bounds.
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .fold(Decimal::ZERO, |total, line| total.saturating_add(line.subtotal()))
    }
}
