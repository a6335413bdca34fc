//! In-memory shopping cart accumulator.
//!
//! Owned by the view/session layer; lifetime is one page session and there
//! is no persistence. The cart is a plain value with `add`/`remove`/`total`
//! operations so rendering stays decoupled from state changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::item::CatalogItem;

/// One cart line. Unit price is captured at add time and never re-fetched,
/// so a later catalog refresh cannot silently reprice a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// Ordered cart state, unique by item id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item: increments the existing line's quantity, or appends a
    /// quantity-1 line preserving insertion order.
    pub fn add(&mut self, item: &CatalogItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                item_id: item.id.clone(),
                name: item.name.clone(),
                unit_price: item.price,
                quantity: 1,
            });
        }
    }

    /// Removes the line with the given item id. No-op when absent.
    pub fn remove(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Sum of `unit_price × quantity` over all lines, rounded to 2 decimal
    /// places for display.
    #[must_use]
    pub fn total(&self) -> Decimal {
        let mut total = self
            .lines
            .iter()
            .map(|l| l.unit_price * Decimal::from(l.quantity))
            .sum::<Decimal>()
            .round_dp(2);
        // Pin the scale so totals render as "800.00", not "800".
        total.rescale(2);
        total
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, name: &str, price: i64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            description: "A tree.".to_string(),
            long_description: None,
            category: "Trees".to_string(),
            image: "https://i.ibb.co/x1/tree.jpg".to_string(),
            price: Decimal::new(price, 0),
            tags: vec![],
        }
    }

    #[test]
    fn add_new_item_creates_quantity_one_line() {
        let mut cart = CartState::new();
        cart.add(&make_item("1", "Mango Tree", 500));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[0].unit_price, Decimal::new(500, 0));
    }

    #[test]
    fn add_same_id_twice_increments_quantity() {
        let mut cart = CartState::new();
        let item = make_item("1", "Mango Tree", 500);
        cart.add(&item);
        cart.add(&item);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), Decimal::new(1000, 0).round_dp(2));
    }

    #[test]
    fn unit_price_is_fixed_at_add_time() {
        let mut cart = CartState::new();
        let mut item = make_item("1", "Mango Tree", 500);
        cart.add(&item);
        item.price = Decimal::new(999, 0);
        cart.add(&item);
        // Both units keep the original price from the first add.
        assert_eq!(cart.lines()[0].unit_price, Decimal::new(500, 0));
        assert_eq!(cart.total(), Decimal::new(1000, 0).round_dp(2));
    }

    #[test]
    fn remove_deletes_the_line() {
        let mut cart = CartState::new();
        let item = make_item("1", "Mango Tree", 500);
        cart.add(&item);
        cart.add(&item);
        cart.remove("1");
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut cart = CartState::new();
        cart.add(&make_item("1", "Mango Tree", 500));
        cart.remove("does-not-exist");
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn total_sums_distinct_lines_to_two_decimals() {
        let mut cart = CartState::new();
        cart.add(&make_item("a", "Mango Tree", 500));
        cart.add(&make_item("b", "Jacaranda", 300));
        assert_eq!(cart.total().to_string(), "800.00");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = CartState::new();
        cart.add(&make_item("b", "Jacaranda", 300));
        cart.add(&make_item("a", "Mango Tree", 500));
        cart.add(&make_item("b", "Jacaranda", 300));
        let ids: Vec<_> = cart.lines().iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
