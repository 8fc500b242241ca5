//! Shopping cart lines and quantity arithmetic.
//!
//! A cart holds at most one line per product. Every operation returns a new
//! cart and leaves the receiver untouched, so a rejected transition further
//! up the stack never has to undo anything.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// One product in the cart.
///
/// `name` and `price` are copied from the product when the line is created
/// and are not re-synced afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Always at least 1.
    pub qty: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            qty: 1,
        }
    }

    /// `qty × price` for this line.
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.price.times(self.qty)
    }
}

/// The shopper's cart, in the order lines were first added.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// All lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line in place or appends a new line with a
    /// quantity of 1.
    #[must_use]
    pub fn add(&self, product: &Product) -> Self {
        let mut lines = self.lines.clone();
        match lines.iter_mut().find(|line| line.id == product.id) {
            Some(line) => line.qty = line.qty.saturating_add(1),
            None => lines.push(CartLine::from_product(product)),
        }
        Self { lines }
    }

    /// Adjust the quantity of the line for `id` by `delta`.
    ///
    /// The result is floored at 1; this never removes a line. Unknown ids
    /// leave the cart unchanged.
    #[must_use]
    pub fn change_qty(&self, id: ProductId, delta: i32) -> Self {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                if line.id != id {
                    return line.clone();
                }
                let qty = (i64::from(line.qty) + i64::from(delta)).max(1);
                CartLine {
                    qty: u32::try_from(qty).unwrap_or(u32::MAX),
                    ..line.clone()
                }
            })
            .collect();
        Self { lines }
    }

    /// Drop the line for `id` whatever its quantity.
    #[must_use]
    pub fn remove(&self, id: ProductId) -> Self {
        Self {
            lines: self
                .lines
                .iter()
                .filter(|line| line.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Total units across all lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.qty)).sum()
    }

    /// Sum of every line total.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: i32) -> Product {
        Catalog::seeded().get(ProductId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_add_twice_increments_single_line() {
        let cart = Cart::default().add(&product(1)).add(&product(1));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().qty, 2);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total(), Price::new(498));
    }

    #[test]
    fn test_add_n_times() {
        let herbal = product(1);
        let cart = (0..7).fold(Cart::default(), |cart, _| cart.add(&herbal));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].qty, 7);
    }

    #[test]
    fn test_add_preserves_order() {
        let cart = Cart::default()
            .add(&product(3))
            .add(&product(1))
            .add(&product(3));
        let ids: Vec<_> = cart.lines().iter().map(|l| l.id.as_i32()).collect();
        assert_eq!(ids, [3, 1]);
        assert_eq!(cart.line(ProductId::new(3)).unwrap().qty, 2);
    }

    #[test]
    fn test_add_snapshots_name_and_price() {
        let mut pen = product(2);
        let cart = Cart::default().add(&pen);
        pen.price = Price::new(1);
        pen.name = "Renamed".to_string();
        let cart = cart.add(&pen);
        let line = cart.line(ProductId::new(2)).unwrap();
        assert_eq!(line.price, Price::new(499));
        assert_eq!(line.name, "Luxury Pen Set");
    }

    #[test]
    fn test_change_qty_clamps_at_one() {
        let cart = Cart::default().add(&product(1)).add(&product(1));
        let cart = cart.change_qty(ProductId::new(1), -5);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().qty, 1);
        let cart = cart.change_qty(ProductId::new(1), i32::MIN);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().qty, 1);
    }

    #[test]
    fn test_change_qty_only_touches_matching_line() {
        let cart = Cart::default().add(&product(1)).add(&product(2));
        let cart = cart.change_qty(ProductId::new(2), 3);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().qty, 1);
        assert_eq!(cart.line(ProductId::new(2)).unwrap().qty, 4);
    }

    #[test]
    fn test_change_qty_unknown_id_is_noop() {
        let cart = Cart::default().add(&product(1));
        assert_eq!(cart.change_qty(ProductId::new(42), 1), cart);
    }

    #[test]
    fn test_remove_drops_line_regardless_of_qty() {
        let cart = Cart::default()
            .add(&product(1))
            .add(&product(2))
            .change_qty(ProductId::new(1), 9);
        let cart = cart.remove(ProductId::new(1));
        assert!(cart.line(ProductId::new(1)).is_none());
        assert_eq!(cart.lines().len(), 1);
        assert!(cart.remove(ProductId::new(2)).is_empty());
    }

    #[test]
    fn test_total_matches_line_sum_after_mutations() {
        let cart = Cart::default()
            .add(&product(1))
            .add(&product(5))
            .add(&product(6))
            .change_qty(ProductId::new(5), 2)
            .change_qty(ProductId::new(6), -1)
            .add(&product(1))
            .remove(ProductId::new(6));
        let expected: u64 = cart
            .lines()
            .iter()
            .map(|l| u64::from(l.qty) * l.price.amount())
            .sum();
        assert_eq!(cart.total().amount(), expected);
        assert_eq!(cart.total(), Price::new(249 * 2 + 299 * 3));
    }
}
