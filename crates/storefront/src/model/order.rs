//! Orders and the quantity maps they are built from.

use crate::model::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Type-safe identifier for Orders.
///
/// Derived from the creation time in milliseconds, so ids sort in
/// creation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One product's share of an order. `price` is the unit price when the order
/// was applied, not whatever the catalog says later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub qty: u32,
    pub subtotal: f64,
}

impl OrderLine {
    pub fn new(product_id: ProductId, name: impl Into<String>, price: f64, qty: u32) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            qty,
            subtotal: f64::from(qty) * price,
        }
    }
}

/// A recorded order. Never empty, never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub timestamp: DateTime<Utc>,
    pub total: f64,
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Builds an order from its lines; `total` is their subtotal sum.
    pub fn new(id: OrderId, timestamp: DateTime<Utc>, lines: Vec<OrderLine>) -> Self {
        let total = lines.iter().map(|l| l.subtotal).sum();
        Self {
            id,
            timestamp,
            total,
            lines,
        }
    }

    /// Units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.qty)).sum()
    }
}

/// Requested quantity per product, as submitted by the order form.
///
/// Entries at zero are allowed and ignored when the order is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuantities(BTreeMap<ProductId, u32>);

impl OrderQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: ProductId, qty: u32) {
        self.0.insert(id, qty);
    }

    /// Zero for products that were never set.
    pub fn get(&self, id: ProductId) -> u32 {
        self.0.get(&id).copied().unwrap_or(0)
    }

    /// Sum of all requested units.
    pub fn total_units(&self) -> u64 {
        self.0.values().map(|&qty| u64::from(qty)).sum()
    }
}

impl FromIterator<(ProductId, u32)> for OrderQuantities {
    fn from_iter<I: IntoIterator<Item = (ProductId, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(u32, u32); N]> for OrderQuantities {
    fn from(entries: [(u32, u32); N]) -> Self {
        entries
            .into_iter()
            .map(|(id, qty)| (ProductId(id), qty))
            .collect()
    }
}

/// Turns raw quantity input into a unit count.
///
/// Anything that is not a finite positive number (empty, text, negative,
/// `NaN`) becomes 0. Fractions are truncated.
pub fn normalize_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => n.trunc().min(f64::from(u32::MAX)) as u32,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total_is_sum_of_subtotals() {
        let lines = vec![
            OrderLine::new(ProductId(2), "Jean", 50.0, 3),
            OrderLine::new(ProductId(3), "Casquette", 15.0, 2),
        ];
        let order = Order::new(OrderId(1), Utc::now(), lines);
        assert_eq!(order.lines[0].subtotal, 150.0);
        assert_eq!(order.total, 180.0);
        assert_eq!(order.item_count(), 5);
    }

    #[test]
    fn test_quantities_default_to_zero() {
        let q = OrderQuantities::from([(2, 0), (5, 0)]);
        assert_eq!(q.total_units(), 0);
        assert_eq!(q.get(ProductId(9)), 0);

        let q = OrderQuantities::from([(2, 3)]);
        assert_eq!(q.total_units(), 3);
    }

    #[test]
    fn test_unit_totals_do_not_overflow() {
        let q = OrderQuantities::from([(1, u32::MAX), (2, u32::MAX)]);
        assert_eq!(q.total_units(), 2 * u64::from(u32::MAX));

        let lines = vec![
            OrderLine::new(ProductId(1), "T-shirt", 20.0, u32::MAX),
            OrderLine::new(ProductId(2), "Jean", 50.0, u32::MAX),
        ];
        let order = Order::new(OrderId(1), Utc::now(), lines);
        assert_eq!(order.item_count(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_normalize_quantity() {
        assert_eq!(normalize_quantity("3"), 3);
        assert_eq!(normalize_quantity(" 4 "), 4);
        assert_eq!(normalize_quantity("2.9"), 2);
        assert_eq!(normalize_quantity("-1"), 0);
        assert_eq!(normalize_quantity("abc"), 0);
        assert_eq!(normalize_quantity(""), 0);
        assert_eq!(normalize_quantity("NaN"), 0);
        assert_eq!(normalize_quantity("inf"), 0);
    }
}
