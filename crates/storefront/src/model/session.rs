//! One storefront session: the live catalog plus its order history.

use crate::model::{Order, OrderId, OrderLine, OrderQuantities, Product, ProductId};
use crate::session_actor::SessionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use tracing::info;

/// Type-safe identifier for Sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// Mutable session state.
///
/// `products` stays in catalog order for the whole session. `orders` is
/// append-only. `version` counts applied orders and keys cached views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub version: u64,
}

/// Payload for creating a Session.
#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub products: Vec<Product>,
}

impl Session {
    /// Starts a session over `products`, rejecting duplicate ids and prices
    /// that are negative or not finite.
    pub fn from_seed(id: SessionId, products: Vec<Product>) -> Result<Self, SessionError> {
        let mut seen = HashSet::new();
        for p in &products {
            if !seen.insert(p.id) {
                return Err(SessionError::InvalidSeed(format!("duplicate id {}", p.id)));
            }
            if !p.price.is_finite() || p.price < 0.0 {
                return Err(SessionError::InvalidSeed(format!(
                    "{} has invalid price {}",
                    p.id, p.price
                )));
            }
        }
        Ok(Self {
            id,
            products,
            orders: Vec::new(),
            version: 0,
        })
    }

    /// Applies one order at `now`.
    ///
    /// Walks the catalog in order; every product with a positive requested
    /// quantity becomes one line priced at its current price, and its stock
    /// drops by the requested amount, floored at zero. Requested quantities
    /// are not checked against stock. Ids missing from the catalog are
    /// ignored.
    ///
    /// Returns `None` and leaves the session untouched when no line results.
    pub fn apply_order(
        &mut self,
        quantities: &OrderQuantities,
        now: DateTime<Utc>,
    ) -> Option<Order> {
        let lines: Vec<OrderLine> = self
            .products
            .iter()
            .filter_map(|p| match quantities.get(p.id) {
                0 => None,
                qty => Some(OrderLine::new(p.id, p.name.clone(), p.price, qty)),
            })
            .collect();

        if lines.is_empty() {
            return None;
        }

        for line in &lines {
            if let Some(p) = self.products.iter_mut().find(|p| p.id == line.product_id) {
                p.quantity = p.quantity.saturating_sub(line.qty);
            }
        }

        let order = Order::new(self.next_order_id(now), now, lines);
        info!(order_id = %order.id, lines = order.lines.len(), total = order.total, "Order recorded");
        self.orders.push(order.clone());
        self.version += 1;
        Some(order)
    }

    /// Milliseconds since the epoch, bumped past the previous order's id so
    /// ids stay strictly increasing even within one millisecond.
    fn next_order_id(&self, now: DateTime<Utc>) -> OrderId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        match self.orders.last() {
            Some(last) if millis <= last.id.0 => OrderId(last.id.0 + 1),
            _ => OrderId(millis),
        }
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
