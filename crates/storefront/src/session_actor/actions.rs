//! Operations on a Session.
//!
//! [`SessionAction`] holds the one mutation a session supports. Everything a
//! page reads goes through [`SessionQuery`], whose variants match
//! [`SessionQueryResult`] 1:1.

use crate::model::{Order, OrderQuantities, Product};
use crate::stats::{DashboardStats, TopSeller};

/// State-changing operations on a Session.
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Applies one order; quantities are trusted, stock floors at zero.
    ApplyOrder(OrderQuantities),
}

/// Results from SessionActions - variants match 1:1 with SessionAction
#[derive(Debug, Clone)]
pub enum SessionActionResult {
    /// The recorded order, or `None` when no quantity was positive.
    ApplyOrder(Option<Order>),
}

/// Read-only views of a Session.
#[derive(Debug, Clone)]
pub enum SessionQuery {
    Products,
    Orders,
    OrdersCount,
    TotalRevenue,
    TopProducts { limit: usize },
    Version,
    Stats { top_limit: usize },
}

/// Results from SessionQueries - variants match 1:1 with SessionQuery
#[derive(Debug, Clone)]
pub enum SessionQueryResult {
    Products(Vec<Product>),
    Orders(Vec<Order>),
    OrdersCount(usize),
    TotalRevenue(f64),
    TopProducts(Vec<TopSeller>),
    Version(u64),
    Stats { version: u64, stats: DashboardStats },
}
