//! Derived views over a session.
//!
//! Everything here is a pure function of the product list and the order
//! history. [`StatsCache`] keeps the last [`DashboardStats`] around until the
//! session version moves.

use crate::catalog::categories;
use crate::model::{Order, Product, ProductId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of best sellers the dashboard shows unless configured otherwise.
pub const DEFAULT_TOP_SELLERS: usize = 3;

/// One entry of the best-seller ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSeller {
    pub product_id: ProductId,
    pub name: String,
    pub qty: u64,
}

pub fn total_revenue(orders: &[Order]) -> f64 {
    orders.iter().map(|o| o.total).sum()
}

pub fn orders_count(orders: &[Order]) -> usize {
    orders.len()
}

/// Units sold per product across every order, highest first, at most `limit`.
///
/// Products that sold the same amount keep the order in which they first
/// appear in the history.
pub fn top_sellers(orders: &[Order], limit: usize) -> Vec<TopSeller> {
    let mut ranking: Vec<TopSeller> = Vec::new();
    for line in orders.iter().flat_map(|o| &o.lines) {
        match ranking.iter_mut().find(|t| t.product_id == line.product_id) {
            Some(entry) => entry.qty += u64::from(line.qty),
            None => ranking.push(TopSeller {
                product_id: line.product_id,
                name: line.name.clone(),
                qty: u64::from(line.qty),
            }),
        }
    }
    // stable
    ranking.sort_by(|a, b| b.qty.cmp(&a.qty));
    ranking.truncate(limit);
    ranking
}

/// Mean stock per product; 0 for an empty catalog.
pub fn average_stock(products: &[Product]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }
    let total: u64 = products.iter().map(|p| u64::from(p.quantity)).sum();
    total as f64 / products.len() as f64
}

/// [`average_stock`] rounded half away from zero, as displayed.
pub fn rounded_average_stock(products: &[Product]) -> u64 {
    average_stock(products).round() as u64
}

/// Everything the dashboard page displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub product_count: usize,
    pub orders_count: usize,
    pub total_revenue: f64,
    pub average_stock: u64,
    pub categories: Vec<String>,
    pub top_sellers: Vec<TopSeller>,
}

impl DashboardStats {
    pub fn compute(products: &[Product], orders: &[Order], top_limit: usize) -> Self {
        Self {
            product_count: products.len(),
            orders_count: orders_count(orders),
            total_revenue: total_revenue(orders),
            average_stock: rounded_average_stock(products),
            categories: categories(products),
            top_sellers: top_sellers(orders, top_limit),
        }
    }
}

/// Last computed stats, tagged with the session version they came from.
#[derive(Debug, Default)]
pub struct StatsCache {
    cached: Option<(u64, DashboardStats)>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached stats for `version`, if that is what was last stored.
    pub fn get(&self, version: u64) -> Option<&DashboardStats> {
        self.cached
            .as_ref()
            .filter(|(v, _)| *v == version)
            .map(|(_, stats)| stats)
    }

    /// Returns the stats for `version`, calling `compute` only on a miss.
    pub fn get_or_compute(
        &mut self,
        version: u64,
        compute: impl FnOnce() -> DashboardStats,
    ) -> &DashboardStats {
        let (_, stats) = match self.cached.take() {
            Some(entry) if entry.0 == version => self.cached.insert(entry),
            _ => {
                debug!(version, "Stats cache miss");
                self.cached.insert((version, compute()))
            }
        };
        stats
    }
}
