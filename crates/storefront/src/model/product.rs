//! Catalog products.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Products.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Accepts both the bare number (`"2"`) and the display form (`"product_2"`).
impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.strip_prefix("product_").unwrap_or(s).parse().map(Self)
    }
}

/// A product in the storefront catalog.
///
/// `quantity` is the live stock of the current session. It only ever goes
/// down (orders) and never below zero; nothing restocks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub restock_threshold: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Stable catalog identifier
    /// * `name` - Display name
    /// * `category` - Exact category label used by the catalog filter
    /// * `price` - Unit price in euros
    /// * `quantity` - Available stock
    /// * `restock_threshold` - Stock level below which the product is flagged
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: u32,
        restock_threshold: u32,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            category: category.into(),
            price,
            quantity,
            restock_threshold,
        }
    }

    /// Strictly below the threshold; a product sitting exactly on it is fine.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.restock_threshold
    }
}
