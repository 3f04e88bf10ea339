//! Catalog filtering.

use crate::model::Product;
use std::collections::BTreeSet;
use std::fmt::Display;

/// Which category the catalog shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelector {
    #[default]
    All,
    /// Exact, case-sensitive match on the product's category.
    Exact(String),
}

impl CategorySelector {
    /// `"All"` (any case) or an empty string selects everything.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Exact(raw.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(c) => c == category,
        }
    }
}

impl Display for CategorySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Exact(c) => f.write_str(c),
        }
    }
}

/// Inclusive price bounds; either side may be open.
///
/// A bound that is not finite (`NaN`, infinities) counts as open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        self.lower().map_or(true, |min| price >= min)
            && self.upper().map_or(true, |max| price <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.lower().is_none() && self.upper().is_none()
    }

    fn lower(&self) -> Option<f64> {
        self.min.filter(|v| v.is_finite())
    }

    fn upper(&self) -> Option<f64> {
        self.max.filter(|v| v.is_finite())
    }
}

/// Category + free-text + price filter shared by the catalog and order pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub category: CategorySelector,
    pub query: String,
    pub price: PriceRange,
}

impl CatalogFilter {
    /// A product passes when its category matches, the trimmed query is empty
    /// or found (ignoring case) in its name or category, and its price is in
    /// range.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(&product.category) || !self.price.contains(product.price) {
            return false;
        }
        let needle = self.query.trim().to_lowercase();
        needle.is_empty()
            || product.name.to_lowercase().contains(&needle)
            || product.category.to_lowercase().contains(&needle)
    }

    /// Matching products, in catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn is_active(&self) -> bool {
        self.category != CategorySelector::All
            || !self.query.trim().is_empty()
            || !self.price.is_unbounded()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Distinct categories, sorted.
pub fn categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// What a category dropdown offers: `All`, then every category.
pub fn category_options(products: &[Product]) -> Vec<CategorySelector> {
    std::iter::once(CategorySelector::All)
        .chain(categories(products).into_iter().map(CategorySelector::Exact))
        .collect()
}
