//! Product listing with filters.

use crate::catalog::{category_options, CatalogFilter, CategorySelector, PriceRange};
use crate::clients::StoreHandle;
use crate::format::format_eur;
use crate::model::{Product, ProductId};
use crate::session_actor::SessionError;

/// One displayed product.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub price_label: String,
    pub quantity: u32,
    pub low_stock: bool,
}

impl From<&Product> for CatalogRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            category: p.category.clone(),
            price: p.price,
            price_label: format_eur(p.price),
            quantity: p.quantity,
            low_stock: p.is_low_stock(),
        }
    }
}

pub struct CatalogView {
    store: StoreHandle,
    products: Vec<Product>,
    filter: CatalogFilter,
}

impl CatalogView {
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            products: Vec::new(),
            filter: CatalogFilter::default(),
        }
    }

    /// Builds the view and loads the current products.
    pub async fn open(store: StoreHandle) -> Result<Self, SessionError> {
        let mut view = Self::new(store);
        view.refresh().await?;
        Ok(view)
    }

    pub async fn refresh(&mut self) -> Result<(), SessionError> {
        self.products = self.store.products().await?;
        Ok(())
    }

    pub fn rows(&self) -> Vec<CatalogRow> {
        self.filter
            .apply(&self.products)
            .into_iter()
            .map(CatalogRow::from)
            .collect()
    }

    pub fn categories(&self) -> Vec<CategorySelector> {
        category_options(&self.products)
    }

    pub fn set_category(&mut self, category: CategorySelector) {
        self.filter.category = category;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.filter.price = range;
    }

    pub fn is_filtered(&self) -> bool {
        self.filter.is_active()
    }

    pub fn reset(&mut self) {
        self.filter.reset();
    }
}
