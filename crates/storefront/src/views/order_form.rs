//! # Order Form
//!
//! Customer details, a quantity per product and a two-step submit:
//!
//! ```text
//! Editing --submit--> AwaitingConfirmation --confirm--> Confirmed
//!    ^                      |                              |
//!    +-------cancel---------+                              |
//!    +-----------------------new_order---------------------+
//! ```
//!
//! Quantities are bounded to the stock shown when they were typed. The
//! store does not re-check them.

use crate::catalog::CatalogFilter;
use crate::clients::StoreHandle;
use crate::model::{normalize_quantity, Order, OrderLine, OrderQuantities, Product, ProductId};
use crate::session_actor::SessionError;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderFormError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("No product selected")]
    EmptyCart,

    #[error("The order is not awaiting confirmation")]
    NotAwaitingConfirmation,

    #[error("The order is already confirmed; start a new one")]
    AlreadyConfirmed,

    #[error(transparent)]
    Store(#[from] SessionError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Customer {
    fn check(&self) -> Result<(), OrderFormError> {
        for (value, field) in [
            (&self.first_name, "first name"),
            (&self.last_name, "last name"),
            (&self.email, "email"),
        ] {
            if value.trim().is_empty() {
                return Err(OrderFormError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// What the success screen shows. Taken from the recorded order, so later
/// stock or price changes do not alter it.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub customer: Customer,
    pub order: Order,
}

impl Confirmation {
    pub fn total_items(&self) -> u64 {
        self.order.item_count()
    }

    pub fn total_price(&self) -> f64 {
        self.order.total
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormStep {
    Editing,
    AwaitingConfirmation,
    Confirmed(Confirmation),
}

pub struct OrderForm {
    store: StoreHandle,
    products: Vec<Product>,
    quantities: OrderQuantities,
    pub customer: Customer,
    pub filter: CatalogFilter,
    step: FormStep,
}

impl OrderForm {
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            products: Vec::new(),
            quantities: OrderQuantities::new(),
            customer: Customer::default(),
            filter: CatalogFilter::default(),
            step: FormStep::Editing,
        }
    }

    /// Builds the form and loads the current products.
    pub async fn open(store: StoreHandle) -> Result<Self, SessionError> {
        let mut form = Self::new(store);
        form.refresh().await?;
        Ok(form)
    }

    /// Reloads products. Every product gets a quantity entry, 0 unless one
    /// was already set.
    pub async fn refresh(&mut self) -> Result<(), SessionError> {
        self.products = self.store.products().await?;
        for p in &self.products {
            let qty = self.quantities.get(p.id);
            self.quantities.set(p.id, qty);
        }
        Ok(())
    }

    pub fn step(&self) -> &FormStep {
        &self.step
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products passing the form's own filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(&self.products)
    }

    pub fn quantity(&self, id: ProductId) -> u32 {
        self.quantities.get(id)
    }

    /// Records the quantity typed for `id`, normalised and bounded to stock.
    ///
    /// Returns the stored value, or `None` for an unknown product or when the
    /// form is not being edited.
    pub fn set_quantity(&mut self, id: ProductId, raw: &str) -> Option<u32> {
        if self.step != FormStep::Editing {
            return None;
        }
        let product = self.products.iter().find(|p| p.id == id)?;
        let qty = normalize_quantity(raw).min(product.quantity);
        self.quantities.set(id, qty);
        Some(qty)
    }

    pub fn remove(&mut self, id: ProductId) {
        if self.step == FormStep::Editing {
            self.quantities.set(id, 0);
        }
    }

    /// Selected products with their subtotals, in catalog order.
    pub fn cart(&self) -> Vec<OrderLine> {
        self.products
            .iter()
            .filter_map(|p| match self.quantities.get(p.id) {
                0 => None,
                qty => Some(OrderLine::new(p.id, p.name.clone(), p.price, qty)),
            })
            .collect()
    }

    pub fn total_items(&self) -> u64 {
        self.cart().iter().map(|l| u64::from(l.qty)).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.cart().iter().map(|l| l.subtotal).sum()
    }

    /// Checks the customer fields and the cart, then asks for confirmation.
    pub fn submit(&mut self) -> Result<(), OrderFormError> {
        match self.step {
            FormStep::Editing => {}
            FormStep::AwaitingConfirmation => return Ok(()),
            FormStep::Confirmed(_) => return Err(OrderFormError::AlreadyConfirmed),
        }
        self.customer.check()?;
        if self.cart().is_empty() {
            return Err(OrderFormError::EmptyCart);
        }
        self.step = FormStep::AwaitingConfirmation;
        Ok(())
    }

    /// Back to editing without ordering.
    pub fn cancel(&mut self) {
        if self.step == FormStep::AwaitingConfirmation {
            self.step = FormStep::Editing;
        }
    }

    /// Applies the order through the store and moves to the success screen.
    ///
    /// Once the store has recorded the order this succeeds. A failed product
    /// reload afterwards is logged and leaves the previous list in place.
    #[instrument(skip(self))]
    pub async fn confirm(&mut self) -> Result<Confirmation, OrderFormError> {
        if self.step != FormStep::AwaitingConfirmation {
            return Err(OrderFormError::NotAwaitingConfirmation);
        }

        let Some(order) = self.store.apply_order(self.quantities.clone()).await? else {
            self.step = FormStep::Editing;
            return Err(OrderFormError::EmptyCart);
        };
        info!(order_id = %order.id, total = order.total, "Order confirmed");

        let confirmation = Confirmation {
            customer: self.customer.clone(),
            order,
        };
        self.step = FormStep::Confirmed(confirmation.clone());
        if let Err(e) = self.refresh().await {
            warn!(error = %e, "Product reload after confirmation failed");
        }
        Ok(confirmation)
    }

    /// Clears the customer and every quantity and reloads the products.
    pub async fn new_order(&mut self) -> Result<(), SessionError> {
        self.customer = Customer::default();
        self.quantities = OrderQuantities::new();
        self.step = FormStep::Editing;
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed, CategorySelector};
    use crate::clients::SessionClient;
    use crate::model::{OrderId, Session, SessionId};
    use crate::session_actor::{SessionActionResult, SessionQueryResult};
    use actor_framework::mock::MockClient;
    use chrono::Utc;

    async fn form(mock: &mut MockClient<Session>) -> OrderForm {
        mock.expect_query(SessionId(1))
            .return_ok(SessionQueryResult::Products(seed::products()));
        let store = StoreHandle::new(SessionClient::new(mock.client()), SessionId(1));
        OrderForm::open(store).await.unwrap()
    }

    fn fill_customer(form: &mut OrderForm) {
        form.customer = Customer {
            first_name: "Camille".into(),
            last_name: "Durand".into(),
            email: "camille@example.com".into(),
        };
    }

    #[tokio::test]
    async fn test_quantities_are_normalised_and_clamped() {
        let mut mock = MockClient::<Session>::new();
        let mut form = form(&mut mock).await;

        // Jean has 5 in stock
        assert_eq!(form.set_quantity(ProductId(2), "3"), Some(3));
        assert_eq!(form.set_quantity(ProductId(2), "12"), Some(5));
        assert_eq!(form.set_quantity(ProductId(2), "-4"), Some(0));
        assert_eq!(form.set_quantity(ProductId(2), "deux"), Some(0));
        assert_eq!(form.set_quantity(ProductId(99), "1"), None);

        form.set_quantity(ProductId(1), "2");
        form.set_quantity(ProductId(2), "1");
        assert_eq!(form.total_items(), 3);
        assert_eq!(form.total_price(), 90.0);

        form.remove(ProductId(1));
        let cart = form.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product_id, ProductId(2));
        mock.verify();
    }

    #[tokio::test]
    async fn test_submit_requires_customer_and_cart() {
        let mut mock = MockClient::<Session>::new();
        let mut form = form(&mut mock).await;

        form.set_quantity(ProductId(3), "1");
        assert_eq!(
            form.submit(),
            Err(OrderFormError::MissingField("first name"))
        );

        fill_customer(&mut form);
        form.customer.email = "  ".into();
        assert_eq!(form.submit(), Err(OrderFormError::MissingField("email")));

        fill_customer(&mut form);
        form.remove(ProductId(3));
        assert_eq!(form.submit(), Err(OrderFormError::EmptyCart));
        assert_eq!(form.step(), &FormStep::Editing);
        mock.verify();
    }

    #[tokio::test]
    async fn test_confirm_only_after_submit() {
        let mut mock = MockClient::<Session>::new();
        let mut form = form(&mut mock).await;

        assert!(matches!(
            form.confirm().await,
            Err(OrderFormError::NotAwaitingConfirmation)
        ));

        fill_customer(&mut form);
        form.set_quantity(ProductId(3), "2");
        form.submit().unwrap();
        assert_eq!(form.set_quantity(ProductId(3), "4"), None);

        form.cancel();
        assert_eq!(form.step(), &FormStep::Editing);
        mock.verify();
    }

    #[tokio::test]
    async fn test_confirm_records_snapshot() {
        let mut mock = MockClient::<Session>::new();
        let mut form = form(&mut mock).await;

        let order = Order::new(
            OrderId(1),
            Utc::now(),
            vec![OrderLine::new(ProductId(2), "Jean", 50.0, 3)],
        );
        let mut after = seed::products();
        after[1].quantity = 2;
        mock.expect_action(SessionId(1))
            .return_ok(SessionActionResult::ApplyOrder(Some(order.clone())));
        mock.expect_query(SessionId(1))
            .return_ok(SessionQueryResult::Products(after));

        fill_customer(&mut form);
        form.set_quantity(ProductId(2), "3");
        form.submit().unwrap();
        let confirmation = form.confirm().await.unwrap();

        assert_eq!(confirmation.order, order);
        assert_eq!(confirmation.total_items(), 3);
        assert_eq!(confirmation.total_price(), 150.0);
        assert_eq!(confirmation.customer.first_name, "Camille");
        assert_eq!(form.products()[1].quantity, 2);
        assert_eq!(form.submit(), Err(OrderFormError::AlreadyConfirmed));
        mock.verify();
    }

    #[tokio::test]
    async fn test_confirm_survives_failed_reload() {
        let mut mock = MockClient::<Session>::new();
        let mut form = form(&mut mock).await;

        let order = Order::new(
            OrderId(1),
            Utc::now(),
            vec![OrderLine::new(ProductId(2), "Jean", 50.0, 1)],
        );
        mock.expect_action(SessionId(1))
            .return_ok(SessionActionResult::ApplyOrder(Some(order.clone())));
        mock.expect_query(SessionId(1))
            .return_err(actor_framework::FrameworkError::ActorClosed);

        fill_customer(&mut form);
        form.set_quantity(ProductId(2), "1");
        form.submit().unwrap();
        let confirmation = form.confirm().await.unwrap();

        assert_eq!(confirmation.order, order);
        assert!(matches!(form.step(), FormStep::Confirmed(c) if c.order == order));
        // stale list kept
        assert_eq!(form.products()[1].quantity, 5);
        assert_eq!(form.submit(), Err(OrderFormError::AlreadyConfirmed));
        mock.verify();
    }

    #[tokio::test]
    async fn test_filter_hides_rows_but_keeps_quantities() {
        let mut mock = MockClient::<Session>::new();
        let mut form = form(&mut mock).await;

        form.set_quantity(ProductId(2), "2");
        form.filter.category = CategorySelector::parse("Sports");
        form.filter.query = "bal".into();
        let ids: Vec<u32> = form.visible_products().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![27]);

        // Jean is filtered out but stays in the cart
        let cart = form.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product_id, ProductId(2));
        assert_eq!(form.total_items(), 2);

        form.filter.reset();
        assert_eq!(form.visible_products().len(), form.products().len());
        mock.verify();
    }

    #[tokio::test]
    async fn test_new_order_clears_everything() {
        let mut mock = MockClient::<Session>::new();
        let mut form = form(&mut mock).await;
        mock.expect_query(SessionId(1))
            .return_ok(SessionQueryResult::Products(seed::products()));

        fill_customer(&mut form);
        form.set_quantity(ProductId(5), "2");
        form.new_order().await.unwrap();

        assert_eq!(form.customer, Customer::default());
        assert_eq!(form.quantity(ProductId(5)), 0);
        assert!(form.cart().is_empty());
        assert_eq!(form.step(), &FormStep::Editing);
        mock.verify();
    }

    #[tokio::test]
    async fn test_store_errors_surface() {
        let mut mock = MockClient::<Session>::new();
        let mut form = form(&mut mock).await;
        mock.expect_action(SessionId(1))
            .return_err(actor_framework::FrameworkError::NotFound("session_1".into()));

        fill_customer(&mut form);
        form.set_quantity(ProductId(2), "1");
        form.submit().unwrap();
        assert_eq!(
            form.confirm().await.unwrap_err(),
            OrderFormError::Store(SessionError::NotFound("session_1".into()))
        );
        mock.verify();
    }
}
