//! Headless pages.
//!
//! Each view holds the state its page would hold and talks to the session
//! only through the [`StoreHandle`](crate::clients::StoreHandle) it was built
//! with. Nothing here renders; the binary prints what these return.

pub mod catalog;
pub mod dashboard;
pub mod order_form;

pub use catalog::{CatalogRow, CatalogView};
pub use dashboard::Dashboard;
pub use order_form::{Confirmation, Customer, FormStep, OrderForm, OrderFormError};
