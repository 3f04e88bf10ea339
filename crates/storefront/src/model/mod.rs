//! Plain data: products, orders and the session that holds them.

pub mod order;
pub mod product;
pub mod session;

pub use order::*;
pub use product::*;
pub use session::*;
