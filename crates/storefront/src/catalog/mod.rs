//! The product catalog: the seed data a session starts from and the filter
//! the catalog and order pages apply to it.

pub mod filter;
pub mod seed;

pub use filter::*;
