//! # Storefront
//!
//! In-memory storefront session: a product catalog, a stock-aware order form
//! and a dashboard of derived statistics.
//!
//! - [`model`]: products, orders and the session that holds them
//! - [`catalog`]: the seed catalog and the category/text/price filter
//! - [`stats`]: revenue, best sellers, average stock, and their cache
//! - [`session_actor`]: the session as an [`ActorEntity`](actor_framework::ActorEntity)
//! - [`clients`]: [`SessionClient`](clients::SessionClient) and the per-session [`StoreHandle`](clients::StoreHandle)
//! - [`views`]: headless catalog, order form and dashboard
//! - [`lifecycle`]: [`StorefrontSystem`](lifecycle::StorefrontSystem), start / reload / shutdown
//! - [`config`]: `storefront.toml` and `STOREFRONT_*` settings

pub mod catalog;
pub mod clients;
pub mod config;
pub mod format;
pub mod lifecycle;
pub mod model;
pub mod session_actor;
pub mod stats;
pub mod views;
