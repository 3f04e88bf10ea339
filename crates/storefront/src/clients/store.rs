//! # Store Handle
//!
//! The session store as the views see it: one [`SessionClient`] bound to one
//! [`SessionId`]. Views can only be built from a handle, and a handle whose
//! session has been reloaded away fails with [`SessionError::NotFound`]
//! rather than reading stale state.

use crate::clients::SessionClient;
use crate::model::{Order, OrderQuantities, Product, Session, SessionId};
use crate::session_actor::SessionError;
use crate::stats::{DashboardStats, TopSeller, DEFAULT_TOP_SELLERS};
use actor_framework::ActorClient;

#[derive(Clone)]
pub struct StoreHandle {
    client: SessionClient,
    session: SessionId,
    top_limit: usize,
}

impl StoreHandle {
    pub fn new(client: SessionClient, session: SessionId) -> Self {
        Self {
            client,
            session,
            top_limit: DEFAULT_TOP_SELLERS,
        }
    }

    /// Sets how many best sellers `top_products` and `stats` return.
    pub fn with_top_limit(mut self, top_limit: usize) -> Self {
        self.top_limit = top_limit;
        self
    }

    pub fn session_id(&self) -> SessionId {
        self.session
    }

    /// The only mutation: decrement stock and record one order.
    pub async fn apply_order(
        &self,
        quantities: OrderQuantities,
    ) -> Result<Option<Order>, SessionError> {
        self.client.apply_order(self.session, quantities).await
    }

    pub async fn products(&self) -> Result<Vec<Product>, SessionError> {
        self.client.products(self.session).await
    }

    pub async fn orders(&self) -> Result<Vec<Order>, SessionError> {
        self.client.orders(self.session).await
    }

    pub async fn orders_count(&self) -> Result<usize, SessionError> {
        self.client.orders_count(self.session).await
    }

    pub async fn total_revenue(&self) -> Result<f64, SessionError> {
        self.client.total_revenue(self.session).await
    }

    pub async fn top_products(&self) -> Result<Vec<TopSeller>, SessionError> {
        self.client.top_products(self.session, self.top_limit).await
    }

    pub async fn version(&self) -> Result<u64, SessionError> {
        self.client.version(self.session).await
    }

    pub async fn stats(&self) -> Result<(u64, DashboardStats), SessionError> {
        self.client.stats(self.session, self.top_limit).await
    }

    /// A full copy of the session as it is right now.
    pub async fn snapshot(&self) -> Result<Session, SessionError> {
        self.client
            .get(self.session)
            .await?
            .ok_or_else(|| SessionError::NotFound(self.session.to_string()))
    }
}
