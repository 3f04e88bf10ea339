//! # Session Client
//!
//! Wraps a `ResourceClient<Session>` and exposes one method per action and
//! query, each unwrapping its matching result variant.

use crate::model::{Order, OrderQuantities, Product, Session, SessionCreate, SessionId};
use crate::session_actor::{
    SessionAction, SessionActionResult, SessionError, SessionQuery, SessionQueryResult,
};
use crate::stats::{DashboardStats, TopSeller};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<Session>,
}

#[async_trait]
impl ActorClient<Session> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &ResourceClient<Session> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SessionError::from_framework(e)
    }
}

impl SessionClient {
    pub fn new(inner: ResourceClient<Session>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(products = params.products.len()))]
    pub async fn create_session(&self, params: SessionCreate) -> Result<SessionId, SessionError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(SessionError::from_framework)
    }

    /// Applies one order. `Ok(None)` means nothing was ordered and nothing
    /// changed.
    #[instrument(skip(self, quantities), fields(units = quantities.total_units()))]
    pub async fn apply_order(
        &self,
        id: SessionId,
        quantities: OrderQuantities,
    ) -> Result<Option<Order>, SessionError> {
        debug!("Applying order");
        match self
            .inner
            .perform_action(id, SessionAction::ApplyOrder(quantities))
            .await
            .map_err(SessionError::from_framework)?
        {
            SessionActionResult::ApplyOrder(order) => Ok(order),
        }
    }

    async fn query(
        &self,
        id: SessionId,
        query: SessionQuery,
    ) -> Result<SessionQueryResult, SessionError> {
        debug!(?query, "Sending query");
        self.inner
            .query(id, query)
            .await
            .map_err(SessionError::from_framework)
    }

    #[instrument(skip(self))]
    pub async fn products(&self, id: SessionId) -> Result<Vec<Product>, SessionError> {
        match self.query(id, SessionQuery::Products).await? {
            SessionQueryResult::Products(products) => Ok(products),
            _ => unreachable!("Products query must return Products result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn orders(&self, id: SessionId) -> Result<Vec<Order>, SessionError> {
        match self.query(id, SessionQuery::Orders).await? {
            SessionQueryResult::Orders(orders) => Ok(orders),
            _ => unreachable!("Orders query must return Orders result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn orders_count(&self, id: SessionId) -> Result<usize, SessionError> {
        match self.query(id, SessionQuery::OrdersCount).await? {
            SessionQueryResult::OrdersCount(n) => Ok(n),
            _ => unreachable!("OrdersCount query must return OrdersCount result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn total_revenue(&self, id: SessionId) -> Result<f64, SessionError> {
        match self.query(id, SessionQuery::TotalRevenue).await? {
            SessionQueryResult::TotalRevenue(total) => Ok(total),
            _ => unreachable!("TotalRevenue query must return TotalRevenue result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn top_products(
        &self,
        id: SessionId,
        limit: usize,
    ) -> Result<Vec<TopSeller>, SessionError> {
        match self.query(id, SessionQuery::TopProducts { limit }).await? {
            SessionQueryResult::TopProducts(top) => Ok(top),
            _ => unreachable!("TopProducts query must return TopProducts result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn version(&self, id: SessionId) -> Result<u64, SessionError> {
        match self.query(id, SessionQuery::Version).await? {
            SessionQueryResult::Version(v) => Ok(v),
            _ => unreachable!("Version query must return Version result"),
        }
    }

    /// Dashboard stats together with the version they were computed at.
    #[instrument(skip(self))]
    pub async fn stats(
        &self,
        id: SessionId,
        top_limit: usize,
    ) -> Result<(u64, DashboardStats), SessionError> {
        match self.query(id, SessionQuery::Stats { top_limit }).await? {
            SessionQueryResult::Stats { version, stats } => Ok((version, stats)),
            _ => unreachable!("Stats query must return Stats result"),
        }
    }
}
