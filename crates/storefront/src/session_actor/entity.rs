//! [`ActorEntity`] implementation for [`Session`].

use super::actions::{SessionAction, SessionActionResult, SessionQuery, SessionQueryResult};
use super::context::SessionContext;
use super::error::SessionError;
use crate::model::{Session, SessionCreate, SessionId};
use crate::stats::{self, DashboardStats};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for Session {
    type Id = SessionId;
    type Create = SessionCreate;
    type Action = SessionAction;
    type ActionResult = SessionActionResult;
    type Query = SessionQuery;
    type QueryResult = SessionQueryResult;
    type Context = SessionContext;
    type Error = SessionError;

    fn from_create_params(id: SessionId, params: SessionCreate) -> Result<Self, SessionError> {
        Session::from_seed(id, params.products)
    }

    async fn on_create(&mut self, _ctx: &SessionContext) -> Result<(), SessionError> {
        info!(session_id = %self.id, products = self.products.len(), "Session opened");
        Ok(())
    }

    async fn on_delete(&self, _ctx: &SessionContext) -> Result<(), SessionError> {
        info!(session_id = %self.id, orders = self.orders.len(), "Session closed");
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SessionAction,
        ctx: &SessionContext,
    ) -> Result<SessionActionResult, SessionError> {
        match action {
            SessionAction::ApplyOrder(quantities) => {
                let order = self.apply_order(&quantities, ctx.clock.now());
                Ok(SessionActionResult::ApplyOrder(order))
            }
        }
    }

    fn handle_query(&self, query: SessionQuery) -> Result<SessionQueryResult, SessionError> {
        Ok(match query {
            SessionQuery::Products => SessionQueryResult::Products(self.products.clone()),
            SessionQuery::Orders => SessionQueryResult::Orders(self.orders.clone()),
            SessionQuery::OrdersCount => {
                SessionQueryResult::OrdersCount(stats::orders_count(&self.orders))
            }
            SessionQuery::TotalRevenue => {
                SessionQueryResult::TotalRevenue(stats::total_revenue(&self.orders))
            }
            SessionQuery::TopProducts { limit } => {
                SessionQueryResult::TopProducts(stats::top_sellers(&self.orders, limit))
            }
            SessionQuery::Version => SessionQueryResult::Version(self.version),
            SessionQuery::Stats { top_limit } => SessionQueryResult::Stats {
                version: self.version,
                stats: DashboardStats::compute(&self.products, &self.orders, top_limit),
            },
        })
    }
}
