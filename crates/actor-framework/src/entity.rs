//! # ActorEntity Trait
//!
//! The contract a resource must satisfy to live inside a [`ResourceActor`](crate::ResourceActor).
//!
//! A resource is created from a `Create` payload, changed only through `Action`s
//! (which get `&mut self`) and read through `Query`s (which only get `&self`).
//! Splitting the two means a read can never mutate state by accident: a store
//! with one mutating operation and many derived views maps onto one `Action`
//! variant and a handful of `Query` variants.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks and actions are `async` so they may call other actors. The `Context`
/// type is handed to `run()` rather than `new()`, so dependencies (other clients,
/// a clock) can be wired after every actor has been constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u32` for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum of state-changing operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// Enum of read-only operations.
    type Query: Send + Sync + Debug;

    /// The result type returned by queries.
    type QueryResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum for the whole entity, shared by every action and query.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored.
    /// An error here discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a state-changing action.
    ///
    /// The actor processes one message at a time, so everything this method
    /// does to `self` is observed by the next request as a single transition.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Answer a read-only query.
    fn handle_query(&self, query: Self::Query) -> Result<Self::QueryResult, Self::Error>;
}
