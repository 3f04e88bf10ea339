//! # Session Actor
//!
//! Owns every live [`Session`] and serialises access to it.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Session`]
//! - [`actions`] - [`SessionAction`] (apply an order) and the read-only [`SessionQuery`] views
//! - [`context`] - [`SessionContext`], carrying the [`Clock`] used to stamp orders
//! - [`error`] - [`SessionError`]
//!
//! ## Atomicity
//!
//! An order is one [`SessionAction::ApplyOrder`] message. The actor finishes
//! it (every stock decrement plus the appended order) before reading the next
//! request, so no caller ever sees a half-applied order.
//!
//! ```rust,ignore
//! let (actor, client) = session_actor::new(32);
//! tokio::spawn(actor.run(SessionContext::system()));
//!
//! let id = client.create(SessionCreate { products: seed::products() }).await?;
//! let quantities = OrderQuantities::from([(2, 3)]);
//! client.perform_action(id, SessionAction::ApplyOrder(quantities)).await?;
//! ```

pub mod actions;
pub mod context;
pub mod entity;
pub mod error;

pub use actions::*;
pub use context::*;
pub use error::*;

use crate::model::Session;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Session actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Session>, ResourceClient<Session>) {
    ResourceActor::new(buffer_size)
}
