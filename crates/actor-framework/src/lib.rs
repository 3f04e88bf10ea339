//! # Actor Framework
//!
//! Building blocks for keeping stateful resources behind Tokio actors.
//!
//! Each resource type gets one [`ResourceActor`] that owns every instance of it
//! and handles requests sequentially on its own task. Callers hold a cheap,
//! cloneable [`ResourceClient`]. Because requests are processed one at a time,
//! a multi-step mutation inside a single action is observed by everyone else as
//! one transition, with no locks around the state.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the business logic. Creation, mutating
//!    `Action`s, read-only `Query`s, lifecycle hooks.
//! 2. **Runtime** ([`ResourceActor`]): the message loop and the store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed requests;
//!    domain crates wrap the client and map [`FrameworkError`] into their own
//!    error enum.
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceActor::run`], not to `new`. An actor can
//! therefore be constructed before the things it depends on exist, and tests can
//! inject fakes (a fixed clock, a mocked client) without touching the entity.
//!
//! ## Testing
//!
//! The [`mock`] module stands in for a running actor: either queue canned
//! answers with [`mock::MockClient`] or inspect raw requests with
//! [`mock::create_mock_client`].

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
