//! # System Lifecycle
//!
//! [`StorefrontSystem`] starts the session actor, opens the session every
//! view works on, and tears both down again.
//!
//! ## Context Injection
//!
//! The actor is built first and receives its [`SessionContext`](crate::session_actor::SessionContext)
//! in `run()`. Production passes the wall clock; tests pass a
//! [`FixedClock`](crate::session_actor::FixedClock) to pin order ids.
//!
//! ## Shutdown
//!
//! 1. The session is deleted, so any [`StoreHandle`](crate::clients::StoreHandle)
//!    still in use fails with `NotFound` instead of reading a dead session.
//! 2. The system's client is dropped. The actor stops once the last client
//!    clone (including those inside store handles) is gone.
//! 3. The actor task is awaited.
//!
//! Drop every view before calling `shutdown`, or it waits for them.

pub mod storefront_system;

pub use actor_framework::tracing::setup_tracing;
pub use storefront_system::*;
