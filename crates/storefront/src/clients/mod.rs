//! Typed handles over the session actor.
//!
//! [`SessionClient`] speaks the actor protocol for any session id;
//! [`StoreHandle`] pins one session and is what the views hold.

pub mod session_client;
pub mod store;

pub use session_client::SessionClient;
pub use store::StoreHandle;
