//! # Framework Errors
//!
//! Failures of the plumbing between a client and its actor, plus a boxed
//! carrier for whatever error the entity itself reported.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's receiver is gone; the system was shut down.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor accepted the request but never answered.
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// True when the request never reached a live actor.
    pub fn is_disconnected(&self) -> bool {
        matches!(self, Self::ActorClosed | Self::ActorDropped)
    }
}
