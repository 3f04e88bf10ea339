//! Error types for the Session actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// No session with this id; it was reloaded away or never existed.
    #[error("Session not found: {0}")]
    NotFound(String),

    /// The seed catalog cannot start a session.
    #[error("Invalid seed catalog: {0}")]
    InvalidSeed(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl SessionError {
    /// Recovers the entity's own error from the framework's boxed carrier.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => SessionError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<SessionError>() {
                Ok(session_error) => *session_error,
                Err(other) => SessionError::ActorCommunicationError(other.to_string()),
            },
            other => SessionError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<String> for SessionError {
    fn from(msg: String) -> Self {
        SessionError::ActorCommunicationError(msg)
    }
}
