//! # ActorClient Trait
//!
//! Domain clients wrap a [`ResourceClient`] and translate [`FrameworkError`]
//! into their own error type. Implementing this trait gives them `get` and
//! `delete` for free.

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the lifecycle operations.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Session> for SessionClient {
///     type Error = SessionError;
///
///     fn inner(&self) -> &ResourceClient<Session> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         SessionError::from_framework(e)
///     }
/// }
///
/// // get() and delete() now exist on SessionClient
/// let session = client.get(id).await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
