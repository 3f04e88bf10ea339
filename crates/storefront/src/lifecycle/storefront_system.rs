use crate::clients::{SessionClient, StoreHandle};
use crate::config::StorefrontConfig;
use crate::model::{Product, SessionCreate, SessionId};
use crate::session_actor::{self, SessionContext, SessionError};
use actor_framework::ActorClient;
use anyhow::Context;
use tracing::{error, info};

/// The running storefront: one session actor and the current session.
///
/// ```ignore
/// let system = StorefrontSystem::start(StorefrontConfig::load()?).await?;
/// let mut form = OrderForm::open(system.store()).await?;
/// // ...
/// drop(form);
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    client: SessionClient,
    session: SessionId,
    seed: Vec<Product>,
    top_sellers: usize,
    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    /// Starts the actor on the wall clock and opens a session over the
    /// configured seed catalog.
    pub async fn start(config: StorefrontConfig) -> anyhow::Result<Self> {
        Self::start_with(config, SessionContext::system()).await
    }

    pub async fn start_with(
        config: StorefrontConfig,
        context: SessionContext,
    ) -> anyhow::Result<Self> {
        let seed = config.seed_products()?;

        let (actor, inner) = session_actor::new(config.channel_buffer);
        let handle = tokio::spawn(actor.run(context));
        let client = SessionClient::new(inner);

        let session = client
            .create_session(SessionCreate {
                products: seed.clone(),
            })
            .await
            .context("opening the first session")?;
        info!(%session, products = seed.len(), "Storefront started");

        Ok(Self {
            client,
            session,
            seed,
            top_sellers: config.top_sellers,
            handle,
        })
    }

    /// A handle on the current session, for building views.
    pub fn store(&self) -> StoreHandle {
        StoreHandle::new(self.client.clone(), self.session).with_top_limit(self.top_sellers)
    }

    pub fn session_id(&self) -> SessionId {
        self.session
    }

    /// Discards the current session and starts a fresh one from the seed.
    ///
    /// Handles taken before the reload keep pointing at the old session and
    /// fail with [`SessionError::NotFound`].
    pub async fn reload(&mut self) -> Result<StoreHandle, SessionError> {
        self.client.delete(self.session).await?;
        self.session = self
            .client
            .create_session(SessionCreate {
                products: self.seed.clone(),
            })
            .await?;
        info!(session = %self.session, "Session reloaded");
        Ok(self.store())
    }

    /// Closes the session and waits for the actor to stop.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        info!("Shutting down storefront...");

        if let Err(e) = self.client.delete(self.session).await {
            error!(error = %e, "Closing session failed");
        }
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e).context("session actor task failed");
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
