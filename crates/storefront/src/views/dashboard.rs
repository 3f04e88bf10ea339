//! Dashboard: derived statistics, recomputed only when the session changed.

use crate::clients::StoreHandle;
use crate::session_actor::SessionError;
use crate::stats::{DashboardStats, StatsCache};
use tracing::debug;

pub struct Dashboard {
    store: StoreHandle,
    cache: StatsCache,
}

impl Dashboard {
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            cache: StatsCache::new(),
        }
    }

    /// Current stats. Costs one version check when nothing changed.
    pub async fn refresh(&mut self) -> Result<DashboardStats, SessionError> {
        let version = self.store.version().await?;
        if let Some(stats) = self.cache.get(version) {
            debug!(version, "Stats cache hit");
            return Ok(stats.clone());
        }
        let (version, stats) = self.store.stats().await?;
        Ok(self.cache.get_or_compute(version, || stats).clone())
    }
}
