//! Runtime settings.
//!
//! Defaults, then `storefront.toml` in the working directory if it exists,
//! then `STOREFRONT_*` environment variables.

use crate::catalog::seed;
use crate::model::Product;
use crate::stats::DEFAULT_TOP_SELLERS;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "storefront.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Capacity of the session actor's request channel.
    pub channel_buffer: usize,
    /// How many best sellers the dashboard shows.
    pub top_sellers: usize,
    /// TOML file with a `[[products]]` table replacing the built-in catalog.
    pub seed: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            top_sellers: DEFAULT_TOP_SELLERS,
            seed: None,
        }
    }
}

impl StorefrontConfig {
    /// Loads from `storefront.toml` and the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
    }

    /// Loads from `path` (skipped when missing) and whatever `env` returns.
    pub fn load_from(
        path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let mut config = match fs::read_to_string(path) {
            Ok(raw) => toml::from_str::<Self>(&raw)
                .with_context(|| format!("parsing {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };

        if let Some(v) = env("STOREFRONT_CHANNEL_BUFFER") {
            config.channel_buffer = v
                .trim()
                .parse()
                .with_context(|| format!("STOREFRONT_CHANNEL_BUFFER={v}"))?;
        }
        if let Some(v) = env("STOREFRONT_TOP_SELLERS") {
            config.top_sellers = v
                .trim()
                .parse()
                .with_context(|| format!("STOREFRONT_TOP_SELLERS={v}"))?;
        }
        if let Some(v) = env("STOREFRONT_SEED") {
            config.seed = Some(PathBuf::from(v));
        }

        anyhow::ensure!(config.channel_buffer > 0, "channel_buffer must be at least 1");
        Ok(config)
    }

    /// The catalog a new session starts from.
    pub fn seed_products(&self) -> anyhow::Result<Vec<Product>> {
        match &self.seed {
            Some(path) => seed::load_file(path),
            None => Ok(seed::products()),
        }
    }
}
