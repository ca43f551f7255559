use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Remote poster lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// TMDB API key. Without one, posters are not fetched.
    pub api_key: Option<String>,
    pub api_base: String,
    /// Prefix joined with the `poster_path` returned by the API.
    pub image_base: String,
    pub language: String,
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    /// Resolved lookups kept in memory. 0 disables the cache.
    pub cache_capacity: u64,
    pub cache_ttl_secs: u64,
}

impl AssetConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    pub fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: defaults::DEFAULT_TMDB_API_BASE.to_string(),
            image_base: defaults::DEFAULT_TMDB_IMAGE_BASE.to_string(),
            language: defaults::DEFAULT_TMDB_LANGUAGE.to_string(),
            timeout_ms: defaults::DEFAULT_ASSET_TIMEOUT_MS,
            max_retries: defaults::DEFAULT_ASSET_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_ASSET_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_ASSET_MAX_BACKOFF_MS,
            cache_capacity: defaults::DEFAULT_ASSET_CACHE_CAPACITY,
            cache_ttl_secs: defaults::DEFAULT_ASSET_CACHE_TTL_SECS,
        }
    }
}
