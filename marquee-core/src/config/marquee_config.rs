//! Top-level Marquee configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AssetConfig, ObservabilityConfig, RecommendConfig, StorageConfig};
use crate::constants::MAX_ASSET_PARALLELISM;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied by the binary)
/// 2. Environment variables (`MARQUEE_*`, `TMDB_API_KEY`)
/// 3. Config file (`marquee.toml` or an explicit path)
/// 4. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    pub storage: StorageConfig,
    pub recommend: RecommendConfig,
    pub assets: AssetConfig,
    pub observability: ObservabilityConfig,
}

impl MarqueeConfig {
    /// Load from an optional file, then apply process environment overrides.
    ///
    /// A missing explicit `path` is an error; when `path` is `None`, a
    /// `marquee.toml` in the working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new("marquee.toml");
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        debug!(path = %path.display(), "loading config file");
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from an environment lookup.
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("MARQUEE_CATALOG_PATH") {
            self.storage.catalog_path = v;
        }
        if let Some(v) = lookup("MARQUEE_MATRIX_PATH") {
            self.storage.matrix_path = v;
        }
        if let Some(v) = lookup("MARQUEE_TOP_N").and_then(|v| v.parse().ok()) {
            self.recommend.default_top_n = v;
        }
        if let Some(v) = lookup("MARQUEE_EVAL_K").and_then(|v| v.parse().ok()) {
            self.recommend.default_k = v;
        }
        if let Some(v) = lookup("MARQUEE_ASSET_PARALLELISM").and_then(|v| v.parse().ok()) {
            self.recommend.asset_parallelism = v;
        }
        if let Some(v) = lookup("TMDB_API_KEY").filter(|v| !v.is_empty()) {
            self.assets.api_key = Some(v);
        }
        if let Some(v) = lookup("MARQUEE_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recommend.default_top_n == 0 {
            return Err(invalid("recommend.default_top_n", "must be greater than 0"));
        }
        if self.recommend.default_k == 0 {
            return Err(invalid("recommend.default_k", "must be greater than 0"));
        }
        if !(1..=MAX_ASSET_PARALLELISM).contains(&self.recommend.asset_parallelism) {
            return Err(invalid(
                "recommend.asset_parallelism",
                &format!("must be between 1 and {MAX_ASSET_PARALLELISM}"),
            ));
        }
        if self.assets.timeout_ms == 0 {
            return Err(invalid("assets.timeout_ms", "must be greater than 0"));
        }
        if self.assets.initial_backoff_ms > self.assets.max_backoff_ms {
            return Err(invalid(
                "assets.initial_backoff_ms",
                "must not exceed assets.max_backoff_ms",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
