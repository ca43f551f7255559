use serde::{Deserialize, Serialize};

use super::defaults;

/// Recommendation engine and evaluator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Number of recommendations when the caller does not specify one.
    pub default_top_n: usize,
    /// Cutoff for precision@K when the caller does not specify one.
    pub default_k: usize,
    /// Maximum concurrent asset lookups per recommendation.
    pub asset_parallelism: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_top_n: defaults::DEFAULT_TOP_N,
            default_k: defaults::DEFAULT_EVAL_K,
            asset_parallelism: defaults::DEFAULT_ASSET_PARALLELISM,
        }
    }
}
