use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the catalog and similarity matrix are loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON catalog file.
    pub catalog_path: String,
    /// Similarity matrix file; `.bin` selects the binary format, anything else JSON.
    pub matrix_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            catalog_path: defaults::DEFAULT_CATALOG_PATH.to_string(),
            matrix_path: defaults::DEFAULT_MATRIX_PATH.to_string(),
        }
    }
}
