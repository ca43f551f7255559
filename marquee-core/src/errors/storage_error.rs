/// Catalog/matrix loading errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("corrupt matrix file {path}: {details}")]
    Corrupt { path: String, details: String },
}
