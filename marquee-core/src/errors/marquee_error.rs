use super::{AssetError, CatalogError, ConfigError, EvaluationError, StorageError};

/// Top-level error for every Marquee operation.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("item not found: {title}")]
    ItemNotFound { title: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] CatalogError),

    #[error("evaluation error: {0}")]
    EvaluationError(#[from] EvaluationError),

    #[error("asset error: {0}")]
    AssetError(#[from] AssetError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

impl MarqueeError {
    /// Stable machine-readable code for the error family.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ItemNotFound { .. } => "NOT_FOUND",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::InvariantViolation(_) => "INVARIANT_VIOLATION",
            Self::EvaluationError(EvaluationError::EmptyRecommendations) => "EMPTY_INPUT",
            Self::EvaluationError(EvaluationError::EmptyQueryTags { .. }) => "DIVISION_UNDEFINED",
            Self::EvaluationError(_) => "INVALID_ARGUMENT",
            Self::AssetError(_) => "ASSET_RESOLUTION_FAILURE",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
        }
    }
}

pub type MarqueeResult<T> = Result<T, MarqueeError>;
