/// Quality evaluator input errors.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("recommendation list is empty")]
    EmptyRecommendations,

    #[error("query item at position {position} has no tags")]
    EmptyQueryTags { position: usize },

    #[error("k must be positive")]
    InvalidK,

    #[error("item position {position} out of range for catalog of {len} items")]
    IndexOutOfRange { position: usize, len: usize },
}
