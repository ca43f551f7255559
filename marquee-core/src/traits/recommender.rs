use crate::errors::MarqueeResult;
use crate::models::Recommendation;

/// Title-based top-N recommendation.
pub trait Recommender: Send + Sync {
    /// Recommend up to `top_n` items similar to the item titled `title`.
    fn recommend(&self, title: &str, top_n: usize) -> MarqueeResult<Vec<Recommendation>>;
}
