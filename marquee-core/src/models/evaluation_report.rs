use serde::{Deserialize, Serialize};

/// Both quality metrics for one ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Catalog position of the query item.
    pub query: usize,
    /// Number of recommendations scored by the overlap metric.
    pub evaluated: usize,
    pub k: usize,
    /// Mean fraction of the query's tags present in each recommendation, in [0, 1].
    pub genre_overlap: f64,
    /// Fraction of the first `k` recommendations sharing a tag with the query, in [0, 1].
    pub precision_at_k: f64,
}
