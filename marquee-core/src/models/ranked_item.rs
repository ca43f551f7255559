use serde::{Deserialize, Serialize};

/// One entry of a ranking: catalog position and its score against the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    pub position: usize,
    pub score: f64,
}
