//! # marquee-recommend
//!
//! Item-to-item recommendation over a precomputed similarity matrix, plus
//! overlap-based quality metrics for the resulting rankings.
//!
//! ## Architecture
//!
//! ```text
//! RecommendationEngine (Recommender)
//! ├── Title resolution (catalog title index, first match wins)
//! ├── Ranking
//! │   └── top_n (self-exclusion, score desc, position asc tie-break)
//! └── Asset fan-out (rayon pool, ordered reassembly, sentinel on failure)
//!
//! QualityEvaluator
//! ├── genre_overlap_score (mean tag overlap fraction)
//! └── precision_at_k (share of first k with any shared tag)
//! ```

pub mod engine;
pub mod evaluation;
pub mod ranking;
pub mod resolution;

pub use engine::RecommendationEngine;
pub use evaluation::{genre_overlap_score, precision_at_k, QualityEvaluator};
pub use ranking::rank;
