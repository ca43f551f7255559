//! # marquee-core
//!
//! Foundation crate for the Marquee recommender.
//! Defines the item catalog, the similarity store, shared models, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod similarity;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::{Catalog, Item, ItemId};
pub use config::MarqueeConfig;
pub use errors::{MarqueeError, MarqueeResult};
pub use models::{AssetRef, EvaluationReport, RankedItem, Recommendation};
pub use similarity::{Dataset, SimilarityMatrix};
