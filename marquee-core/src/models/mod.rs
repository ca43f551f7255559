pub mod evaluation_report;
pub mod ranked_item;
pub mod recommendation;

pub use evaluation_report::EvaluationReport;
pub use ranked_item::RankedItem;
pub use recommendation::{split_titles_and_assets, AssetRef, Recommendation};
