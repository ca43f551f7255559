pub mod asset_resolver;
pub mod recommender;

pub use asset_resolver::AssetResolver;
pub use recommender::Recommender;
