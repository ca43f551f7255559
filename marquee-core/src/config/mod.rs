//! Configuration system for Marquee.
//! TOML-based, layered: CLI > env > config file > compiled defaults.

pub mod asset_config;
pub mod defaults;
pub mod marquee_config;
pub mod observability_config;
pub mod recommend_config;
pub mod storage_config;

pub use asset_config::AssetConfig;
pub use marquee_config::MarqueeConfig;
pub use observability_config::ObservabilityConfig;
pub use recommend_config::RecommendConfig;
pub use storage_config::StorageConfig;
