//! Error handling for Marquee.
//! One error enum per subsystem, `thiserror` only, aggregated by [`MarqueeError`].

pub mod asset_error;
pub mod catalog_error;
pub mod config_error;
pub mod evaluation_error;
pub mod marquee_error;
pub mod storage_error;

pub use asset_error::AssetError;
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use evaluation_error::EvaluationError;
pub use marquee_error::{MarqueeError, MarqueeResult};
pub use storage_error::StorageError;
