//! # marquee-assets
//!
//! [`AssetResolver`](marquee_core::traits::AssetResolver) implementations.
//!
//! - [`TmdbPosterResolver`]: poster URL lookup against the TMDB movie API
//!   (requires the `tmdb` feature for network access).
//! - [`CachedResolver`]: moka cache in front of any resolver.
//! - [`StaticResolver`] / [`NullResolver`]: offline resolvers.

pub mod cache;
pub mod static_resolver;
pub mod tmdb;

use std::sync::Arc;

use marquee_core::config::AssetConfig;
use marquee_core::traits::AssetResolver;

pub use cache::CachedResolver;
pub use static_resolver::{NullResolver, StaticResolver};
pub use tmdb::TmdbPosterResolver;

/// Build the resolver described by `config`: TMDB behind a cache when an API
/// key is present, otherwise a resolver that reports no assets.
pub fn resolver_from_config(config: &AssetConfig) -> Arc<dyn AssetResolver> {
    if config.api_key.is_none() {
        tracing::info!("no TMDB API key configured, posters disabled");
        return Arc::new(NullResolver);
    }
    let tmdb = TmdbPosterResolver::new(config.clone());
    if config.cache_capacity == 0 {
        Arc::new(tmdb)
    } else {
        Arc::new(CachedResolver::new(
            tmdb,
            config.cache_capacity,
            config.cache_ttl(),
        ))
    }
}
