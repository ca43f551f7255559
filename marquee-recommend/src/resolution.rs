//! Asset fan-out: resolve display assets for ranked items concurrently,
//! reassembled in rank order.

use rayon::prelude::*;
use rayon::ThreadPool;

use marquee_core::traits::AssetResolver;
use marquee_core::{AssetRef, ItemId, MarqueeError, MarqueeResult};
use marquee_observability::events;

/// Bounded worker pool for asset lookups.
pub struct AssetFanout {
    pool: ThreadPool,
}

impl AssetFanout {
    pub fn new(parallelism: usize) -> MarqueeResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(parallelism)
            .thread_name(|i| format!("marquee-assets-{i}"))
            .build()
            .map_err(|e| MarqueeError::InvalidArgument {
                reason: format!("failed to build asset pool: {e}"),
            })?;
        Ok(Self { pool })
    }

    pub fn parallelism(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Resolve one asset per id. Output index `i` always belongs to `ids[i]`.
    pub fn resolve_all(&self, resolver: &dyn AssetResolver, ids: &[ItemId]) -> Vec<AssetRef> {
        self.pool.install(|| {
            ids.par_iter()
                .map(|&item_id| resolve_one(resolver, item_id))
                .collect()
        })
    }
}

/// Resolve a single asset, degrading every failure to [`AssetRef::Missing`].
pub fn resolve_one(resolver: &dyn AssetResolver, item_id: ItemId) -> AssetRef {
    match resolver.resolve(item_id) {
        Ok(Some(url)) => AssetRef::Url(url),
        Ok(None) => {
            tracing::debug!(item_id = %item_id, resolver = resolver.name(), "no asset for item");
            AssetRef::Missing
        }
        Err(e) => {
            events::asset_resolution_failed(item_id, resolver.name(), &e.to_string());
            AssetRef::Missing
        }
    }
}
