//! In-memory lookup cache using moka.
//!
//! Successful lookups are cached, including "no asset" answers. Errors are
//! not cached so a transient failure is retried on the next request.

use std::time::Duration;

use moka::sync::Cache;

use marquee_core::traits::AssetResolver;
use marquee_core::{ItemId, MarqueeResult};

pub struct CachedResolver<R> {
    inner: R,
    cache: Cache<ItemId, Option<String>>,
}

impl<R: AssetResolver> CachedResolver<R> {
    pub fn new(inner: R, max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { inner, cache }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl<R: AssetResolver> AssetResolver for CachedResolver<R> {
    fn resolve(&self, item_id: ItemId) -> MarqueeResult<Option<String>> {
        if let Some(hit) = self.cache.get(&item_id) {
            return Ok(hit);
        }
        let resolved = self.inner.resolve(item_id)?;
        self.cache.insert(item_id, resolved.clone());
        Ok(resolved)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use marquee_core::errors::AssetError;

    use super::*;

    struct Counting {
        calls: AtomicUsize,
        fail: bool,
    }

    impl AssetResolver for Counting {
        fn resolve(&self, item_id: ItemId) -> MarqueeResult<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AssetError::RequestFailed {
                    item_id,
                    reason: "down".into(),
                }
                .into());
            }
            Ok(Some(format!("poster-{item_id}")))
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    fn counting(fail: bool) -> Counting {
        Counting {
            calls: AtomicUsize::new(0),
            fail,
        }
    }

    #[test]
    fn second_lookup_is_served_from_cache() {
        let cached = CachedResolver::new(counting(false), 100, Duration::from_secs(60));
        assert_eq!(cached.resolve(ItemId(7)).unwrap().as_deref(), Some("poster-7"));
        assert_eq!(cached.resolve(ItemId(7)).unwrap().as_deref(), Some("poster-7"));
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn errors_are_not_cached() {
        let cached = CachedResolver::new(counting(true), 100, Duration::from_secs(60));
        assert!(cached.resolve(ItemId(7)).is_err());
        assert!(cached.resolve(ItemId(7)).is_err());
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn clear_forces_refetch() {
        let cached = CachedResolver::new(counting(false), 100, Duration::from_secs(60));
        cached.resolve(ItemId(1)).unwrap();
        cached.clear();
        cached.resolve(ItemId(1)).unwrap();
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);
    }
}
