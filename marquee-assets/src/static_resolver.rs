use std::collections::HashMap;

use marquee_core::traits::AssetResolver;
use marquee_core::{ItemId, MarqueeResult};

/// Resolves from a fixed id → URL map. Unknown ids have no asset.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    assets: HashMap<ItemId, String>,
}

impl StaticResolver {
    pub fn new(assets: HashMap<ItemId, String>) -> Self {
        Self { assets }
    }
}

impl FromIterator<(ItemId, String)> for StaticResolver {
    fn from_iter<T: IntoIterator<Item = (ItemId, String)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AssetResolver for StaticResolver {
    fn resolve(&self, item_id: ItemId) -> MarqueeResult<Option<String>> {
        Ok(self.assets.get(&item_id).cloned())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Never has an asset.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

impl AssetResolver for NullResolver {
    fn resolve(&self, _item_id: ItemId) -> MarqueeResult<Option<String>> {
        Ok(None)
    }

    fn name(&self) -> &str {
        "null"
    }
}
