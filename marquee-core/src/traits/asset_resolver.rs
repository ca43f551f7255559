use crate::catalog::ItemId;
use crate::errors::MarqueeResult;

/// Maps an item id to a display asset URL.
///
/// `Ok(None)` means the lookup succeeded but the item has no asset.
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, item_id: ItemId) -> MarqueeResult<Option<String>>;

    /// Human-readable resolver name.
    fn name(&self) -> &str;
}
