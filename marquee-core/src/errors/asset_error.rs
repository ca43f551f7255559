use crate::catalog::ItemId;

/// Asset resolution errors. Never fatal to a recommendation.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset request for item {item_id} failed: {reason}")]
    RequestFailed { item_id: ItemId, reason: String },

    #[error("malformed asset response for item {item_id}: {reason}")]
    MalformedResponse { item_id: ItemId, reason: String },

    #[error("asset resolver not configured: {reason}")]
    NotConfigured { reason: String },
}
