use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::ItemId;
use crate::constants::NO_ASSET_SENTINEL;

/// Display asset for a recommended item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum AssetRef {
    Url(String),
    /// Resolution failed or the item has no asset.
    Missing,
}

impl AssetRef {
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Missing => f.write_str(NO_ASSET_SENTINEL),
        }
    }
}

/// A recommended item as returned to callers, in rank order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based rank.
    pub rank: usize,
    pub position: usize,
    pub title: String,
    pub item_id: ItemId,
    pub score: f64,
    pub asset: AssetRef,
}

/// Split recommendations into parallel title and asset sequences aligned by rank.
pub fn split_titles_and_assets(recommendations: &[Recommendation]) -> (Vec<String>, Vec<AssetRef>) {
    recommendations
        .iter()
        .map(|r| (r.title.clone(), r.asset.clone()))
        .unzip()
}
