use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable external identifier of an item (a TMDB movie id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Display title, also the lookup key used by callers.
    pub title: String,
    /// Categorical tags (genres). Stored as a set, so duplicates collapse.
    #[serde(alias = "genres")]
    pub tags: BTreeSet<String>,
}

impl Item {
    pub fn new<I, S>(id: impl Into<ItemId>, title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of tags shared with `other`.
    pub fn shared_tags(&self, other: &Item) -> usize {
        self.tags.intersection(&other.tags).count()
    }
}
