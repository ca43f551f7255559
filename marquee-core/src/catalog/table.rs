use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use tracing::warn;

use super::item::Item;
use crate::errors::{MarqueeError, MarqueeResult};

/// Ordered, read-only item table with a title index built once at load time.
///
/// Title uniqueness is not enforced: when two items share a title the first
/// one wins lookups, and the later ones remain reachable by position only.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    by_title: HashMap<String, usize>,
    duplicates: Vec<usize>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        let mut by_title = HashMap::with_capacity(items.len());
        let mut duplicates = Vec::new();

        for (position, item) in items.iter().enumerate() {
            match by_title.entry(item.title.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(existing) => {
                    warn!(
                        title = %item.title,
                        kept = *existing.get(),
                        shadowed = position,
                        "duplicate title in catalog, first occurrence wins"
                    );
                    duplicates.push(position);
                }
            }
        }

        Self {
            items,
            by_title,
            duplicates,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Position of the first item with exactly this title.
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.by_title.get(title).copied()
    }

    /// Like [`Catalog::position_of`], but a missing title is an error.
    pub fn resolve(&self, title: &str) -> MarqueeResult<usize> {
        self.position_of(title)
            .ok_or_else(|| MarqueeError::ItemNotFound {
                title: title.to_string(),
            })
    }

    /// Titles in catalog order, the list a caller offers for selection.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.title.as_str())
    }

    pub fn tags(&self, position: usize) -> Option<&BTreeSet<String>> {
        self.items.get(position).map(|item| &item.tags)
    }

    /// Positions whose title was already taken by an earlier item.
    pub fn duplicate_titles(&self) -> &[usize] {
        &self.duplicates
    }
}
