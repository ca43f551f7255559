//! JSON catalog loading.
//!
//! The catalog file is an array of `{ "id", "title", "genres" }` records in
//! matrix order. `tags` is accepted in place of `genres`.

use std::path::Path;

use marquee_core::errors::{MarqueeResult, StorageError};
use marquee_core::{Catalog, Item};
use tracing::debug;

pub fn load_catalog_json(path: &Path) -> MarqueeResult<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| StorageError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let catalog = parse_catalog(&content, &path.display().to_string())?;
    debug!(path = %path.display(), items = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog_json(json: &str) -> MarqueeResult<Catalog> {
    parse_catalog(json, "<string>")
}

fn parse_catalog(json: &str, origin: &str) -> MarqueeResult<Catalog> {
    let items: Vec<Item> = serde_json::from_str(json).map_err(|e| StorageError::Parse {
        path: origin.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Catalog::new(items))
}
