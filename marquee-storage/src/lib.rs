//! # marquee-storage
//!
//! Loads the item catalog and the precomputed similarity matrix from disk and
//! hands them to the rest of the system as a validated [`Dataset`].
//!
//! Matrix formats:
//! - JSON: an array of rows, `[[1.0, 0.2], [0.2, 1.0]]`.
//! - Binary (`.bin`): `size: u32 LE` followed by `size * size` `f32 LE` scores, row-major.

pub mod catalog_loader;
pub mod matrix_loader;

use std::path::Path;

use marquee_core::config::StorageConfig;
use marquee_core::{Dataset, MarqueeResult};
use marquee_observability::events;

pub use catalog_loader::{load_catalog_json, parse_catalog_json};
pub use matrix_loader::{
    decode_matrix_binary, encode_matrix_binary, load_matrix, load_matrix_binary,
    load_matrix_json, write_matrix_binary,
};

/// Load catalog and matrix as configured, and check they agree in size.
pub fn load_dataset(config: &StorageConfig) -> MarqueeResult<Dataset> {
    let catalog = load_catalog_json(Path::new(&config.catalog_path))?;
    let matrix = load_matrix(Path::new(&config.matrix_path))?;
    let duplicates = catalog.duplicate_titles().len();
    let items = catalog.len();

    let dataset = Dataset::new(catalog, matrix)?;
    events::dataset_loaded(items, duplicates, &config.matrix_path);
    Ok(dataset)
}
