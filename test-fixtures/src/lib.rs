//! Test fixture loader for Marquee catalogs and similarity matrices.
//!
//! Fixture files live under `test-fixtures/data/`:
//! - `catalog/movies.json` + `matrix/movies_similarity.json`: eight films with
//!   TMDB ids and genres.
//! - `catalog/scenario.json` + `matrix/scenario_similarity.json`: the
//!   three-item A/B/C scenario.

use std::path::PathBuf;

use marquee_core::{Catalog, Dataset, Item, SimilarityMatrix};
use serde::de::DeserializeOwned;

pub const MOVIES_CATALOG: &str = "catalog/movies.json";
pub const MOVIES_MATRIX: &str = "matrix/movies_similarity.json";
pub const SCENARIO_CATALOG: &str = "catalog/scenario.json";
pub const SCENARIO_MATRIX: &str = "matrix/scenario_similarity.json";

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a catalog fixture.
pub fn load_catalog(relative_path: &str) -> Catalog {
    Catalog::new(load_fixture::<Vec<Item>>(relative_path))
}

/// Load a matrix fixture.
pub fn load_matrix(relative_path: &str) -> SimilarityMatrix {
    SimilarityMatrix::from_rows(load_fixture(relative_path))
        .unwrap_or_else(|e| panic!("Invalid matrix fixture {relative_path}: {e}"))
}

/// The eight-film dataset.
pub fn movies_dataset() -> Dataset {
    Dataset::new(load_catalog(MOVIES_CATALOG), load_matrix(MOVIES_MATRIX))
        .unwrap_or_else(|e| panic!("Invalid movies dataset: {e}"))
}

/// The A/B/C scenario dataset.
pub fn scenario_dataset() -> Dataset {
    Dataset::new(load_catalog(SCENARIO_CATALOG), load_matrix(SCENARIO_MATRIX))
        .unwrap_or_else(|e| panic!("Invalid scenario dataset: {e}"))
}

/// Build a dataset in code from `(title, tags)` pairs and matrix rows.
/// Ids are assigned from position, starting at 1.
pub fn dataset_from(items: &[(&str, &[&str])], rows: Vec<Vec<f64>>) -> Dataset {
    let items = items
        .iter()
        .enumerate()
        .map(|(i, (title, tags))| Item::new(i as u64 + 1, *title, tags.iter().copied()))
        .collect();
    let matrix = SimilarityMatrix::from_rows(rows)
        .unwrap_or_else(|e| panic!("Invalid matrix: {e}"));
    Dataset::new(Catalog::new(items), matrix).unwrap_or_else(|e| panic!("Invalid dataset: {e}"))
}
