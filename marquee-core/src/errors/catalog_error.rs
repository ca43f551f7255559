/// Invariant violations in the catalog or similarity matrix.
///
/// These abort a request: ranking against a malformed matrix would produce
/// silently wrong results.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("matrix size {matrix_size} does not match catalog size {catalog_size}")]
    SizeMismatch {
        matrix_size: usize,
        catalog_size: usize,
    },

    #[error("matrix is not square: row {row} has {len} columns, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("matrix is not symmetric at ({i}, {j}): {forward} vs {backward}")]
    Asymmetric {
        i: usize,
        j: usize,
        forward: f64,
        backward: f64,
    },

    #[error("matrix holds a non-finite score at ({i}, {j})")]
    NonFinite { i: usize, j: usize },
}
