//! Similarity store: dense square score matrix indexed by catalog position,
//! and the [`Dataset`] pairing it with its catalog.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::constants::SYMMETRY_TOLERANCE;
use crate::errors::{CatalogError, MarqueeResult};

/// Immutable symmetric similarity matrix, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build from nested rows, validating shape, finiteness and symmetry.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MarqueeResult<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(CatalogError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                }
                .into());
            }
            cells.extend(values);
        }
        Self::from_flat(size, cells)
    }

    /// Build from a row-major buffer of `size * size` scores.
    pub fn from_flat(size: usize, cells: Vec<f64>) -> MarqueeResult<Self> {
        let Some(expected) = size.checked_mul(size) else {
            return Err(CatalogError::NotSquare {
                row: 0,
                len: cells.len(),
                expected: size,
            }
            .into());
        };
        if cells.len() != expected {
            return Err(CatalogError::NotSquare {
                row: cells.len() / size.max(1),
                len: cells.len() % size.max(1),
                expected: size,
            }
            .into());
        }
        let matrix = Self { size, cells };
        matrix.validate()?;
        Ok(matrix)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for i in 0..self.size {
            for j in i..self.size {
                let forward = self.get(i, j);
                let backward = self.get(j, i);
                if !forward.is_finite() {
                    return Err(CatalogError::NonFinite { i, j });
                }
                if !backward.is_finite() {
                    return Err(CatalogError::NonFinite { i: j, j: i });
                }
                if (forward - backward).abs() > SYMMETRY_TOLERANCE {
                    return Err(CatalogError::Asymmetric {
                        i,
                        j,
                        forward,
                        backward,
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Scores of `position` against every item, indexed by position.
    ///
    /// # Panics
    /// Panics if `position >= size()`.
    pub fn row(&self, position: usize) -> &[f64] {
        let start = position * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.size + j]
    }
}

/// Catalog and matrix loaded together, checked for size agreement, and shared
/// read-only between the engine and the evaluator.
#[derive(Debug, Clone)]
pub struct Dataset {
    catalog: Arc<Catalog>,
    matrix: Arc<SimilarityMatrix>,
}

impl Dataset {
    pub fn new(catalog: Catalog, matrix: SimilarityMatrix) -> MarqueeResult<Self> {
        Self::from_shared(Arc::new(catalog), Arc::new(matrix))
    }

    pub fn from_shared(
        catalog: Arc<Catalog>,
        matrix: Arc<SimilarityMatrix>,
    ) -> MarqueeResult<Self> {
        if matrix.size() != catalog.len() {
            return Err(CatalogError::SizeMismatch {
                matrix_size: matrix.size(),
                catalog_size: catalog.len(),
            }
            .into());
        }
        Ok(Self { catalog, matrix })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn matrix(&self) -> &Arc<SimilarityMatrix> {
        &self.matrix
    }
}
