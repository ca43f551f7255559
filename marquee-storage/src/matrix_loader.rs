//! Similarity matrix loading and binary encoding.

use std::path::Path;

use marquee_core::errors::{MarqueeResult, StorageError};
use marquee_core::SimilarityMatrix;
use tracing::debug;

const HEADER_LEN: usize = 4;
const CELL_LEN: usize = 4;

/// Load a matrix, choosing the format from the file extension.
pub fn load_matrix(path: &Path) -> MarqueeResult<SimilarityMatrix> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("bin") => load_matrix_binary(path),
        _ => load_matrix_json(path),
    }
}

pub fn load_matrix_json(path: &Path) -> MarqueeResult<SimilarityMatrix> {
    let content = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let rows: Vec<Vec<f64>> = serde_json::from_str(&content).map_err(|e| StorageError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), size = rows.len(), "json matrix loaded");
    SimilarityMatrix::from_rows(rows)
}

pub fn load_matrix_binary(path: &Path) -> MarqueeResult<SimilarityMatrix> {
    let bytes = std::fs::read(path).map_err(|e| io_err(path, e))?;
    let matrix = decode(&bytes, &path.display().to_string())?;
    debug!(path = %path.display(), size = matrix.size(), "binary matrix loaded");
    Ok(matrix)
}

/// Decode the binary matrix format from memory.
pub fn decode_matrix_binary(bytes: &[u8]) -> MarqueeResult<SimilarityMatrix> {
    decode(bytes, "<bytes>")
}

fn decode(bytes: &[u8], origin: &str) -> MarqueeResult<SimilarityMatrix> {
    let corrupt = |details: String| StorageError::Corrupt {
        path: origin.to_string(),
        details,
    };

    let header: [u8; HEADER_LEN] = bytes
        .get(..HEADER_LEN)
        .and_then(|h| h.try_into().ok())
        .ok_or_else(|| corrupt(format!("file shorter than {HEADER_LEN}-byte header")))?;
    let size = u32::from_le_bytes(header) as usize;

    let expected = size
        .checked_mul(size)
        .and_then(|cells| cells.checked_mul(CELL_LEN))
        .ok_or_else(|| corrupt(format!("matrix size {size} overflows")))?;
    let body = &bytes[HEADER_LEN..];
    if body.len() != expected {
        return Err(corrupt(format!(
            "expected {expected} bytes of scores for size {size}, found {}",
            body.len()
        ))
        .into());
    }

    let cells = body
        .chunks_exact(CELL_LEN)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as f64)
        .collect();
    SimilarityMatrix::from_flat(size, cells)
}

/// Encode a matrix in the binary format. Scores are narrowed to f32.
pub fn encode_matrix_binary(matrix: &SimilarityMatrix) -> Vec<u8> {
    let size = matrix.size();
    let mut bytes = Vec::with_capacity(HEADER_LEN + size * size * CELL_LEN);
    bytes.extend_from_slice(&(size as u32).to_le_bytes());
    for i in 0..size {
        for &score in matrix.row(i) {
            bytes.extend_from_slice(&(score as f32).to_le_bytes());
        }
    }
    bytes
}

pub fn write_matrix_binary(matrix: &SimilarityMatrix, path: &Path) -> MarqueeResult<()> {
    std::fs::write(path, encode_matrix_binary(matrix)).map_err(|e| io_err(path, e))?;
    Ok(())
}

fn io_err(path: &Path, e: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
