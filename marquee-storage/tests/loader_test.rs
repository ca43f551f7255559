//! marquee-storage integration tests.

use std::io::Write;

use marquee_core::config::StorageConfig;
use marquee_core::errors::{CatalogError, MarqueeError, StorageError};
use marquee_core::{ItemId, SimilarityMatrix};
use marquee_storage::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write_temp(suffix: &str, bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(bytes).unwrap();
    file
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[test]
fn loads_movie_catalog_in_file_order() {
    let catalog = load_catalog_json(&test_fixtures::fixture_path(test_fixtures::MOVIES_CATALOG))
        .unwrap();
    assert_eq!(catalog.len(), 8);
    assert_eq!(catalog.get(0).unwrap().title, "Avatar");
    assert_eq!(catalog.get(0).unwrap().id, ItemId(19995));
    assert_eq!(catalog.position_of("Aliens"), Some(7));
    assert!(catalog.tags(5).unwrap().contains("Animation"));
}

#[test]
fn catalog_parse_error_names_origin() {
    let err = parse_catalog_json("{\"id\": 1}").unwrap_err();
    match err {
        MarqueeError::StorageError(StorageError::Parse { path, .. }) => {
            assert_eq!(path, "<string>")
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn missing_catalog_file_is_io_error() {
    let err = load_catalog_json(std::path::Path::new("/nonexistent/catalog.json")).unwrap_err();
    assert!(matches!(err, MarqueeError::StorageError(StorageError::Io { .. })));
}

// ---------------------------------------------------------------------------
// Matrix
// ---------------------------------------------------------------------------

#[test]
fn json_matrix_is_validated_on_load() {
    let file = write_temp(".json", b"[[1.0, 0.3], [0.7, 1.0]]");
    let err = load_matrix(file.path()).unwrap_err();
    assert!(matches!(
        err,
        MarqueeError::InvariantViolation(CatalogError::Asymmetric { .. })
    ));
}

#[test]
fn binary_matrix_survives_write_and_load() {
    let matrix = test_fixtures::load_matrix(test_fixtures::MOVIES_MATRIX);
    let file = tempfile::Builder::new().suffix(".bin").tempfile().unwrap();
    write_matrix_binary(&matrix, file.path()).unwrap();

    let loaded = load_matrix(file.path()).unwrap();
    assert_eq!(loaded.size(), 8);
    for i in 0..8 {
        for j in 0..8 {
            assert!((loaded.get(i, j) - matrix.get(i, j)).abs() < 1e-6);
        }
    }
}

#[test]
fn binary_header_layout_is_little_endian() {
    let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5, 1.0]]).unwrap();
    let bytes = encode_matrix_binary(&matrix);
    assert_eq!(&bytes[..4], &2u32.to_le_bytes());
    assert_eq!(bytes.len(), 4 + 4 * 4);
    assert_eq!(&bytes[8..12], &0.5f32.to_le_bytes());
}

#[test]
fn truncated_binary_matrix_is_corrupt() {
    let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5, 1.0]]).unwrap();
    let bytes = encode_matrix_binary(&matrix);
    let err = decode_matrix_binary(&bytes[..bytes.len() - 2]).unwrap_err();
    assert!(matches!(err, MarqueeError::StorageError(StorageError::Corrupt { .. })));

    let err = decode_matrix_binary(&[1, 0]).unwrap_err();
    assert!(matches!(err, MarqueeError::StorageError(StorageError::Corrupt { .. })));
}

#[test]
fn empty_binary_matrix_decodes() {
    let matrix = decode_matrix_binary(&0u32.to_le_bytes()).unwrap();
    assert_eq!(matrix.size(), 0);
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

#[test]
fn load_dataset_pairs_catalog_and_matrix() {
    let config = StorageConfig {
        catalog_path: test_fixtures::fixture_path(test_fixtures::MOVIES_CATALOG)
            .display()
            .to_string(),
        matrix_path: test_fixtures::fixture_path(test_fixtures::MOVIES_MATRIX)
            .display()
            .to_string(),
    };
    let dataset = load_dataset(&config).unwrap();
    assert_eq!(dataset.catalog().len(), dataset.matrix().size());
}

#[test]
fn load_dataset_rejects_size_mismatch() {
    let config = StorageConfig {
        catalog_path: test_fixtures::fixture_path(test_fixtures::MOVIES_CATALOG)
            .display()
            .to_string(),
        matrix_path: test_fixtures::fixture_path(test_fixtures::SCENARIO_MATRIX)
            .display()
            .to_string(),
    };
    let err = load_dataset(&config).unwrap_err();
    assert!(matches!(
        err,
        MarqueeError::InvariantViolation(CatalogError::SizeMismatch {
            matrix_size: 3,
            catalog_size: 8
        })
    ));
}
