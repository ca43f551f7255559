//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

use marquee_core::ItemId;

/// Log a served recommendation request.
pub fn recommendation_served(
    title: &str,
    requested: usize,
    returned: usize,
    missing_assets: usize,
) {
    tracing::info!(
        event = "recommendation_served",
        title = %title,
        requested = requested,
        returned = returned,
        missing_assets = missing_assets,
        "recommendation served"
    );
}

/// Log a failed asset lookup that was replaced by the sentinel.
pub fn asset_resolution_failed(item_id: ItemId, resolver: &str, reason: &str) {
    tracing::warn!(
        event = "asset_resolution_failed",
        item_id = %item_id,
        resolver = %resolver,
        reason = %reason,
        "asset resolution failed, using sentinel"
    );
}

/// Log a loaded catalog and matrix.
pub fn dataset_loaded(items: usize, duplicate_titles: usize, matrix_source: &str) {
    tracing::info!(
        event = "dataset_loaded",
        items = items,
        duplicate_titles = duplicate_titles,
        matrix_source = %matrix_source,
        "dataset loaded"
    );
}

/// Log a completed quality evaluation.
pub fn evaluation_completed(query: usize, k: usize, genre_overlap: f64, precision_at_k: f64) {
    tracing::info!(
        event = "evaluation_completed",
        query = query,
        k = k,
        genre_overlap = genre_overlap,
        precision_at_k = precision_at_k,
        "evaluation completed"
    );
}
