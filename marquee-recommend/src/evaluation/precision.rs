use marquee_core::errors::EvaluationError;
use marquee_core::{Catalog, MarqueeResult};

use super::{item_tags, query_tags};

/// Precision@K with "shares at least one tag with the query" as relevance.
///
/// Only the first `k` recommendations are considered. A list shorter than `k`
/// is not padded or rejected: the missing slots count as not relevant, so the
/// result is always `relevant / k`.
///
/// # Errors
/// - `InvalidK` when `k == 0`.
/// - `EmptyQueryTags` when the query has no tags.
/// - `IndexOutOfRange` for any considered position outside the catalog.
pub fn precision_at_k(
    query: usize,
    recommended: &[usize],
    catalog: &Catalog,
    k: usize,
) -> MarqueeResult<f64> {
    if k == 0 {
        return Err(EvaluationError::InvalidK.into());
    }
    let query_set = query_tags(catalog, query)?;

    let mut relevant = 0usize;
    for &position in recommended.iter().take(k) {
        if !item_tags(catalog, position)?.is_disjoint(query_set) {
            relevant += 1;
        }
    }

    Ok(relevant as f64 / k as f64)
}
