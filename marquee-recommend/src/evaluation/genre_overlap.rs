use marquee_core::errors::EvaluationError;
use marquee_core::{Catalog, MarqueeResult};

use super::{item_tags, query_tags};

/// Mean fraction of the query's tags present in each recommended item.
///
/// For each recommendation: `|tags(query) ∩ tags(rec)| / |tags(query)|`,
/// averaged over all recommendations. Result is in [0, 1].
///
/// # Errors
/// - `EmptyQueryTags` when the query has no tags (the fraction is undefined).
/// - `EmptyRecommendations` when `recommended` is empty.
/// - `IndexOutOfRange` for any position outside the catalog.
pub fn genre_overlap_score(
    query: usize,
    recommended: &[usize],
    catalog: &Catalog,
) -> MarqueeResult<f64> {
    let query_set = query_tags(catalog, query)?;
    if recommended.is_empty() {
        return Err(EvaluationError::EmptyRecommendations.into());
    }

    let denominator = query_set.len() as f64;
    let mut total = 0.0;
    for &position in recommended {
        let shared = item_tags(catalog, position)?.intersection(query_set).count();
        total += shared as f64 / denominator;
    }

    Ok(total / recommended.len() as f64)
}
