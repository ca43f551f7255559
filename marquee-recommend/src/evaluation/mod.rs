//! Quality evaluation of ranked lists against the catalog's tag sets.
//!
//! Both metrics are pure: no I/O, deterministic for identical inputs.

pub mod genre_overlap;
pub mod precision;

use std::collections::BTreeSet;
use std::sync::Arc;

use marquee_core::errors::EvaluationError;
use marquee_core::{Catalog, EvaluationReport, MarqueeResult, RankedItem};
use marquee_observability::events;

pub use genre_overlap::genre_overlap_score;
pub use precision::precision_at_k;

/// Tags of the query item, which must exist and be non-empty.
pub(crate) fn query_tags(
    catalog: &Catalog,
    query: usize,
) -> Result<&BTreeSet<String>, EvaluationError> {
    let tags = item_tags(catalog, query)?;
    if tags.is_empty() {
        return Err(EvaluationError::EmptyQueryTags { position: query });
    }
    Ok(tags)
}

pub(crate) fn item_tags(
    catalog: &Catalog,
    position: usize,
) -> Result<&BTreeSet<String>, EvaluationError> {
    catalog.tags(position).ok_or(EvaluationError::IndexOutOfRange {
        position,
        len: catalog.len(),
    })
}

/// Scores rankings against a shared catalog.
#[derive(Debug, Clone)]
pub struct QualityEvaluator {
    catalog: Arc<Catalog>,
}

impl QualityEvaluator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Compute both metrics for one ranked index list.
    pub fn evaluate(
        &self,
        query: usize,
        recommended: &[usize],
        k: usize,
    ) -> MarqueeResult<EvaluationReport> {
        let genre_overlap = genre_overlap_score(query, recommended, &self.catalog)?;
        let precision = precision_at_k(query, recommended, &self.catalog, k)?;

        events::evaluation_completed(query, k, genre_overlap, precision);
        Ok(EvaluationReport {
            query,
            evaluated: recommended.len(),
            k,
            genre_overlap,
            precision_at_k: precision,
        })
    }

    /// [`QualityEvaluator::evaluate`] for engine output.
    pub fn evaluate_ranking(
        &self,
        query: usize,
        ranking: &[RankedItem],
        k: usize,
    ) -> MarqueeResult<EvaluationReport> {
        let recommended: Vec<usize> = ranking.iter().map(|r| r.position).collect();
        self.evaluate(query, &recommended, k)
    }
}
