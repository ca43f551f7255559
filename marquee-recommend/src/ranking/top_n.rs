use std::cmp::Ordering;

use marquee_core::{MarqueeError, MarqueeResult, RankedItem, SimilarityMatrix};

/// Rank all items except `query` by their score against it and keep the first `top_n`.
///
/// Scores sort descending. Equal scores keep ascending position order, so the
/// output is fully determined by the matrix.
pub fn rank(
    matrix: &SimilarityMatrix,
    query: usize,
    top_n: usize,
) -> MarqueeResult<Vec<RankedItem>> {
    if query >= matrix.size() {
        return Err(MarqueeError::InvalidArgument {
            reason: format!(
                "query position {query} out of range for matrix of size {}",
                matrix.size()
            ),
        });
    }

    let mut ranked: Vec<RankedItem> = matrix
        .row(query)
        .iter()
        .enumerate()
        .filter(|&(position, _)| position != query)
        .map(|(position, &score)| RankedItem { position, score })
        .collect();

    // Stable sort: ties stay in enumeration order.
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(top_n);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> SimilarityMatrix {
        SimilarityMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn excludes_query_even_when_it_scores_highest() {
        let m = matrix(vec![vec![5.0, 1.0], vec![1.0, 5.0]]);
        let ranked = rank(&m, 0, 5).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].position, 1);
    }

    #[test]
    fn ties_break_by_position() {
        let m = matrix(vec![
            vec![1.0, 0.5, 0.5, 0.5],
            vec![0.5, 1.0, 0.5, 0.5],
            vec![0.5, 0.5, 1.0, 0.5],
            vec![0.5, 0.5, 0.5, 1.0],
        ]);
        let positions: Vec<usize> = rank(&m, 2, 3).unwrap().iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 1, 3]);
    }

    #[test]
    fn out_of_range_query_is_rejected() {
        let m = matrix(vec![vec![1.0]]);
        assert!(rank(&m, 1, 1).is_err());
    }
}
