use std::sync::Arc;

use marquee_assets::NullResolver;
use marquee_core::config::RecommendConfig;
use marquee_core::traits::Recommender;
use marquee_core::{Catalog, Dataset, Item, SimilarityMatrix};
use marquee_recommend::{genre_overlap_score, precision_at_k, rank, RecommendationEngine};
use proptest::prelude::*;

const TAGS: [&str; 5] = ["Action", "Drama", "Comedy", "Horror", "Family"];

/// Symmetric matrix from a size and a pool of upper-triangle scores.
/// Scores are quantized to tenths so ties are common.
fn arb_matrix() -> impl Strategy<Value = SimilarityMatrix> {
    (2usize..12).prop_flat_map(|n| {
        prop::collection::vec(0u8..=10, n * n).prop_map(move |raw| {
            let mut rows = vec![vec![0.0; n]; n];
            for i in 0..n {
                rows[i][i] = 1.0;
                for j in (i + 1)..n {
                    let score = f64::from(raw[i * n + j]) / 10.0;
                    rows[i][j] = score;
                    rows[j][i] = score;
                }
            }
            SimilarityMatrix::from_rows(rows).unwrap()
        })
    })
}

fn arb_tags() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(TAGS.to_vec(), 1..=TAGS.len())
}

fn dataset_for(matrix: SimilarityMatrix) -> Dataset {
    let items = (0..matrix.size())
        .map(|i| Item::new(i as u64, format!("t{i}"), [TAGS[i % TAGS.len()]]))
        .collect();
    Dataset::new(Catalog::new(items), matrix).unwrap()
}

proptest! {
    #[test]
    fn ranking_excludes_query(matrix in arb_matrix(), pick in any::<prop::sample::Index>()) {
        let query = pick.index(matrix.size());
        let ranked = rank(&matrix, query, matrix.size()).unwrap();
        prop_assert_eq!(ranked.len(), matrix.size() - 1);
        prop_assert!(ranked.iter().all(|r| r.position != query));
    }

    #[test]
    fn ranking_is_sorted_with_position_tiebreak(
        matrix in arb_matrix(),
        pick in any::<prop::sample::Index>(),
    ) {
        let query = pick.index(matrix.size());
        let ranked = rank(&matrix, query, matrix.size()).unwrap();
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
    }

    #[test]
    fn engine_returns_exactly_top_n(
        matrix in arb_matrix(),
        pick in any::<prop::sample::Index>(),
        top_n in 1usize..20,
    ) {
        let size = matrix.size();
        let query = pick.index(size);
        let engine = RecommendationEngine::new(
            dataset_for(matrix),
            Arc::new(NullResolver),
            RecommendConfig::default(),
        )
        .unwrap();

        let first = engine.recommend(&format!("t{query}"), top_n).unwrap();
        prop_assert_eq!(first.len(), top_n.min(size - 1));

        let second = engine.recommend(&format!("t{query}"), top_n).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn metrics_stay_in_unit_interval(
        tag_sets in prop::collection::vec(arb_tags(), 2..10),
        k in 1usize..12,
    ) {
        let catalog = Catalog::new(
            tag_sets
                .iter()
                .enumerate()
                .map(|(i, tags)| Item::new(i as u64, format!("t{i}"), tags.iter().copied()))
                .collect(),
        );
        let recommended: Vec<usize> = (1..catalog.len()).collect();

        let overlap = genre_overlap_score(0, &recommended, &catalog).unwrap();
        let precision = precision_at_k(0, &recommended, &catalog, k).unwrap();
        prop_assert!((0.0..=1.0).contains(&overlap));
        prop_assert!((0.0..=1.0).contains(&precision));
    }

    #[test]
    fn superset_tags_give_full_overlap(
        query_tags in arb_tags(),
        extra in arb_tags(),
        count in 1usize..6,
    ) {
        let mut items = vec![Item::new(0u64, "q", query_tags.iter().copied())];
        for i in 0..count {
            let tags = query_tags.iter().chain(extra.iter()).copied();
            items.push(Item::new(i as u64 + 1, format!("r{i}"), tags));
        }
        let catalog = Catalog::new(items);
        let recommended: Vec<usize> = (1..=count).collect();

        prop_assert_eq!(genre_overlap_score(0, &recommended, &catalog).unwrap(), 1.0);
        prop_assert_eq!(precision_at_k(0, &recommended, &catalog, count).unwrap(), 1.0);
    }
}
