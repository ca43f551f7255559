//! RecommendationEngine: implements Recommender.
//!
//! title → catalog position → similarity row → top-N ranking → asset fan-out.

use std::sync::Arc;

use marquee_core::config::RecommendConfig;
use marquee_core::traits::{AssetResolver, Recommender};
use marquee_core::{Dataset, MarqueeError, MarqueeResult, RankedItem, Recommendation};
use marquee_observability::events;
use tracing::debug;

use crate::ranking;
use crate::resolution::AssetFanout;

/// Title-based recommender over a shared, read-only [`Dataset`].
///
/// Requests for more items than the catalog can supply are clamped to
/// `catalog.len() - 1`; a request for zero items is rejected.
pub struct RecommendationEngine {
    dataset: Dataset,
    resolver: Arc<dyn AssetResolver>,
    fanout: AssetFanout,
    config: RecommendConfig,
}

impl RecommendationEngine {
    pub fn new(
        dataset: Dataset,
        resolver: Arc<dyn AssetResolver>,
        config: RecommendConfig,
    ) -> MarqueeResult<Self> {
        let fanout = AssetFanout::new(config.asset_parallelism)?;
        Ok(Self {
            dataset,
            resolver,
            fanout,
            config,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    /// Rank the items most similar to `title`, without resolving assets.
    pub fn rank_title(&self, title: &str, top_n: usize) -> MarqueeResult<Vec<RankedItem>> {
        if top_n == 0 {
            return Err(MarqueeError::InvalidArgument {
                reason: "top_n must be positive".into(),
            });
        }
        let catalog = self.dataset.catalog();
        let query = catalog.resolve(title)?;

        let available = catalog.len().saturating_sub(1);
        let effective = top_n.min(available);
        if effective < top_n {
            debug!(title, requested = top_n, available, "clamping top_n to available items");
        }

        let ranked = ranking::rank(self.dataset.matrix(), query, effective)?;
        debug!(title, query, ranked = ranked.len(), "ranking complete");
        Ok(ranked)
    }

    /// [`Recommender::recommend`] with the configured default `top_n`.
    pub fn recommend_default(&self, title: &str) -> MarqueeResult<Vec<Recommendation>> {
        self.recommend(title, self.config.default_top_n)
    }
}

impl Recommender for RecommendationEngine {
    fn recommend(&self, title: &str, top_n: usize) -> MarqueeResult<Vec<Recommendation>> {
        let ranked = self.rank_title(title, top_n)?;
        let catalog = self.dataset.catalog();

        let items = ranked
            .iter()
            .map(|r| {
                catalog.get(r.position).ok_or_else(|| MarqueeError::InvalidArgument {
                    reason: format!("ranked position {} missing from catalog", r.position),
                })
            })
            .collect::<MarqueeResult<Vec<_>>>()?;

        let ids: Vec<_> = items.iter().map(|item| item.id).collect();
        let assets = self.fanout.resolve_all(self.resolver.as_ref(), &ids);

        let recommendations: Vec<Recommendation> = ranked
            .iter()
            .zip(items)
            .zip(assets)
            .enumerate()
            .map(|(i, ((r, item), asset))| Recommendation {
                rank: i + 1,
                position: r.position,
                title: item.title.clone(),
                item_id: item.id,
                score: r.score,
                asset,
            })
            .collect();

        let missing = recommendations.iter().filter(|r| r.asset.is_missing()).count();
        events::recommendation_served(title, top_n, recommendations.len(), missing);
        Ok(recommendations)
    }
}
