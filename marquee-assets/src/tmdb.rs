//! TMDB poster lookup with retry, exponential backoff, and timeout.
//!
//! `GET {api_base}/movie/{id}?api_key=..&language=..` returns a movie record
//! whose `poster_path` is joined onto the configured image base.

use std::time::Duration;

use serde::Deserialize;

use marquee_core::config::AssetConfig;
use marquee_core::errors::AssetError;
use marquee_core::traits::AssetResolver;
use marquee_core::{ItemId, MarqueeResult};

/// The subset of the TMDB movie record we read.
#[derive(Debug, Deserialize)]
struct MovieDetails {
    #[serde(default)]
    poster_path: Option<String>,
}

/// Extract the poster URL from a TMDB movie response body.
///
/// A null, absent, or empty `poster_path` means the movie has no poster.
pub fn poster_url_from_body(
    item_id: ItemId,
    image_base: &str,
    body: &str,
) -> Result<Option<String>, AssetError> {
    let details: MovieDetails =
        serde_json::from_str(body).map_err(|e| AssetError::MalformedResponse {
            item_id,
            reason: e.to_string(),
        })?;
    Ok(details
        .poster_path
        .filter(|p| !p.trim().is_empty())
        .map(|p| join_url(image_base, &p)))
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Double `current`, capped at `max`.
#[cfg_attr(not(feature = "tmdb"), allow(dead_code))]
fn next_backoff(current: Duration, max: Duration) -> Duration {
    current.saturating_mul(2).min(max)
}

/// Poster resolver backed by the TMDB API.
#[derive(Debug, Clone)]
pub struct TmdbPosterResolver {
    config: AssetConfig,
    #[cfg(feature = "tmdb")]
    client: Option<reqwest::blocking::Client>,
}

impl TmdbPosterResolver {
    pub fn new(config: AssetConfig) -> Self {
        #[cfg(feature = "tmdb")]
        {
            let client = reqwest::blocking::Client::builder()
                .timeout(config.timeout())
                .gzip(true)
                .build()
                .map_err(|e| tracing::warn!(error = %e, "failed to build TMDB client"))
                .ok();
            Self { config, client }
        }

        #[cfg(not(feature = "tmdb"))]
        {
            Self { config }
        }
    }

    /// Endpoint for an item, without credentials.
    pub fn movie_url(&self, item_id: ItemId) -> String {
        format!(
            "{}/movie/{}",
            self.config.api_base.trim_end_matches('/'),
            item_id
        )
    }

    #[cfg(feature = "tmdb")]
    fn fetch(&self, item_id: ItemId) -> Result<Option<String>, AssetError> {
        let client = self.client.as_ref().ok_or_else(|| AssetError::NotConfigured {
            reason: "HTTP client unavailable".into(),
        })?;
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AssetError::NotConfigured {
                reason: "missing TMDB API key".into(),
            })?;
        let url = self.movie_url(item_id);

        let mut backoff = self.config.initial_backoff();
        let mut last_err = String::new();

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::debug!(
                    item_id = %item_id,
                    attempt,
                    max_retries = self.config.max_retries,
                    ?backoff,
                    "tmdb: retrying poster lookup"
                );
                std::thread::sleep(backoff);
                backoff = next_backoff(backoff, self.config.max_backoff());
            }

            let request = client
                .get(&url)
                .query(&[("api_key", api_key), ("language", self.config.language.as_str())]);

            match request.send() {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        let body = resp.text().map_err(|e| AssetError::RequestFailed {
                            item_id,
                            reason: format!("failed to read body: {e}"),
                        })?;
                        return poster_url_from_body(item_id, &self.config.image_base, &body);
                    }
                    if status.is_client_error() {
                        return Err(AssetError::RequestFailed {
                            item_id,
                            reason: format!("HTTP {status}"),
                        });
                    }
                    last_err = format!("HTTP {status}");
                }
                Err(e) => {
                    // Strip the URL so the API key never reaches the logs.
                    last_err = e.without_url().to_string();
                }
            }
        }

        Err(AssetError::RequestFailed {
            item_id,
            reason: format!(
                "all {} retries exhausted: {last_err}",
                self.config.max_retries
            ),
        })
    }

    #[cfg(not(feature = "tmdb"))]
    fn fetch(&self, _item_id: ItemId) -> Result<Option<String>, AssetError> {
        Err(AssetError::NotConfigured {
            reason: "tmdb feature not enabled".into(),
        })
    }
}

impl AssetResolver for TmdbPosterResolver {
    fn resolve(&self, item_id: ItemId) -> MarqueeResult<Option<String>> {
        Ok(self.fetch(item_id)?)
    }

    fn name(&self) -> &str {
        "tmdb"
    }
}
