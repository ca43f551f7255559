//! TMDB resolver against a mock HTTP server: status handling and retries.

#![cfg(feature = "tmdb")]

use std::net::TcpListener;

use httpmock::prelude::*;
use serde_json::json;

use marquee_assets::TmdbPosterResolver;
use marquee_core::config::AssetConfig;
use marquee_core::errors::AssetError;
use marquee_core::traits::AssetResolver;
use marquee_core::{ItemId, MarqueeError};

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

fn resolver_for(api_base: String, max_retries: u32) -> TmdbPosterResolver {
    TmdbPosterResolver::new(AssetConfig {
        api_key: Some("test-key".into()),
        api_base,
        image_base: IMAGE_BASE.into(),
        timeout_ms: 2_000,
        max_retries,
        initial_backoff_ms: 1,
        max_backoff_ms: 4,
        ..AssetConfig::default()
    })
}

fn request_failed_reason(err: MarqueeError) -> String {
    match err {
        MarqueeError::AssetError(AssetError::RequestFailed { reason, .. }) => reason,
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[test]
fn success_returns_joined_poster_url() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/movie/285")
            .query_param("api_key", "test-key")
            .query_param("language", "en-US");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "id": 285, "poster_path": "/pirates.jpg" }));
    });

    let url = resolver_for(server.base_url(), 2)
        .resolve(ItemId(285))
        .unwrap();
    assert_eq!(url, Some(format!("{IMAGE_BASE}/pirates.jpg")));
    mock.assert();
}

#[test]
fn null_poster_path_is_no_asset() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/movie/11036");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "id": 11036, "poster_path": null }));
    });

    let url = resolver_for(server.base_url(), 2)
        .resolve(ItemId(11036))
        .unwrap();
    assert_eq!(url, None);
    mock.assert();
}

#[test]
fn client_error_fails_without_retrying() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/movie/1");
        then.status(404)
            .json_body(json!({ "status_message": "not found" }));
    });

    let err = resolver_for(server.base_url(), 3)
        .resolve(ItemId(1))
        .unwrap_err();
    let reason = request_failed_reason(err);
    assert!(reason.contains("404"), "{reason}");
    mock.assert_hits(1);
}

#[test]
fn server_error_is_retried_until_exhausted() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/movie/1");
        then.status(503);
    });

    let err = resolver_for(server.base_url(), 2)
        .resolve(ItemId(1))
        .unwrap_err();
    let reason = request_failed_reason(err);
    assert!(reason.contains("retries exhausted"), "{reason}");
    assert!(reason.contains("503"), "{reason}");
    mock.assert_hits(3);
}

#[test]
fn transport_error_is_retried_and_hides_the_key() {
    // Bind then drop so nothing listens on the port.
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let resolver = TmdbPosterResolver::new(AssetConfig {
        api_key: Some("secret-key".into()),
        api_base: format!("http://{addr}"),
        timeout_ms: 500,
        max_retries: 1,
        initial_backoff_ms: 1,
        max_backoff_ms: 2,
        ..AssetConfig::default()
    });

    let reason = request_failed_reason(resolver.resolve(ItemId(1)).unwrap_err());
    assert!(reason.contains("retries exhausted"), "{reason}");
    assert!(!reason.contains("secret-key"), "{reason}");
}
