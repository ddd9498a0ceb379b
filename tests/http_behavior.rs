//! Behavior tests for the HTTP layer, driven through the router without binding a
//! socket.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use stock_snapshot::config::{Config, DEFAULT_STATIC_DIR};
use stock_snapshot::scrapers::base::QuoteScraper;
use stock_snapshot::scrapers::fixture::FixtureScraper;
use stock_snapshot::server::build_router;
use stock_snapshot::{QuoteService, RawQuote, SnapshotError, OUTPUT_KEYS};
use tower::ServiceExt;

struct FailingScraper;

#[async_trait]
impl QuoteScraper for FailingScraper {
    fn source_name(&self) -> &'static str {
        "failing"
    }

    async fn fetch_raw_quote(&self, _ticker: &str) -> stock_snapshot::Result<RawQuote> {
        Err(SnapshotError::UpstreamError("upstream timed out".to_string()))
    }
}

fn fixture_router(config: &Config) -> Router {
    let mut quotes = HashMap::new();
    quotes.insert(
        "AAPL".to_string(),
        serde_json::from_value(json!({
            "longName": "Apple Inc.",
            "currentPrice": 189.5,
            "previousClose": 188.25,
            "marketCap": 2954876000000u64
        }))
        .unwrap(),
    );
    let service = QuoteService::new(Arc::new(FixtureScraper::new(quotes)));
    build_router(config, service).expect("router should build")
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let (status, body) = get_json(fixture_router(&Config::new()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("/static/index.html"));
}

#[tokio::test]
async fn known_ticker_returns_full_summary() {
    let (status, body) = get_json(fixture_router(&Config::new()), "/stock/aapl").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["company_name"], "Apple Inc.");
    assert_eq!(body["price"], "189.50");
    assert_eq!(body["daily_change"], "+1.25");
    assert_eq!(body["daily_change_percent"], "+0.66%");
    assert_eq!(body["market_cap"], "2.95T - Mega Cap");
    assert_eq!(body["beta"], "N/A");
    for key in OUTPUT_KEYS {
        assert!(body.get(key).is_some(), "missing key {}", key);
    }
}

#[tokio::test]
async fn unknown_ticker_is_still_a_200_record() {
    let (status, body) = get_json(fixture_router(&Config::new()), "/stock/ZZZZ").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["company_name"], "Ticker not found");
    assert_eq!(body["price"], "N/A");
}

#[tokio::test]
async fn acquisition_failure_maps_to_400_with_error_body() {
    let service = QuoteService::new(Arc::new(FailingScraper));
    let app = build_router(&Config::new(), service).unwrap();

    let (status, body) = get_json(app, "/stock/AAPL").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Upstream error: upstream timed out"}));
}

#[tokio::test]
async fn configured_origin_receives_cors_headers() {
    let config = Config::new().with_allowed_origin("https://fastapi-publish.onrender.com");
    let app = fixture_router(&config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/stock/AAPL")
                .header(header::ORIGIN, "https://fastapi-publish.onrender.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://fastapi-publish.onrender.com"
    );
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn static_directory_is_served_under_static() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>stocks</h1>").unwrap();
    let config = Config::new().with_static_dir(dir.path().to_str().unwrap());
    let app = fixture_router(&config);

    let response = app
        .oneshot(Request::builder().uri("/static/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"<h1>stocks</h1>");
}

#[tokio::test]
async fn welcome_page_is_shipped_in_default_static_dir() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_STATIC_DIR);
    let config = Config::new().with_static_dir(dir.to_str().unwrap());

    for uri in ["/static/index.html", "/static/app.js"] {
        let response = fixture_router(&config)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{} should be served", uri);
    }
}
