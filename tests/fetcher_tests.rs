// Integration tests for the rate-gated fetcher against a mock upstream

use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use yahoo_finance_provider::config::YahooConfig;
use yahoo_finance_provider::error::ProviderError;
use yahoo_finance_provider::yahoo::{
    ChartInterval, ChartRange, RateLimiter, TrendingRegion, YahooClient, USER_AGENT,
};

fn client_for(server: &Server, interval: Duration) -> YahooClient {
    let config = YahooConfig {
        query1_url: server.url(),
        query2_url: server.url(),
        timeout: Some(Duration::from_secs(5)),
    };
    YahooClient::with_rate_limiter(&config, Arc::new(RateLimiter::with_interval(interval)))
        .expect("client")
}

#[tokio::test]
async fn test_quote_passes_json_through() {
    let mut server = Server::new_async().await;
    let payload = json!({
        "quoteResponse": { "result": [{ "symbol": "AAPL", "regularMarketPrice": 189.5 }], "error": null }
    });
    let mock = server
        .mock("GET", "/v7/finance/quote")
        .match_query(Matcher::UrlEncoded("symbols".into(), "AAPL,GOOGL".into()))
        .match_header("user-agent", USER_AGENT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(payload.to_string())
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_millis(10));
    let data = client.get_quote("AAPL,GOOGL").await.expect("quote");

    mock.assert_async().await;
    assert_eq!(data, payload);
}

#[tokio::test]
async fn test_upstream_404_is_classified() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v10/finance/quoteSummary/NOPE")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("not found")
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_millis(10));
    let err = client.get_fundamentals("NOPE").await.unwrap_err();

    match err {
        ProviderError::Upstream { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upstream_body_is_truncated_to_500_chars() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/finance/trending/US")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("e".repeat(2000))
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_millis(10));
    let err = client.get_trending(TrendingRegion::Us).await.unwrap_err();

    match err {
        ProviderError::Upstream { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body.len(), 500);
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_is_parse_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/AAPL")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("range".into(), "5d".into()),
            Matcher::UrlEncoded("interval".into(), "15m".into()),
        ]))
        .with_status(200)
        .with_body("<html>Will be right back...</html>")
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_millis(10));
    let err = client
        .get_chart("AAPL", ChartRange::FiveDays, ChartInterval::FifteenMinutes)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_error_envelope_with_200_is_passed_through() {
    let mut server = Server::new_async().await;
    let payload = json!({
        "optionChain": { "result": [], "error": { "code": "Not Found", "description": "No data found" } }
    });
    let _mock = server
        .mock("GET", "/v7/finance/options/ZZZZ")
        .with_status(200)
        .with_body(payload.to_string())
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_millis(10));
    let data = client.get_options("ZZZZ", None).await.expect("options");

    assert_eq!(data, payload);
}

#[tokio::test]
async fn test_options_date_is_forwarded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v7/finance/options/SPY")
        .match_query(Matcher::UrlEncoded("date".into(), "1700000000".into()))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_millis(10));
    client
        .get_options("SPY", Some("1700000000"))
        .await
        .expect("options");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_uses_fixed_counts() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/finance/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Tesla".into()),
            Matcher::UrlEncoded("quotesCount".into(), "10".into()),
            Matcher::UrlEncoded("newsCount".into(), "0".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"quotes":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_millis(10));
    client.search_symbols("Tesla").await.expect("search");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_validation_happens_before_dispatch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .with_status(200)
        .with_body("{}")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_millis(10));
    assert!(matches!(
        client.get_quote("   ").await,
        Err(ProviderError::Validation(_))
    ));
    assert!(matches!(
        client.get_options("AAPL", Some("2024-06-21")).await,
        Err(ProviderError::Validation(_))
    ));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_upstream_is_transport_error() {
    let config = YahooConfig {
        query1_url: "http://127.0.0.1:1".to_string(),
        query2_url: "http://127.0.0.1:1".to_string(),
        timeout: Some(Duration::from_secs(5)),
    };
    let client = YahooClient::with_rate_limiter(&config, Arc::new(RateLimiter::new()))
        .expect("client");

    let err = client.get_quote("AAPL").await.unwrap_err();
    assert!(matches!(err, ProviderError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_back_to_back_fetches_are_spaced_by_500ms() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/finance/trending/JP")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{}")
        .expect(3)
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_millis(500));

    let start = Instant::now();
    for _ in 0..3 {
        client.get_trending(TrendingRegion::Jp).await.expect("trending");
    }
    let elapsed = start.elapsed();

    mock.assert_async().await;
    assert!(
        elapsed >= Duration::from_millis(1000),
        "three calls finished in {elapsed:?}"
    );
}

#[tokio::test]
async fn test_failed_request_still_counts_against_the_gate() {
    let mut server = Server::new_async().await;
    let _fail = server
        .mock("GET", "/v7/finance/quote")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_millis(300));

    let start = Instant::now();
    assert!(client.get_quote("AAPL").await.is_err());
    assert!(client.get_quote("AAPL").await.is_err());

    assert!(start.elapsed() >= Duration::from_millis(300));
}
