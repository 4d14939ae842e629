//! HTTP module tests.

use std::sync::Arc;
use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};

use super::*;
use crate::error_handling::{FetchFailure, ProbeOutcome, ProbeStats};
use crate::models::{DnsResult, Protocol, RecordKind};
use crate::test_helpers::MockFetcher;

fn dns(fqdn: &str) -> DnsResult {
    DnsResult::new(fqdn, RecordKind::A, vec!["1.2.3.4".to_string()])
}

#[tokio::test]
async fn test_https_response_is_accepted() {
    let fetcher = MockFetcher::new().with_response(
        "https://api.example.com",
        200,
        &[("Content-Type", "application/json"), ("Server", "nginx")],
    );
    let stats = ProbeStats::new();

    let result = probe_http(
        &fetcher,
        dns("api.example.com"),
        &ApiHeuristics::default(),
        &stats,
    )
    .await;

    assert!(result.accessible());
    assert!(result.likely_api());
    let http = result.http().expect("details present");
    assert_eq!(http.url, "https://api.example.com");
    assert_eq!(http.protocol, Protocol::Https);
    assert_eq!(http.http_status, 200);
    assert_eq!(http.server, "nginx");
    assert_eq!(http.content_type, "application/json");
    // HTTPS answered, so plain HTTP is never tried
    assert_eq!(fetcher.requested_urls(), vec!["https://api.example.com"]);
    assert_eq!(stats.get_count(ProbeOutcome::HttpsReachable), 1);
}

#[tokio::test]
async fn test_https_failure_falls_through_to_http() {
    let fetcher = MockFetcher::new()
        .with_failure(
            "https://legacy.example.com",
            FetchFailure::Tls("handshake failure".to_string()),
        )
        .with_response("http://legacy.example.com", 404, &[]);
    let stats = ProbeStats::new();

    let result = probe_http(
        &fetcher,
        dns("legacy.example.com"),
        &ApiHeuristics::default(),
        &stats,
    )
    .await;

    let http = result.http().expect("HTTP answered");
    assert_eq!(http.protocol, Protocol::Http);
    assert_eq!(http.http_status, 404);
    assert_eq!(http.server, "Unknown");
    assert_eq!(http.content_type, "Unknown");
    assert!(!result.likely_api());
    assert_eq!(
        fetcher.requested_urls(),
        vec!["https://legacy.example.com", "http://legacy.example.com"]
    );
    assert_eq!(stats.get_count(ProbeOutcome::HttpTlsError), 1);
    assert_eq!(stats.get_count(ProbeOutcome::HttpReachable), 1);
}

#[tokio::test]
async fn test_server_error_counts_as_accessible() {
    let fetcher = MockFetcher::new().with_response("https://broken.example.com", 503, &[]);

    let result = probe_http(
        &fetcher,
        dns("broken.example.com"),
        &ApiHeuristics::default(),
        &ProbeStats::new(),
    )
    .await;

    assert!(result.accessible());
    assert_eq!(result.http().map(|h| h.http_status), Some(503));
}

#[tokio::test]
async fn test_both_schemes_failing_is_not_accessible() {
    // api-like URL and both attempts fail: still never an API
    let fetcher = MockFetcher::new()
        .with_failure("https://api.example.com", FetchFailure::Timeout)
        .with_failure("http://api.example.com", FetchFailure::Timeout);
    let stats = ProbeStats::new();

    let result = probe_http(
        &fetcher,
        dns("api.example.com"),
        &ApiHeuristics::default(),
        &stats,
    )
    .await;

    assert!(!result.accessible());
    assert!(!result.likely_api());
    assert!(result.http().is_none());
    assert_eq!(stats.get_count(ProbeOutcome::HttpTimeout), 2);
    assert_eq!(stats.get_count(ProbeOutcome::HttpUnreachable), 1);
}

#[tokio::test]
async fn test_url_and_header_signal_combined() {
    let fetcher = MockFetcher::new().with_response(
        "https://graphql.example.com",
        200,
        &[("Content-Type", "text/html"), ("X-API-Version", "2")],
    );

    let result = probe_http(
        &fetcher,
        dns("graphql.example.com"),
        &ApiHeuristics::default(),
        &ProbeStats::new(),
    )
    .await;

    assert!(result.likely_api());
}

#[tokio::test]
async fn test_reqwest_fetcher_against_local_server() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(401)
                .append_header("Content-Type", "application/json")
                .append_header("X-RateLimit-Limit", "100")
                .body("{}"),
        ),
    );

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client");
    let fetcher = ReqwestFetcher::new(Arc::new(client));

    let url = format!("http://{}/", server.addr());
    let response = fetcher.fetch(&url).await.expect("server answers");

    assert_eq!(response.status, 401);
    assert!(analyze_api_indicators(&response.headers, &url));
}

#[tokio::test]
async fn test_reqwest_fetcher_refused_connection() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let fetcher = ReqwestFetcher::new(Arc::new(reqwest::Client::new()));
    let result = fetcher.fetch(&format!("http://{}/", addr)).await;

    assert!(matches!(result, Err(FetchFailure::Connect(_))));
}
