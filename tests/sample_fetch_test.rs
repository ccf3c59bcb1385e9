//! Integration tests for the startup sample fetch.
//!
//! Runs the real reqwest transport against a wiremock server and drives
//! the fetch result through the app's message channel, covering the
//! success path and every absorbed failure path.

use std::sync::Arc;

use sampleview::api::{ApiError, SampleApiClient};
use sampleview::app::App;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_payload(n: usize) -> serde_json::Value {
    let data: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            serde_json::json!({
                "concentration": i as f64 * 0.5,
                "timestamps": format!("2024-03-{:02}T10:00:00Z", i + 1),
            })
        })
        .collect();
    serde_json::json!({ "data": data })
}

async fn server_with_samples(n: usize) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sample"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_payload(n)))
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_fetch_samples_success() {
    let server = server_with_samples(12).await;

    let client = SampleApiClient::with_base_url(server.uri());
    let records = client.fetch_samples().await.unwrap();

    assert_eq!(records.len(), 12);
    // Fetch order is preserved, not re-sorted
    assert_eq!(records[0].concentration, 0.0);
    assert_eq!(records[11].concentration, 5.5);
}

#[tokio::test]
async fn test_fetch_samples_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sample"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = SampleApiClient::with_base_url(server.uri());
    let err = client.fetch_samples().await.unwrap_err();

    match err {
        ApiError::ServerError { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("internal error"));
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_samples_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sample"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "rows": [] })),
        )
        .mount(&server)
        .await;

    let client = SampleApiClient::with_base_url(server.uri());
    let err = client.fetch_samples().await.unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[tokio::test]
async fn test_fetch_samples_connection_refused() {
    // Bind a server, record its address, then shut it down
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = SampleApiClient::with_base_url(uri);
    let err = client.fetch_samples().await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
}

#[tokio::test]
async fn test_app_commits_fetched_collection() {
    let server = server_with_samples(12).await;

    let client = Arc::new(SampleApiClient::with_base_url(server.uri()));
    let mut app = App::with_client(client, 5);
    let mut rx = app.message_rx.take().unwrap();

    app.load_samples();
    let msg = rx.recv().await.unwrap();
    app.handle_message(msg);

    assert_eq!(app.records().len(), 12);
    assert!(!app.is_loading());

    let view = app.page_view();
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.rows.len(), 5);
}

#[tokio::test]
async fn test_app_absorbs_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sample"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = Arc::new(SampleApiClient::with_base_url(server.uri()));
    let mut app = App::with_client(client, 5);
    let mut rx = app.message_rx.take().unwrap();

    app.load_samples();
    let msg = rx.recv().await.unwrap();
    // Committing the failure must not panic or surface an error
    app.handle_message(msg);

    // Collection untouched, loading flag keeps its call-time value
    assert!(app.records().is_empty());
    assert!(app.is_loading());
    assert_eq!(app.page_view().total_pages, 0);

    // The one activation produced exactly one message
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_fetch_is_issued_exactly_once() {
    // The .expect(1) on the mock asserts the app never refetches
    let server = server_with_samples(7).await;

    let client = Arc::new(SampleApiClient::with_base_url(server.uri()));
    let mut app = App::with_client(client, 5);
    let mut rx = app.message_rx.take().unwrap();

    app.load_samples();
    let msg = rx.recv().await.unwrap();
    app.handle_message(msg);

    // Page navigation must not trigger another request
    app.go_next();
    app.go_prev();
    app.go_to_page(2);
    assert_eq!(app.page().current_page(), 2);

    server.verify().await;
}
