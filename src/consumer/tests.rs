//! Tests for the page consumer module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_body(next: &str, records: usize) -> Value {
    let records: Vec<Vec<String>> = (0..records)
        .map(|i| vec![i.to_string(), format!("name-{i}")])
        .collect();
    json!({
        "meta": {"next": next},
        "data": {
            "header": {"columns": [
                {"name": "id", "type": "int", "position": 0},
                {"name": "name", "type": "string", "position": 1}
            ]},
            "records": records
        }
    })
}

async fn mount_page(server: &MockServer, hash: &str, token: &str, next: &str, records: usize) {
    Mock::given(method("POST"))
        .and(path("/page"))
        .and(body_json(json!({"hash": hash, "token": token})))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(next, records)))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_page_unreached(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/page"))
        .and(body_json(json!({"hash": "h", "token": token})))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body("", 1)))
        .expect(0)
        .mount(server)
        .await;
}

fn consumer_for(server: &MockServer) -> PageConsumer {
    let config = ConsumerConfig::builder().base_url(server.uri()).build();
    PageConsumer::with_config(config).unwrap()
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_consumer_config_default() {
    let config = ConsumerConfig::default();
    assert_eq!(config.base_url, "http://localhost:8090");
    assert!(config.timeout.is_none());
    assert!(config.user_agent.starts_with("pagebench/"));
}

#[test]
fn test_consumer_config_builder() {
    let config = ConsumerConfig::builder()
        .base_url("http://proxy.internal:9000/")
        .timeout(Duration::from_secs(5))
        .user_agent("bench/1.0")
        .build();

    assert_eq!(config.base_url, "http://proxy.internal:9000/");
    assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    assert_eq!(config.user_agent, "bench/1.0");
    assert_eq!(config.page_url(), "http://proxy.internal:9000/page");
}

#[test]
fn test_consumer_rejects_relative_url() {
    let config = ConsumerConfig::builder().base_url("localhost-no-scheme").build();
    let err = PageConsumer::with_config(config).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

// ============================================================================
// Consumption Tests
// ============================================================================

#[test]
fn test_consumption_record_accumulates() {
    let mut consumption = Consumption::new();
    consumption.record(&PageFetch {
        next_token: "abc".to_string(),
        record_count: 3,
        request_duration: Duration::from_millis(10),
        decode_duration: Duration::from_millis(2),
    });
    consumption.record(&PageFetch {
        next_token: String::new(),
        record_count: 5,
        request_duration: Duration::from_millis(15),
        decode_duration: Duration::from_millis(4),
    });

    assert_eq!(consumption.page_count, 2);
    assert_eq!(consumption.record_counts, vec![3, 5]);
    assert_eq!(consumption.total_records(), 8);
    assert_eq!(consumption.total_request_duration, Duration::from_millis(25));
    assert_eq!(consumption.total_decode_duration, Duration::from_millis(6));
}

#[test]
fn test_page_fetch_last_page() {
    assert!(PageFetch::default().is_last_page());
    let page = PageFetch {
        next_token: "t".to_string(),
        ..PageFetch::default()
    };
    assert!(!page.is_last_page());
}

// ============================================================================
// fetch_page Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_page_posts_json_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/page"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"hash": "h1", "token": "t1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body("t2", 4)))
        .expect(1)
        .mount(&server)
        .await;

    let page = consumer_for(&server).fetch_page("h1", "t1").await.unwrap();

    assert_eq!(page.next_token, "t2");
    assert_eq!(page.record_count, 4);
    assert!(!page.is_last_page());
}

#[tokio::test]
async fn test_fetch_page_trims_trailing_slash() {
    let server = MockServer::start().await;
    mount_page(&server, "h", "t", "", 1).await;

    let config = ConsumerConfig::builder()
        .base_url(format!("{}/", server.uri()))
        .build();
    let consumer = PageConsumer::with_config(config).unwrap();

    let page = consumer.fetch_page("h", "t").await.unwrap();
    assert_eq!(page.record_count, 1);
}

#[tokio::test]
async fn test_fetch_page_counts_ragged_records() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"next": ""},
            "data": {
                "header": {"columns": [{"name": "id", "type": "int", "position": 0}]},
                "records": [["1"], ["2", "unexpected"], []]
            }
        })))
        .mount(&server)
        .await;

    let page = consumer_for(&server).fetch_page("h", "t").await.unwrap();
    assert_eq!(page.record_count, 3);
}

#[tokio::test]
async fn test_fetch_page_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = consumer_for(&server).fetch_page("h", "t").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_fetch_page_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(404).set_body_string("unknown hash"))
        .mount(&server)
        .await;

    let err = consumer_for(&server).fetch_page("h", "t").await.unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "unknown hash");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_page_connection_refused() {
    // Bind only to learn a free port, then release it
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let config = ConsumerConfig::builder()
        .base_url(format!("http://127.0.0.1:{port}"))
        .build();
    let consumer = PageConsumer::with_config(config).unwrap();

    let err = consumer.fetch_page("h", "t").await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert!(err.is_transport());
}

// ============================================================================
// fetch_all_pages Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_all_pages_follows_tokens() {
    let server = MockServer::start().await;
    mount_page(&server, "h", "first", "abc", 3).await;
    mount_page(&server, "h", "abc", "", 5).await;

    let consumption = consumer_for(&server)
        .fetch_all_pages("h", "first")
        .await
        .unwrap();

    assert_eq!(consumption.page_count, 2);
    assert_eq!(consumption.record_counts, vec![3, 5]);
    assert_eq!(consumption.total_records(), 8);
}

#[tokio::test]
async fn test_fetch_all_pages_many_pages() {
    let server = MockServer::start().await;
    let tokens = ["p0", "p1", "p2", "p3", "p4", "p5"];
    for (i, pair) in tokens.windows(2).enumerate() {
        mount_page(&server, "bulk", pair[0], pair[1], i + 1).await;
    }
    mount_page(&server, "bulk", "p5", "", 0).await;

    let consumption = consumer_for(&server)
        .fetch_all_pages("bulk", "p0")
        .await
        .unwrap();

    assert_eq!(consumption.page_count, tokens.len());
    assert_eq!(consumption.record_counts, vec![1, 2, 3, 4, 5, 0]);
    assert_eq!(consumption.record_counts.len(), consumption.page_count);
    assert_eq!(consumption.total_records(), 15);
}

#[tokio::test]
async fn test_fetch_all_pages_empty_first_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body("", 1)))
        .expect(0)
        .mount(&server)
        .await;

    let consumption = consumer_for(&server).fetch_all_pages("h", "").await.unwrap();

    assert_eq!(consumption, Consumption::default());
    assert_eq!(consumption.total_request_duration, Duration::ZERO);
    assert_eq!(consumption.total_decode_duration, Duration::ZERO);
}

#[tokio::test]
async fn test_fetch_all_pages_stops_at_first_error() {
    let server = MockServer::start().await;
    mount_page(&server, "h", "t0", "t1", 2).await;

    Mock::given(method("POST"))
        .and(path("/page"))
        .and(body_json(json!({"hash": "h", "token": "t1"})))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    // Never reached
    mount_page_unreached(&server, "t2").await;

    let err = consumer_for(&server)
        .fetch_all_pages("h", "t0")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_fetch_all_pages_malformed_first_page() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let result = consumer_for(&server).fetch_all_pages("h", "t0").await;
    assert!(matches!(result, Err(Error::Decode(_))));
}
