//! Integration tests for the default reqwest transport.
//!
//! These tests drive [`HttpClient`] directly with hand-built requests and
//! check what reaches the server and what comes back.

use std::collections::HashMap;

use grafico_ql::{HttpClient, HttpRequest, RequestMethod, Transport, TransportError, SDK_VERSION};
use serde_json::{json, Map};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(method: RequestMethod, url: String, body: Option<&str>) -> HttpRequest {
    HttpRequest {
        method,
        url,
        headers: HashMap::new(),
        body: body.map(str::to_string),
        options: Map::new(),
    }
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test]
async fn test_post_sends_body_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("x-custom", "yes"))
        .and(body_string(r#"{"query":"{ a }"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let mut req = request(
        RequestMethod::Post,
        format!("{}/graphql", server.uri()),
        Some(r#"{"query":"{ a }"}"#),
    );
    req.headers.insert("X-Custom".to_string(), "yes".to_string());

    let response = HttpClient::new().send(req).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_get_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graphql"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = HttpClient::new()
        .send(request(RequestMethod::Get, format!("{}/graphql?query=x", server.uri()), None))
        .await
        .unwrap();

    assert_eq!(response.status, 204);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_user_agent_is_sent_by_default() {
    let server = MockServer::start().await;
    let user_agent = format!(
        "grafico-ql v{SDK_VERSION} | Rust {}",
        env!("CARGO_PKG_RUST_VERSION")
    );
    Mock::given(header("user-agent", user_agent.as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    HttpClient::new()
        .send(request(RequestMethod::Post, server.uri(), None))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_request_user_agent_overrides_default() {
    let server = MockServer::start().await;
    Mock::given(header("user-agent", "my-app/1.0"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut req = request(RequestMethod::Post, server.uri(), None);
    req.headers.insert("user-agent".to_string(), "my-app/1.0".to_string());

    HttpClient::new().send(req).await.unwrap();
}

// ============================================================================
// Responses
// ============================================================================

#[tokio::test]
async fn test_error_status_is_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(503)
                .insert_header("retry-after", "10")
                .set_body_raw(r#"{"error":"down"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let response = HttpClient::new()
        .send(request(RequestMethod::Post, format!("{}/graphql", server.uri()), None))
        .await
        .unwrap();

    assert_eq!(response.status, 503);
    assert!(!response.is_ok());
    assert!(response.is_json());
    assert_eq!(response.header("Retry-After"), Some("10"));
    assert_eq!(response.body, r#"{"error":"down"}"#);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let result = HttpClient::new()
        .send(request(RequestMethod::Post, "http://127.0.0.1:1/graphql".to_string(), None))
        .await;

    assert!(matches!(result, Err(TransportError::Network(_))));
}

#[tokio::test]
async fn test_timeout_option_bounds_the_request() {
    let server = MockServer::start().await;
    Mock::given(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(2)))
        .mount(&server)
        .await;

    let mut req = request(RequestMethod::Post, format!("{}/graphql", server.uri()), None);
    req.options.insert("timeout".to_string(), json!(50));
    req.options.insert("credentials".to_string(), json!("include"));

    let result = HttpClient::new().send(req).await;

    match result {
        Err(TransportError::Network(e)) => assert!(e.is_timeout()),
        other => panic!("expected a timeout, got {other:?}"),
    }
}
