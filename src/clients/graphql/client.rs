//! GraphQL client implementation.
//!
//! This module provides the [`GraphqlClient`] type for sending GraphQL
//! queries to a single endpoint.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::graphql::response::{classify, ResponseMode, SuccessBody};
use crate::clients::graphql::{GraphqlError, GraphqlResponse, QueryRequest, RawResponse};
use crate::clients::{HttpClient, HttpRequest, Transport};
use crate::config::ClientConfig;
use crate::error::ConfigError;

/// GraphQL client bound to one endpoint.
///
/// Provides `request` (interpreted result) and `raw_request` (full response)
/// for queries with optional variables. The client keeps its endpoint for
/// life; its headers can be changed between calls with
/// [`set_header`](Self::set_header) and [`set_headers`](Self::set_headers).
///
/// Each call shapes its HTTP request from the configuration as it is when the
/// call starts. Header setters take `&mut self`, so they cannot run while a
/// call borrowing the client is in flight.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync` whenever its transport is, which holds for
/// the default [`HttpClient`].
///
/// # Example
///
/// ```rust,ignore
/// use grafico_ql::GraphqlClient;
/// use serde_json::json;
///
/// let mut client = GraphqlClient::new("https://countries.trevorblades.com");
/// client.set_header("Authorization", "Bearer token");
///
/// // Simple query
/// let response = client.request(r#"{ country(code: "IT") { name } }"#, None).await?;
///
/// // Query with variables
/// let response = client
///     .request(
///         "query Country($code: ID!) { country(code: $code) { name } }",
///         Some(json!({ "code": "IT" })),
///     )
///     .await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient<T = HttpClient> {
    /// The GraphQL endpoint URL.
    endpoint: String,
    /// The live configuration.
    config: ClientConfig,
    /// The transport requests are sent through.
    transport: T,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient<HttpClient> {
    /// Creates a client with the default configuration (POST, no extra
    /// headers) and the reqwest transport.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_config(endpoint, ClientConfig::default())
    }

    /// Creates a client with the given configuration and the reqwest transport.
    #[must_use]
    pub fn with_config(endpoint: impl Into<String>, config: ClientConfig) -> Self {
        Self::with_transport(endpoint, config, HttpClient::new())
    }

    /// Creates a client from a loosely-typed options object.
    ///
    /// See [`ClientConfig::from_options`] for how the options are read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the options are invalid, including
    /// [`ConfigError::UnsupportedMethod`].
    pub fn from_options(endpoint: impl Into<String>, options: &Value) -> Result<Self, ConfigError> {
        Ok(Self::with_config(endpoint, ClientConfig::from_options(options)?))
    }
}

impl<T: Transport> GraphqlClient<T> {
    /// Creates a client that sends requests through `transport`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use async_trait::async_trait;
    /// use grafico_ql::{ClientConfig, GraphqlClient, HttpRequest, HttpResponse, Transport, TransportError};
    /// use std::collections::HashMap;
    ///
    /// struct Offline;
    ///
    /// #[async_trait]
    /// impl Transport for Offline {
    ///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
    ///         Err(TransportError::custom("offline"))
    ///     }
    /// }
    ///
    /// let client = GraphqlClient::with_transport("https://example.com/graphql", ClientConfig::default(), Offline);
    /// assert_eq!(client.endpoint(), "https://example.com/graphql");
    /// ```
    #[must_use]
    pub fn with_transport(endpoint: impl Into<String>, config: ClientConfig, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            config,
            transport,
        }
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sets a header for all subsequent calls.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.config = std::mem::take(&mut self.config).with_header(key, value);
        self
    }

    /// Replaces all headers for subsequent calls.
    pub fn set_headers(&mut self, headers: HashMap<String, String>) -> &mut Self {
        self.config = std::mem::take(&mut self.config).with_headers(headers);
        self
    }

    /// Sends a query and returns its `data`, `errors` and `extensions`.
    ///
    /// A response carrying GraphQL `errors` next to (or instead of) `data`
    /// is still `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the transport fails, the status is not
    /// 2xx, the body has neither `data` nor `errors`, or the body is not JSON.
    pub async fn request(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        self.execute(QueryRequest::new(query).with_variables(variables))
            .await
    }

    /// Sends a query and returns the whole decoded body with status and headers.
    ///
    /// # Errors
    ///
    /// Same as [`request`](Self::request); failure envelopes also carry the
    /// response headers.
    pub async fn raw_request(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<RawResponse, GraphqlError> {
        self.execute_raw(QueryRequest::new(query).with_variables(variables))
            .await
    }

    /// Sends a prepared [`QueryRequest`] in interpreted mode.
    ///
    /// Use this to pass per-call transport options.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn execute(&self, request: QueryRequest) -> Result<GraphqlResponse, GraphqlError> {
        self.dispatch(&request, ResponseMode::Interpreted)
            .await
            .map(SuccessBody::into_interpreted)
    }

    /// Sends a prepared [`QueryRequest`] in raw mode.
    ///
    /// # Errors
    ///
    /// See [`raw_request`](Self::raw_request).
    pub async fn execute_raw(&self, request: QueryRequest) -> Result<RawResponse, GraphqlError> {
        self.dispatch(&request, ResponseMode::Raw)
            .await
            .map(SuccessBody::into_raw)
    }

    async fn dispatch(
        &self,
        request: &QueryRequest,
        mode: ResponseMode,
    ) -> Result<SuccessBody, GraphqlError> {
        let http_request = HttpRequest::graphql(&self.endpoint, &self.config, request)?;

        tracing::debug!(
            "Sending GraphQL {} request to {}",
            http_request.method,
            http_request.url
        );

        let response = match self.transport.send(http_request).await {
            Ok(response) => response,
            Err(error) => return Err(GraphqlError::transport(error, request.clone())),
        };

        let status = response.status;
        let outcome = classify(response, request, mode);
        tracing::debug!(
            "GraphQL response from {} with status {} classified as {}",
            self.endpoint,
            status,
            if outcome.is_ok() { "success" } else { "failure" }
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponse, TransportError};
    use crate::config::RequestMethod;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records every request and answers with a fixed response.
    #[derive(Debug, Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<HttpRequest>>,
        fail: bool,
    }

    impl RecordingTransport {
        fn sent(&self) -> Vec<HttpRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.sent.lock().unwrap().push(request);
            if self.fail {
                return Err(TransportError::custom("network down"));
            }
            Ok(HttpResponse::new(200, HashMap::new(), r#"{"data":{"ok":true}}"#))
        }
    }

    fn client() -> GraphqlClient<RecordingTransport> {
        GraphqlClient::with_transport(
            "https://mock-api.com/graphql",
            ClientConfig::default(),
            RecordingTransport::default(),
        )
    }

    #[test]
    fn test_set_header_persists_across_calls() {
        let mut client = client();
        client.set_header("Authorization", "Bearer abc");

        tokio_test::block_on(async {
            client.request("{ a }", None).await.unwrap();
            client.request("{ b }", None).await.unwrap();
        });

        let sent = client.transport().sent();
        assert_eq!(sent.len(), 2);
        for request in sent {
            assert_eq!(request.header("Authorization"), Some("Bearer abc"));
            assert_eq!(request.header("Content-Type"), Some("application/json"));
        }
    }

    #[test]
    fn test_set_header_chains_and_overwrites() {
        let mut client = client();
        client
            .set_header("X-One", "1")
            .set_header("X-Two", "2")
            .set_header("X-One", "uno");

        assert_eq!(client.config().header("X-One"), Some("uno"));
        assert_eq!(client.config().header("X-Two"), Some("2"));
    }

    #[test]
    fn test_set_headers_replaces_all_headers() {
        let mut client = client();
        client.set_header("X-Old", "1");

        let mut headers = HashMap::new();
        headers.insert("X-New".to_string(), "2".to_string());
        client.set_headers(headers);

        assert!(client.config().header("X-Old").is_none());
        assert_eq!(client.config().header("X-New"), Some("2"));
    }

    #[test]
    fn test_implied_content_type_is_not_written_back() {
        let client = client();

        tokio_test::block_on(client.request("{ a }", None)).unwrap();

        assert!(client.config().headers().is_empty());
    }

    #[test]
    fn test_transport_failure_reports_sentinel_status() {
        let client = GraphqlClient::with_transport(
            "https://mock-api.com/graphql",
            ClientConfig::default(),
            RecordingTransport {
                fail: true,
                ..RecordingTransport::default()
            },
        );

        let error = tokio_test::block_on(client.request("{ a }", Some(json!({"v": 1})))).unwrap_err();

        assert!(matches!(error, GraphqlError::TransportFailure { .. }));
        let envelope = error.envelope().unwrap();
        assert_eq!(envelope.response.status, 900);
        assert_eq!(envelope.request.variables, Some(json!({"v": 1})));
    }

    #[test]
    fn test_get_client_sends_query_in_url() {
        let client = GraphqlClient::with_transport(
            "https://mock-api.com/graphql",
            ClientConfig::builder().method(RequestMethod::Get).build(),
            RecordingTransport::default(),
        );

        tokio_test::block_on(client.raw_request("{q}", None)).unwrap();

        let sent = client.transport().sent();
        assert_eq!(sent[0].method, RequestMethod::Get);
        assert_eq!(sent[0].url, "https://mock-api.com/graphql?query=%7Bq%7D");
        assert!(sent[0].body.is_none());
    }

    #[test]
    fn test_execute_passes_per_call_transport_options() {
        let client = GraphqlClient::with_transport(
            "https://mock-api.com/graphql",
            ClientConfig::builder().transport_option("mode", "cors").build(),
            RecordingTransport::default(),
        );

        let request = QueryRequest::new("{q}").with_transport_option("timeout", 250);
        tokio_test::block_on(client.execute(request)).unwrap();

        let sent = client.transport().sent();
        assert_eq!(sent[0].options["mode"], json!("cors"));
        assert_eq!(sent[0].options["timeout"], json!(250));
        assert!(client.config().transport_options().get("timeout").is_none());
    }

    #[test]
    fn test_from_options_rejects_unsupported_method() {
        let result = GraphqlClient::from_options("https://mock-api.com/graphql", &json!({"method": "PATCH"}));
        assert!(matches!(result, Err(ConfigError::UnsupportedMethod { .. })));
    }

    #[test]
    fn test_graphql_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphqlClient>();
        assert_send_sync::<GraphqlClient<RecordingTransport>>();
    }
}
