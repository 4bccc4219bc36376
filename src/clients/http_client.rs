//! Default reqwest-backed transport.
//!
//! This module provides the [`HttpClient`] type, the [`Transport`] used by
//! [`GraphqlClient::new`](crate::GraphqlClient::new) and the module-level
//! shortcuts.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::RequestMethod;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Transport option holding a per-request timeout in milliseconds.
pub const TIMEOUT_OPTION: &str = "timeout";

/// HTTP transport built on [`reqwest`].
///
/// The transport:
/// - adds a `User-Agent` default header (request headers take precedence)
/// - applies the [`TIMEOUT_OPTION`] transport option, when it is a number of
///   milliseconds
/// - ignores every other transport option
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, and cloning it shares the underlying
/// connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use grafico_ql::{ClientConfig, GraphqlClient, HttpClient};
///
/// let transport = HttpClient::from_client(
///     reqwest::Client::builder().gzip(true).build()?,
/// );
/// let client = GraphqlClient::with_transport(
///     "https://countries.trevorblades.com",
///     ClientConfig::default(),
///     transport,
/// );
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new transport with a rustls-backed reqwest client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");
        Self::from_client(client)
    }

    /// Creates a transport around an existing reqwest client.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("grafico-ql v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this transport.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Merges default headers with request headers, request headers winning
    /// regardless of case.
    fn merged_headers(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers: HashMap<String, String> = self
            .default_headers
            .iter()
            .filter(|(name, _)| request.header(name).is_none())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        headers.extend(request.headers.clone());
        headers
    }

    /// Reads the timeout transport option.
    fn request_timeout(options: &Map<String, Value>) -> Option<Duration> {
        options
            .get(TIMEOUT_OPTION)
            .and_then(Value::as_u64)
            .map(Duration::from_millis)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req_builder = match request.method {
            RequestMethod::Get => self.client.get(&request.url),
            RequestMethod::Post => self.client.post(&request.url),
        };

        for (key, value) in &self.merged_headers(&request) {
            req_builder = req_builder.header(key, value);
        }

        if let Some(timeout) = Self::request_timeout(&request.options) {
            req_builder = req_builder.timeout(timeout);
        }

        let ignored: Vec<&str> = request
            .options
            .keys()
            .map(String::as_str)
            .filter(|key| *key != TIMEOUT_OPTION)
            .collect();
        if !ignored.is_empty() {
            tracing::debug!(
                "reqwest transport ignoring unsupported options: {}",
                ignored.join(", ")
            );
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(status, headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_with_headers(headers: &[(&str, &str)]) -> HttpRequest {
        HttpRequest {
            method: RequestMethod::Post,
            url: "http://localhost/graphql".to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            body: None,
            options: Map::new(),
        }
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("grafico-ql v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_request_headers_override_defaults_case_insensitively() {
        let client = HttpClient::new();
        let request = request_with_headers(&[("user-agent", "custom/1.0")]);

        let headers = client.merged_headers(&request);

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("user-agent"), Some(&"custom/1.0".to_string()));
    }

    #[test]
    fn test_default_headers_kept_when_not_overridden() {
        let client = HttpClient::new();
        let request = request_with_headers(&[("X-Custom", "1")]);

        let headers = client.merged_headers(&request);

        assert!(headers.contains_key("User-Agent"));
        assert_eq!(headers.get("X-Custom"), Some(&"1".to_string()));
    }

    #[test]
    fn test_timeout_option_is_milliseconds() {
        let options = json!({"timeout": 1500}).as_object().cloned().unwrap();
        assert_eq!(
            HttpClient::request_timeout(&options),
            Some(Duration::from_millis(1500))
        );

        let options = json!({"timeout": "soon"}).as_object().cloned().unwrap();
        assert!(HttpClient::request_timeout(&options).is_none());
        assert!(HttpClient::request_timeout(&Map::new()).is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
