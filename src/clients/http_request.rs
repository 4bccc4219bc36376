//! Transport-ready HTTP request descriptors.
//!
//! This module provides the [`HttpRequest`] type handed to a
//! [`Transport`](crate::Transport), and the GraphQL request shaping that
//! produces it from a [`QueryRequest`] and a [`ClientConfig`].

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::clients::graphql::QueryRequest;
use crate::config::{merge, ClientConfig, RequestMethod};

/// An HTTP request ready to be sent by a transport.
///
/// # Example
///
/// ```rust
/// use grafico_ql::{ClientConfig, HttpRequest, QueryRequest, RequestMethod};
///
/// let config = ClientConfig::builder().method(RequestMethod::Get).build();
/// let request = HttpRequest::graphql(
///     "https://example.com/graphql?a=b",
///     &config,
///     &QueryRequest::new("{q}"),
/// )
/// .unwrap();
///
/// assert_eq!(request.url, "https://example.com/graphql?a=b&query=%7Bq%7D");
/// assert!(request.body.is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: RequestMethod,
    /// The full target URL, including any query string.
    pub url: String,
    /// Headers to send.
    pub headers: HashMap<String, String>,
    /// The serialized body, if any.
    pub body: Option<String>,
    /// Transport options for this request.
    pub options: Map<String, Value>,
}

impl HttpRequest {
    /// Shapes a GraphQL query into an HTTP request for `endpoint`.
    ///
    /// - POST: `Content-Type: application/json`, body
    ///   `{"query": ..., "variables": ...}` with `variables` omitted when not
    ///   supplied, URL unchanged.
    /// - GET: `Content-Type: text/plain`, no body, `query` (and `variables` as
    ///   JSON, when supplied) percent-encoded into the URL. The first
    ///   parameter is joined with `?`, or `&` if the endpoint already has a
    ///   query string.
    ///
    /// The implied `Content-Type` replaces any configured one. Transport
    /// options are the configuration's merged with the request's.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the request cannot be serialized.
    pub fn graphql(
        endpoint: &str,
        config: &ClientConfig,
        request: &QueryRequest,
    ) -> Result<Self, serde_json::Error> {
        let method = config.method();

        let mut headers = config.headers().clone();
        headers.retain(|key, _| !key.eq_ignore_ascii_case("content-type"));
        headers.insert(
            "Content-Type".to_string(),
            method.content_type().to_string(),
        );

        let (url, body) = match method {
            RequestMethod::Post => (endpoint.to_string(), Some(serde_json::to_string(request)?)),
            RequestMethod::Get => (Self::query_url(endpoint, request)?, None),
        };

        Ok(Self {
            method,
            url,
            headers,
            body,
            options: merge(config.transport_options(), &request.transport_options),
        })
    }

    fn query_url(endpoint: &str, request: &QueryRequest) -> Result<String, serde_json::Error> {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        let mut url = format!(
            "{endpoint}{separator}query={}",
            urlencoding::encode(&request.query)
        );

        if let Some(variables) = &request.variables {
            let encoded = serde_json::to_string(variables)?;
            url.push_str("&variables=");
            url.push_str(&urlencoding::encode(&encoded));
        }

        Ok(url)
    }

    /// Returns a header value, matching the key case-insensitively.
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }
}
