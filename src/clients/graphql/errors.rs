//! GraphQL-specific error types.
//!
//! Every failure after a request has been shaped carries the request that
//! was sent. Transport and HTTP/GraphQL failures also carry a
//! [`FailureEnvelope`] describing what came back.
//!
//! - [`GraphqlError::Encode`]: The query or variables could not be serialized
//! - [`GraphqlError::TransportFailure`]: No response at all (status 900)
//! - [`GraphqlError::GraphqlFailure`]: Non-2xx status, or a body with neither
//!   `data` nor `errors`
//! - [`GraphqlError::BodyDecodeFailure`]: The body was not valid JSON
//!
//! # Example
//!
//! ```rust,ignore
//! use grafico_ql::GraphqlError;
//!
//! match client.request("{ viewer { id } }", None).await {
//!     Ok(response) => println!("Data: {:?}", response.data),
//!     Err(GraphqlError::BodyDecodeFailure(e)) => println!("Bad body: {}", e.body),
//!     Err(error) => {
//!         if let Some(envelope) = error.envelope() {
//!             println!("Failed with {}: {:?}", envelope.response.status, envelope.response.body);
//!         }
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::clients::errors::TransportError;
use crate::clients::graphql::QueryRequest;

/// Synthetic status reported when the transport produced no response.
pub const TRANSPORT_FAILURE_STATUS: u16 = 900;

/// What came back from a failed call.
///
/// Serializes as a flat object: the body fields plus `status`, and `headers`
/// for raw-mode calls.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FailureResponse {
    /// The HTTP status, or [`TRANSPORT_FAILURE_STATUS`].
    pub status: u16,
    /// Response headers; only set for raw-mode calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, Vec<String>>>,
    /// The decoded body, or `{ "error": ... }` wrapping a non-object body.
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl FailureResponse {
    /// Returns the `error` field, if present.
    #[must_use]
    pub fn error(&self) -> Option<&Value> {
        self.body.get("error")
    }
}

/// A failed call: what came back and what was sent.
#[derive(Clone, Debug, PartialEq, Serialize, Error)]
#[error("GraphQL request failed with status {}", .response.status)]
pub struct FailureEnvelope {
    /// What came back.
    pub response: FailureResponse,
    /// What was sent.
    pub request: QueryRequest,
}

/// A response body that could not be decoded as JSON.
#[derive(Debug, Error)]
#[error("Failed to decode response body (status {status}): {source}")]
pub struct BodyDecodeError {
    /// The HTTP status of the response.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw body text.
    pub body: String,
    /// What was sent.
    pub request: QueryRequest,
    /// The JSON parser error.
    #[source]
    pub source: serde_json::Error,
}

/// Error type for GraphQL requests.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The request could not be serialized.
    #[error("Failed to encode GraphQL request: {0}")]
    Encode(#[from] serde_json::Error),

    /// The transport failed before producing a response.
    #[error("{envelope}: {source}")]
    TransportFailure {
        /// Envelope with [`TRANSPORT_FAILURE_STATUS`] and the transport message as `error`.
        envelope: FailureEnvelope,
        /// The underlying transport error.
        #[source]
        source: TransportError,
    },

    /// The server answered, but not with a usable GraphQL result.
    #[error(transparent)]
    GraphqlFailure(FailureEnvelope),

    /// The response body was not valid JSON.
    #[error(transparent)]
    BodyDecodeFailure(BodyDecodeError),
}

impl GraphqlError {
    /// Returns the failure envelope, for transport and GraphQL failures.
    #[must_use]
    pub const fn envelope(&self) -> Option<&FailureEnvelope> {
        match self {
            Self::TransportFailure { envelope, .. } | Self::GraphqlFailure(envelope) => {
                Some(envelope)
            }
            Self::Encode(_) | Self::BodyDecodeFailure(_) => None,
        }
    }

    /// Returns the HTTP status associated with this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::TransportFailure { envelope, .. } | Self::GraphqlFailure(envelope) => {
                Some(envelope.response.status)
            }
            Self::BodyDecodeFailure(error) => Some(error.status),
            Self::Encode(_) => None,
        }
    }

    pub(crate) fn transport(source: TransportError, request: QueryRequest) -> Self {
        let mut body = Map::new();
        body.insert("error".to_string(), Value::String(source.to_string()));

        Self::TransportFailure {
            envelope: FailureEnvelope {
                response: FailureResponse {
                    status: TRANSPORT_FAILURE_STATUS,
                    headers: None,
                    body,
                },
                request,
            },
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transport_failure_uses_sentinel_status() {
        let error = GraphqlError::transport(
            TransportError::custom("connection refused"),
            QueryRequest::new("{q}"),
        );

        assert_eq!(error.status(), Some(TRANSPORT_FAILURE_STATUS));
        let envelope = error.envelope().unwrap();
        assert_eq!(
            envelope.response.error(),
            Some(&json!("Transport error: connection refused"))
        );
        assert_eq!(envelope.request.query, "{q}");
    }

    #[test]
    fn test_failure_envelope_serializes_flat() {
        let mut body = Map::new();
        body.insert("error".to_string(), json!(""));
        let envelope = FailureEnvelope {
            response: FailureResponse {
                status: 500,
                headers: None,
                body,
            },
            request: QueryRequest::new("{q}").with_variables(json!({"v": 1})),
        };

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "response": {"status": 500, "error": ""},
                "request": {"query": "{q}", "variables": {"v": 1}}
            })
        );
    }

    #[test]
    fn test_error_display_is_informative() {
        let error = GraphqlError::transport(TransportError::custom("timed out"), QueryRequest::new("{q}"));
        let display = error.to_string();

        assert!(display.contains("900"));
        assert!(display.contains("timed out"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error =
            &GraphqlError::transport(TransportError::custom("x"), QueryRequest::new("{q}"));
        let _ = error;
    }
}
