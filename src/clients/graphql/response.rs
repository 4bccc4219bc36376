//! Response classification for GraphQL calls.
//!
//! A transport response is decoded and then sorted into success (including
//! partial success with GraphQL `errors`) or failure. Successful bodies are
//! shaped into a [`GraphqlResponse`] (interpreted mode) or a [`RawResponse`]
//! (raw mode).
//!
//! # Decoding
//!
//! Bodies are always parsed as JSON, whatever the `Content-Type` says. An
//! empty body counts as absent. Invalid JSON is a
//! [`GraphqlError::BodyDecodeFailure`].

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::graphql::errors::{BodyDecodeError, FailureEnvelope, FailureResponse};
use crate::clients::graphql::{GraphqlError, QueryRequest};
use crate::clients::http_response::HttpResponse;

/// How a successful response is shaped for the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseMode {
    /// Only `data`, `errors` and `extensions` are kept.
    #[default]
    Interpreted,
    /// The whole body is kept, plus `status` and `headers`.
    Raw,
}

/// The GraphQL result of an interpreted-mode call.
///
/// A field is `Some` only when the server sent it: `data` whenever the key
/// is present (even as `null`), `errors` when it is non-empty, and
/// `extensions` when it is an object.
///
/// # Example
///
/// ```rust,ignore
/// let response = client.request("{ viewer { id } }", None).await?;
/// if let Some(errors) = &response.errors {
///     println!("Partial success: {errors}");
/// }
/// println!("Viewer: {}", response.data.unwrap_or_default()["viewer"]["id"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GraphqlResponse {
    /// The `data` payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// The `errors` array of a partial success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
    /// The `extensions` object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
}

impl GraphqlResponse {
    fn from_body(mut body: Map<String, Value>) -> Self {
        Self {
            data: body.remove("data"),
            errors: body.remove("errors").filter(is_truthy),
            extensions: match body.remove("extensions") {
                Some(Value::Object(extensions)) => Some(extensions),
                _ => None,
            },
        }
    }
}

/// The full result of a raw-mode call.
///
/// Serializes as the decoded body with `status` and `headers` injected.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers keyed by lower-case name.
    pub headers: HashMap<String, Vec<String>>,
    /// Every other top-level field of the decoded body.
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl RawResponse {
    /// Returns a top-level body field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// Returns the `data` field.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.get("data")
    }

    /// Returns the `errors` field.
    #[must_use]
    pub fn errors(&self) -> Option<&Value> {
        self.get("errors")
    }

    /// Returns the first value of a response header, matching case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// A response that classified as a success, not yet shaped.
#[derive(Debug)]
pub(crate) struct SuccessBody {
    status: u16,
    headers: HashMap<String, Vec<String>>,
    body: Map<String, Value>,
}

impl SuccessBody {
    pub(crate) fn into_interpreted(self) -> GraphqlResponse {
        GraphqlResponse::from_body(self.body)
    }

    pub(crate) fn into_raw(mut self) -> RawResponse {
        self.body.remove("status");
        self.body.remove("headers");
        RawResponse {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

/// Decodes and classifies a transport response.
///
/// Success requires a 2xx status and a JSON object body with a truthy `data`
/// or `errors` field. Everything else fails with an envelope carrying the
/// status, the decoded body (a non-object body is wrapped as `error`) and
/// `request`; raw mode also attaches the response headers.
pub(crate) fn classify(
    response: HttpResponse,
    request: &QueryRequest,
    mode: ResponseMode,
) -> Result<SuccessBody, GraphqlError> {
    if !response.is_json() && !response.body.trim().is_empty() {
        tracing::debug!(
            "Response content type is {:?}, decoding body as JSON anyway",
            response.header("content-type")
        );
    }

    let ok = response.is_ok();
    let HttpResponse {
        status,
        headers,
        body: text,
    } = response;

    let decoded = match decode_body(&text) {
        Ok(decoded) => decoded,
        Err(source) => {
            return Err(GraphqlError::BodyDecodeFailure(BodyDecodeError {
                status,
                headers,
                body: text,
                request: request.clone(),
                source,
            }))
        }
    };

    match decoded {
        Some(Value::Object(body)) if ok && is_graphql_result(&body) => Ok(SuccessBody {
            status,
            headers,
            body,
        }),
        other => {
            let mut body = failure_body(other);
            body.remove("status");
            let headers = match mode {
                ResponseMode::Raw => {
                    body.remove("headers");
                    Some(headers)
                }
                ResponseMode::Interpreted => None,
            };

            Err(GraphqlError::GraphqlFailure(FailureEnvelope {
                response: FailureResponse {
                    status,
                    headers,
                    body,
                },
                request: request.clone(),
            }))
        }
    }
}

fn decode_body(text: &str) -> Result<Option<Value>, serde_json::Error> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text).map(Some)
}

fn is_graphql_result(body: &Map<String, Value>) -> bool {
    body.get("data").is_some_and(is_truthy) || body.get("errors").is_some_and(is_truthy)
}

fn failure_body(decoded: Option<Value>) -> Map<String, Value> {
    match decoded {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(body)) => body,
        Some(other) => {
            let mut body = Map::new();
            body.insert("error".to_string(), other);
            body
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
