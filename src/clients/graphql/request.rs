//! The per-call GraphQL request value.

use serde::Serialize;
use serde_json::{Map, Value};

/// A GraphQL query with its optional variables.
///
/// Serializes to exactly the JSON body sent for POST requests: `query`
/// first, then `variables` (omitted entirely when not supplied). Per-call
/// transport options are carried alongside but never serialized.
///
/// # Example
///
/// ```rust
/// use grafico_ql::QueryRequest;
/// use serde_json::json;
///
/// let request = QueryRequest::new("{ viewer { id } }").with_variables(json!({"v": 1}));
/// assert_eq!(
///     serde_json::to_string(&request).unwrap(),
///     r#"{"query":"{ viewer { id } }","variables":{"v":1}}"#
/// );
///
/// let bare = QueryRequest::new("{q}");
/// assert_eq!(serde_json::to_string(&bare).unwrap(), r#"{"query":"{q}"}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QueryRequest {
    /// The GraphQL document.
    pub query: String,
    /// Variables for the document, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    /// Transport options merged over the client's for this call only.
    #[serde(skip)]
    pub transport_options: Map<String, Value>,
}

impl QueryRequest {
    /// Creates a request without variables.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Sets the variables. `null` counts as no variables.
    #[must_use]
    pub fn with_variables(mut self, variables: impl Into<Option<Value>>) -> Self {
        self.variables = variables.into().filter(|v| !v.is_null());
        self
    }

    /// Adds a transport option for this call.
    #[must_use]
    pub fn with_transport_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.transport_options.insert(key.into(), value.into());
        self
    }
}
