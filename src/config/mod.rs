//! Configuration types for the GraphQL client.
//!
//! This module provides the configuration a [`GraphqlClient`](crate::GraphqlClient)
//! sends every request with.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: Immutable configuration value (method, headers, transport options)
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`RequestMethod`]: GET or POST transmission of the query
//! - [`merge`]: The deep merge used to compose configuration with overrides
//!
//! # Example
//!
//! ```rust
//! use grafico_ql::{ClientConfig, RequestMethod};
//!
//! let config = ClientConfig::builder()
//!     .method(RequestMethod::Get)
//!     .header("Authorization", "Bearer token")
//!     .build();
//!
//! assert_eq!(config.method(), RequestMethod::Get);
//! assert_eq!(config.header("Authorization"), Some("Bearer token"));
//! ```

mod merge;
mod method;

pub use merge::merge;
pub use method::RequestMethod;

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Configuration for a GraphQL client.
///
/// Holds the HTTP method, the headers sent with every request, and free-form
/// transport options that are handed to the [`Transport`](crate::Transport)
/// untouched (for the default transport, see
/// [`HttpClient`](crate::HttpClient) for the options it understands).
///
/// `ClientConfig` is a value: the `with_*` methods return a new configuration
/// and never modify the receiver.
///
/// # Defaults
///
/// - `method`: POST
/// - `headers`: empty
/// - `transport_options`: empty
///
/// The `Content-Type` header is always derived from the method at request
/// time, whatever the configured headers say.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientConfig {
    method: RequestMethod,
    headers: HashMap<String, String>,
    transport_options: Map<String, Value>,
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Builds a configuration from a loosely-typed options object.
    ///
    /// The options are merged over the defaults `{"method": "POST", "headers": {}}`
    /// with [`merge`]. `method` is parsed case-insensitively, `headers` must be
    /// an object of scalar values, and every other key becomes a transport
    /// option. `null` yields the default configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnsupportedMethod`] if `method` is neither GET nor POST
    /// - [`ConfigError::InvalidOptions`] if `options` is not an object or
    ///   `method` is not a string
    /// - [`ConfigError::InvalidHeaderValue`] if a header value is an array,
    ///   object or `null`
    ///
    /// # Example
    ///
    /// ```rust
    /// use grafico_ql::{ClientConfig, RequestMethod};
    /// use serde_json::json;
    ///
    /// let config = ClientConfig::from_options(&json!({
    ///     "method": "get",
    ///     "headers": {"X-Api-Key": "secret"},
    ///     "timeout": 5000
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(config.method(), RequestMethod::Get);
    /// assert_eq!(config.header("X-Api-Key"), Some("secret"));
    /// assert_eq!(config.transport_options()["timeout"], json!(5000));
    /// ```
    pub fn from_options(options: &Value) -> Result<Self, ConfigError> {
        let options = match options {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(ConfigError::InvalidOptions {
                    reason: format!("expected an object, got {}", json_kind(other)),
                })
            }
        };

        let mut defaults = Map::new();
        defaults.insert(
            "method".to_string(),
            Value::String(RequestMethod::default().to_string()),
        );
        defaults.insert("headers".to_string(), Value::Object(Map::new()));

        let mut config = Self::default();
        for (key, value) in merge(&defaults, options) {
            match key.as_str() {
                "method" => {
                    let method = value.as_str().ok_or_else(|| ConfigError::InvalidOptions {
                        reason: format!("method must be a string, got {}", json_kind(&value)),
                    })?;
                    config.method = method.parse()?;
                }
                "headers" => config.headers = parse_headers(&value)?,
                _ => {
                    config.transport_options.insert(key, value);
                }
            }
        }

        Ok(config)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> RequestMethod {
        self.method
    }

    /// Returns the configured headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns a single configured header value.
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Returns the transport options.
    #[must_use]
    pub const fn transport_options(&self) -> &Map<String, Value> {
        &self.transport_options
    }

    /// Returns a copy of this configuration using `method`.
    #[must_use]
    pub fn with_method(mut self, method: RequestMethod) -> Self {
        self.method = method;
        self
    }

    /// Returns a copy of this configuration with one header set.
    ///
    /// An existing header with the same key is overwritten.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Returns a copy of this configuration whose headers are exactly `headers`.
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Returns a copy of this configuration with `options` merged into the
    /// transport options.
    #[must_use]
    pub fn with_transport_options(mut self, options: &Map<String, Value>) -> Self {
        self.transport_options = merge(&self.transport_options, options);
        self
    }
}

fn parse_headers(value: &Value) -> Result<HashMap<String, String>, ConfigError> {
    let Some(map) = value.as_object() else {
        return Err(ConfigError::InvalidOptions {
            reason: format!("headers must be an object, got {}", json_kind(value)),
        });
    };

    map.iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return Err(ConfigError::InvalidHeaderValue { key: key.clone() }),
            };
            Ok((key.clone(), value))
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Builder for constructing [`ClientConfig`] instances.
///
/// # Example
///
/// ```rust
/// use grafico_ql::{ClientConfig, RequestMethod};
///
/// let config = ClientConfig::builder()
///     .method(RequestMethod::Post)
///     .header("X-Request-Source", "docs")
///     .transport_option("timeout", 2_000)
///     .build();
///
/// assert_eq!(config.transport_options()["timeout"], 2_000);
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    method: Option<RequestMethod>,
    headers: HashMap<String, String>,
    transport_options: Map<String, Value>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method (default: POST).
    #[must_use]
    pub const fn method(mut self, method: RequestMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets all headers at once, replacing any added so far.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a single transport option.
    #[must_use]
    pub fn transport_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.transport_options.insert(key.into(), value.into());
        self
    }

    /// Builds the [`ClientConfig`].
    #[must_use]
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            method: self.method.unwrap_or_default(),
            headers: self.headers,
            transport_options: self.transport_options,
        }
    }
}
