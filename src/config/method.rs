//! HTTP method selection for GraphQL requests.
//!
//! This module provides the [`RequestMethod`] enum. GraphQL over HTTP only
//! needs two transmissions: a JSON body sent with POST, or a query string
//! sent with GET.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// HTTP method used to transmit a GraphQL query.
///
/// Parsing is case-insensitive; anything other than `get` or `post` is
/// rejected with [`ConfigError::UnsupportedMethod`].
///
/// # Example
///
/// ```rust
/// use grafico_ql::RequestMethod;
///
/// let method: RequestMethod = "get".parse().unwrap();
/// assert_eq!(method, RequestMethod::Get);
/// assert_eq!(method.to_string(), "GET");
///
/// assert!("DELETE".parse::<RequestMethod>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    /// Query and variables are appended to the URL; no body is sent.
    Get,
    /// Query and variables are sent as a JSON body.
    #[default]
    Post,
}

impl RequestMethod {
    /// Returns the upper-case method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }

    /// Returns the `Content-Type` header implied by this method.
    ///
    /// POST bodies are JSON; GET requests carry no body and are tagged as
    /// plain text.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Get => "text/plain",
            Self::Post => "application/json",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            _ => Err(ConfigError::UnsupportedMethod {
                method: s.to_string(),
            }),
        }
    }
}
