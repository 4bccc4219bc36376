//! Error types for client configuration.
//!
//! This module contains the errors raised while building a
//! [`ClientConfig`](crate::ClientConfig). Request-time failures live in
//! [`GraphqlError`](crate::GraphqlError).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so an
//! invalid method or malformed options object is rejected before any request
//! is sent.
//!
//! # Example
//!
//! ```rust
//! use grafico_ql::{ConfigError, RequestMethod};
//!
//! let result = "PATCH".parse::<RequestMethod>();
//! assert!(matches!(result, Err(ConfigError::UnsupportedMethod { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The HTTP method is neither GET nor POST.
    #[error("Invalid method ({method}). Use method GET or POST!")]
    UnsupportedMethod {
        /// The method that was provided.
        method: String,
    },

    /// The options value could not be interpreted as a configuration.
    #[error("Invalid client options: {reason}")]
    InvalidOptions {
        /// Why the options were rejected.
        reason: String,
    },

    /// A header value in the options object is not a string, number or boolean.
    #[error("Invalid value for header '{key}'. Header values must be strings.")]
    InvalidHeaderValue {
        /// The header whose value was rejected.
        key: String,
    },
}
