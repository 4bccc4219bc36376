//! Transport-level error types.
//!
//! A [`TransportError`] means no HTTP response was produced at all: the
//! connection failed, the request timed out, or a custom transport gave up.
//! Responses with non-2xx status codes are not transport errors; they are
//! classified by the GraphQL layer.
//!
//! # Example
//!
//! ```rust
//! use grafico_ql::TransportError;
//!
//! let error = TransportError::custom("connection reset by peer");
//! assert_eq!(error.to_string(), "Transport error: connection reset by peer");
//! ```

use thiserror::Error;

/// Error returned by a [`Transport`](crate::Transport) that could not produce
/// a response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error from the default reqwest transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Error raised by a user-supplied transport.
    #[error("Transport error: {message}")]
    Custom {
        /// Description of the failure.
        message: String,
    },
}

impl TransportError {
    /// Creates a [`TransportError::Custom`] from any message.
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_error_message() {
        let error = TransportError::custom("socket closed");
        assert_eq!(error.to_string(), "Transport error: socket closed");
        assert!(matches!(error, TransportError::Custom { message } if message == "socket closed"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &TransportError::custom("boom");
        let _ = error;
    }
}
