//! The HTTP capability the GraphQL client depends on.
//!
//! The client never opens connections itself. It hands an [`HttpRequest`] to
//! a [`Transport`] and classifies whatever comes back. The crate ships
//! [`HttpClient`](crate::HttpClient), a reqwest-backed transport; tests and
//! embedders can supply their own.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use grafico_ql::{HttpRequest, HttpResponse, Transport, TransportError};
//! use std::collections::HashMap;
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl Transport for Canned {
//!     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
//!         Ok(HttpResponse::new(200, HashMap::new(), r#"{"data":{"ok":true}}"#))
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Sends a single HTTP request and returns the undecoded response.
///
/// Implementations return `Err` only when no response exists at all. Any
/// HTTP status, including 4xx and 5xx, is a successful send.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and waits for the full response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request could not be completed.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}
