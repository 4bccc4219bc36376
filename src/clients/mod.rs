//! HTTP and GraphQL client types.
//!
//! This module provides the transport seam and the GraphQL client built on
//! it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The HTTP capability the client depends on
//! - [`HttpClient`]: The default reqwest-backed transport
//! - [`HttpRequest`]: A transport-ready request shaped from a GraphQL query
//! - [`HttpResponse`]: An undecoded response returned by a transport
//! - [`TransportError`]: A transport that produced no response
//! - [`graphql::GraphqlClient`]: The GraphQL client
//! - [`graphql::GraphqlError`]: GraphQL-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use grafico_ql::clients::{HttpClient, graphql::GraphqlClient};
//! use grafico_ql::ClientConfig;
//!
//! let client = GraphqlClient::with_transport(
//!     "https://mock-api.com/graphql",
//!     ClientConfig::default(),
//!     HttpClient::new(),
//! );
//!
//! let response = client.request("{ viewer { id } }", None).await?;
//! ```

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::TransportError;
pub use http_client::{HttpClient, SDK_VERSION, TIMEOUT_OPTION};
pub use http_request::HttpRequest;
pub use http_response::HttpResponse;
pub use transport::Transport;

// Re-export GraphQL client types at the clients module level
pub use graphql::{GraphqlClient, GraphqlError, GraphqlResponse, QueryRequest, RawResponse};
