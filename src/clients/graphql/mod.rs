//! GraphQL client for HTTP endpoints.
//!
//! This module provides a GraphQL client built on top of a
//! [`Transport`](crate::clients::Transport): it shapes queries into HTTP
//! requests and classifies the responses.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GraphqlClient`]: The client with `request()` and `raw_request()` methods
//! - [`QueryRequest`]: A query with variables and per-call transport options
//! - [`GraphqlResponse`]: The `data` / `errors` / `extensions` of a success
//! - [`RawResponse`]: The whole decoded body plus status and headers
//! - [`GraphqlError`]: Error type, carrying a [`FailureEnvelope`] where possible
//!
//! The free functions [`create`], [`request`] and [`raw_request`] build a
//! throwaway client per call.
//!
//! # Example
//!
//! ```rust,ignore
//! use grafico_ql::GraphqlClient;
//! use serde_json::json;
//!
//! let client = grafico_ql::create(
//!     "https://mock-api.com/graphql",
//!     Some(&json!({"method": "GET", "headers": {"X-Api-Key": "secret"}})),
//! )?;
//!
//! let response = client.request("{ viewer { id } }", None).await?;
//!
//! // Partial success: data and errors side by side
//! if let Some(errors) = &response.errors {
//!     println!("GraphQL errors: {errors}");
//! }
//! ```
//!
//! # Success and Failure
//!
//! A call succeeds when the status is 2xx and the body has a `data` or
//! `errors` field. Anything else is a [`GraphqlError`]; transport errors are
//! reported with the synthetic status [`TRANSPORT_FAILURE_STATUS`] (900).

mod client;
mod errors;
mod request;
mod response;
mod shortcuts;

pub use client::GraphqlClient;
pub use errors::{
    BodyDecodeError, FailureEnvelope, FailureResponse, GraphqlError, TRANSPORT_FAILURE_STATUS,
};
pub use request::QueryRequest;
pub use response::{GraphqlResponse, RawResponse, ResponseMode};
pub use shortcuts::{create, raw_request, request};
