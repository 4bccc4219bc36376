//! # grafico-ql
//!
//! A minimal GraphQL client for issuing queries over HTTP.
//!
//! ## Overview
//!
//! This crate provides:
//! - Request shaping for POST (JSON body) and GET (query string) transmission
//! - Response classification into success, partial success with GraphQL
//!   `errors`, and failure
//! - Interpreted results ([`GraphqlResponse`]) or raw results ([`RawResponse`])
//! - Failure envelopes that carry both the request sent and the response received
//! - Immutable, mergeable configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - A pluggable [`Transport`], with a reqwest-backed default ([`HttpClient`])
//!
//! It deliberately does not validate queries, know about schemas, batch,
//! retry, cache or subscribe.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let response = grafico_ql::request(
//!     "https://countries.trevorblades.com",
//!     r#"{ country(code: "IT") { name } }"#,
//!     None,
//! )
//! .await?;
//!
//! println!("{}", response.data.unwrap_or_default()["country"]["name"]);
//! ```
//!
//! ## Configured Clients
//!
//! ```rust,ignore
//! use grafico_ql::{ClientConfig, GraphqlClient, RequestMethod};
//! use serde_json::json;
//!
//! let config = ClientConfig::builder()
//!     .method(RequestMethod::Get)
//!     .header("Authorization", "Bearer token")
//!     .transport_option("timeout", 5_000)
//!     .build();
//!
//! let mut client = GraphqlClient::with_config("https://mock-api.com/graphql?a=b", config);
//! client.set_header("X-Request-Source", "dashboard");
//!
//! let raw = client
//!     .raw_request("query Viewer($id: ID!) { viewer(id: $id) { name } }", Some(json!({"id": 1})))
//!     .await?;
//! println!("{} {:?}", raw.status, raw.data());
//! ```
//!
//! ## Handling Failures
//!
//! ```rust,ignore
//! use grafico_ql::GraphqlError;
//!
//! match grafico_ql::request("https://mock-api.com/graphql", "{ viewer { id } }", None).await {
//!     Ok(response) => println!("{:?}", response.data),
//!     Err(GraphqlError::BodyDecodeFailure(e)) => println!("not JSON: {}", e.body),
//!     Err(error) => {
//!         let envelope = error.envelope().expect("transport and GraphQL failures carry one");
//!         println!("status {} for {}", envelope.response.status, envelope.request.query);
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Every client owns its endpoint and configuration
//! - **Fail-fast validation**: Unsupported methods are rejected at construction
//! - **Injected transport**: The HTTP capability is passed in, never assumed
//! - **Nothing retried, nothing swallowed**: Every failure reaches the caller

pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{ClientConfig, ClientConfigBuilder, RequestMethod};
pub use error::ConfigError;

// Re-export transport types
pub use clients::{
    HttpClient, HttpRequest, HttpResponse, Transport, TransportError, SDK_VERSION, TIMEOUT_OPTION,
};

// Re-export GraphQL client types
pub use clients::graphql::{
    create, raw_request, request, BodyDecodeError, FailureEnvelope, FailureResponse,
    GraphqlClient, GraphqlError, GraphqlResponse, QueryRequest, RawResponse, ResponseMode,
    TRANSPORT_FAILURE_STATUS,
};
