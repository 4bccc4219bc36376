//! One-shot helpers that build an ephemeral client per call.

use serde_json::Value;

use crate::clients::graphql::{GraphqlClient, GraphqlError, GraphqlResponse, RawResponse};
use crate::error::ConfigError;

/// Creates a client for `url`, reading `options` with
/// [`ClientConfig::from_options`](crate::ClientConfig::from_options).
///
/// # Errors
///
/// Returns [`ConfigError`] if the options are invalid.
///
/// # Example
///
/// ```rust
/// use grafico_ql::RequestMethod;
/// use serde_json::json;
///
/// let client = grafico_ql::create("https://example.com/graphql", Some(&json!({"method": "get"}))).unwrap();
/// assert_eq!(client.config().method(), RequestMethod::Get);
///
/// assert!(grafico_ql::create("https://example.com/graphql", Some(&json!({"method": "put"}))).is_err());
/// ```
pub fn create(url: impl Into<String>, options: Option<&Value>) -> Result<GraphqlClient, ConfigError> {
    let url = url.into();
    match options {
        Some(options) => GraphqlClient::from_options(url, options),
        None => Ok(GraphqlClient::new(url)),
    }
}

/// Sends one interpreted-mode query to `url` with the default configuration.
///
/// # Errors
///
/// See [`GraphqlClient::request`].
///
/// # Example
///
/// ```rust,ignore
/// let response = grafico_ql::request(
///     "https://countries.trevorblades.com",
///     r#"{ country(code: "IT") { name } }"#,
///     None,
/// )
/// .await?;
/// ```
pub async fn request(
    url: &str,
    query: &str,
    variables: Option<Value>,
) -> Result<GraphqlResponse, GraphqlError> {
    GraphqlClient::new(url).request(query, variables).await
}

/// Sends one raw-mode query to `url` with the default configuration.
///
/// # Errors
///
/// See [`GraphqlClient::raw_request`].
pub async fn raw_request(
    url: &str,
    query: &str,
    variables: Option<Value>,
) -> Result<RawResponse, GraphqlError> {
    GraphqlClient::new(url).raw_request(query, variables).await
}
