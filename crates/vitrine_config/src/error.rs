//! Error types for configuration fetching.

/// Errors from a store-configuration fetch.
///
/// Every variant is fatal for the request: a page must never render with
/// absent store configuration, so the bootstrap pass propagates these
/// unmodified instead of serving a degraded page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport error (connection failure, timeout, etc.).
    #[error("http error: {0}")]
    Http(String),

    /// An inbound header could not be forwarded.
    #[error("invalid request header: {0}")]
    Header(String),

    /// Non-success status from the configuration endpoint.
    #[error("endpoint error ({status}): {message}")]
    Endpoint {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The query resolved with GraphQL-level errors.
    #[error("query failed: {0}")]
    GraphQl(String),

    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// JSON decoding error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
