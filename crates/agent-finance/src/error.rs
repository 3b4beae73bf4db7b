//! Error types for financial data retrieval

use thiserror::Error;

/// Failures while fetching or decoding financial data
///
/// Every variant ends up as the `error` string of a tool envelope, so the
/// `Display` output is what callers see.
#[derive(Debug, Error)]
pub enum FinanceError {
    /// No Alpha Vantage API key configured
    #[error("Missing API key")]
    MissingApiKey,

    /// Upstream answered with a non-2xx status
    #[error("HTTP error: {status}")]
    Http {
        status: reqwest::StatusCode,
    },

    /// Transport-level failure (DNS, connect, TLS, body read)
    ///
    /// Built from errors stripped of their URL, which carries the API key.
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// Error reported by the upstream API inside a 200 response
    #[error("{0}")]
    Upstream(String),

    /// Response body is valid JSON but not the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Response body is not valid JSON, or a record failed to decode
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FinanceError {
    /// Wrap a transport error without leaking the request URL
    pub fn network(err: reqwest::Error) -> Self {
        Self::Network(err.without_url())
    }
}

/// Result type alias for finance operations
pub type Result<T> = std::result::Result<T, FinanceError>;
