//! Alpha Vantage API client

use crate::config::{DEFAULT_BASE_URL, FinanceConfig};
use crate::error::{FinanceError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;

/// Sentinel carrying an error message in an otherwise successful response
const ERROR_MESSAGE_KEY: &str = "Error Message";
/// Notices sent instead of data when throttled or asking for a premium plan
const NOTICE_KEYS: [&str; 2] = ["Note", "Information"];

/// Alpha Vantage `function` query values used by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFunction {
    /// Company fundamentals
    Overview,
    /// Annual and quarterly EPS history
    Earnings,
}

impl ApiFunction {
    /// Query-string value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "OVERVIEW",
            Self::Earnings => "EARNINGS",
        }
    }
}

impl fmt::Display for ApiFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of raw Alpha Vantage JSON objects
///
/// Implementations perform exactly one request per call and must already
/// have rejected upstream-reported errors: a returned object is data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FinancialDataSource: Send + Sync {
    /// Fetch the response body for `function` and `symbol`
    async fn fetch(&self, function: ApiFunction, symbol: &str) -> Result<Map<String, Value>>;
}

/// Alpha Vantage API client
#[derive(Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl AlphaVantageClient {
    /// Create a client for the public endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at another endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build a client from configuration; `None` when no key is configured
    pub fn from_config(config: &FinanceConfig) -> Option<Self> {
        config
            .alpha_vantage_api_key
            .as_ref()
            .map(|key| Self::new(key.clone()).with_base_url(config.base_url.clone()))
    }

    /// Issue one GET and return the checked JSON object
    async fn query(&self, function: ApiFunction, symbol: &str) -> Result<Map<String, Value>> {
        let params = [
            ("function", function.as_str()),
            ("symbol", symbol),
            ("apikey", self.api_key.as_str()),
        ];

        tracing::debug!(%function, symbol, "Querying Alpha Vantage");

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(FinanceError::network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%function, symbol, %status, "Alpha Vantage returned an HTTP error");
            return Err(FinanceError::Http { status });
        }

        let bytes = response.bytes().await.map_err(FinanceError::network)?;
        let data: Value = serde_json::from_slice(&bytes)?;

        check_response(data)
    }
}

#[async_trait]
impl FinancialDataSource for AlphaVantageClient {
    async fn fetch(&self, function: ApiFunction, symbol: &str) -> Result<Map<String, Value>> {
        self.query(function, symbol).await
    }
}

/// Reject non-object bodies and upstream-reported errors
pub fn check_response(data: Value) -> Result<Map<String, Value>> {
    let Value::Object(body) = data else {
        return Err(FinanceError::Malformed(
            "expected a JSON object".to_string(),
        ));
    };

    if let Some(message) = body.get(ERROR_MESSAGE_KEY) {
        return Err(FinanceError::Upstream(text_of(message)));
    }

    // Notices only replace data when they are the whole body
    if body.len() == 1 {
        if let Some(notice) = NOTICE_KEYS.iter().find_map(|key| body.get(*key)) {
            return Err(FinanceError::Upstream(text_of(notice)));
        }
    }

    Ok(body)
}

/// Decode a checked body into a typed record
pub fn decode<T: DeserializeOwned>(body: Map<String, Value>) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(body))?)
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
