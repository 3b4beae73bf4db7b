//! Configuration for the financial analyst agent

use crate::error::{FinanceError, Result};
use std::fmt;

/// Environment variable holding the Alpha Vantage API key
pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";
/// Environment variable overriding the Alpha Vantage endpoint
pub const BASE_URL_ENV: &str = "ALPHA_VANTAGE_BASE_URL";
/// Environment variable overriding the agent model
pub const MODEL_ENV: &str = "FINANCE_AGENT_MODEL";

/// Default Alpha Vantage query endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
/// Default model announced in the agent definition
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration shared by the finance tools
///
/// Read once at startup and then only shared read-only.
#[derive(Clone, PartialEq, Eq)]
pub struct FinanceConfig {
    /// Alpha Vantage API key; tools answer "Missing API key" without it
    pub alpha_vantage_api_key: Option<String>,

    /// Query endpoint
    pub base_url: String,

    /// Model identifier for the agent definition
    pub model: String,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            alpha_vantage_api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

// The key never shows up in logs or panics.
impl fmt::Debug for FinanceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinanceConfig")
            .field(
                "alpha_vantage_api_key",
                &self.alpha_vantage_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl FinanceConfig {
    /// Create a new configuration builder
    pub fn builder() -> FinanceConfigBuilder {
        FinanceConfigBuilder::default()
    }

    /// Build a configuration from the process environment
    ///
    /// A missing key is not an error here: it is reported per call.
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env().build()
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.alpha_vantage_api_key.is_some()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(FinanceError::Config(format!(
                "base URL must be http(s), got '{}'",
                self.base_url
            )));
        }

        if self.model.trim().is_empty() {
            return Err(FinanceError::Config("model must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Builder for FinanceConfig
#[derive(Debug, Default)]
pub struct FinanceConfigBuilder {
    alpha_vantage_api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
}

impl FinanceConfigBuilder {
    /// Set the Alpha Vantage API key (blank keys count as missing)
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_api_key = agent_utils::config::non_blank(Some(key.into()));
        self
    }

    /// Set the query endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Load the API key from `ALPHA_VANTAGE_API_KEY`
    pub fn with_env_api_key(mut self) -> Self {
        if let Some(key) = agent_utils::env_var(API_KEY_ENV) {
            self.alpha_vantage_api_key = Some(key);
        }
        self
    }

    /// Load key, endpoint and model overrides from the environment
    pub fn with_env(mut self) -> Self {
        if let Some(url) = agent_utils::env_var(BASE_URL_ENV) {
            self.base_url = Some(url);
        }
        if let Some(model) = agent_utils::env_var(MODEL_ENV) {
            self.model = Some(model);
        }
        self.with_env_api_key()
    }

    /// Build the configuration
    pub fn build(self) -> Result<FinanceConfig> {
        let defaults = FinanceConfig::default();

        let config = FinanceConfig {
            alpha_vantage_api_key: self.alpha_vantage_api_key,
            base_url: self.base_url.unwrap_or(defaults.base_url),
            model: self.model.unwrap_or(defaults.model),
        };

        config.validate()?;
        Ok(config)
    }
}
