//! Company overview tool

use agent_core::Result as AgentResult;
use agent_tools::{Envelope, Tool};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::api::alpha_vantage::decode;
use crate::api::{AlphaVantageClient, ApiFunction, CompanyOverview, FinancialDataSource};
use crate::config::FinanceConfig;
use crate::error::{FinanceError, Result};

/// Key fundamentals picked out of the overview response
///
/// Every field is always serialized; unknown values are `null`. Known
/// values are passed on exactly as the API sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    #[serde(rename = "Description")]
    pub description: Option<Value>,
    #[serde(rename = "Sector")]
    pub sector: Option<Value>,
    #[serde(rename = "MarketCap")]
    pub market_cap: Option<Value>,
    #[serde(rename = "PERatio")]
    pub pe_ratio: Option<Value>,
    #[serde(rename = "ProfitMargin")]
    pub profit_margin: Option<Value>,
    #[serde(rename = "52WeekHigh")]
    pub week_52_high: Option<Value>,
    #[serde(rename = "52WeekLow")]
    pub week_52_low: Option<Value>,
}

impl From<CompanyOverview> for KeyMetrics {
    fn from(overview: CompanyOverview) -> Self {
        Self {
            description: overview.description,
            sector: overview.sector,
            market_cap: overview.market_capitalization,
            pe_ratio: overview.pe_ratio,
            profit_margin: overview.profit_margin,
            week_52_high: overview.week_52_high,
            week_52_low: overview.week_52_low,
        }
    }
}

/// Success payload of [`get_company_overview`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyOverviewReport {
    /// Symbol exactly as requested
    pub symbol: String,
    pub overview: KeyMetrics,
}

/// Fetch company fundamentals for `symbol`
///
/// `source` is `None` when no API key is configured; the call then fails
/// without touching the network.
pub async fn get_company_overview(
    source: Option<&dyn FinancialDataSource>,
    symbol: &str,
) -> Envelope<CompanyOverviewReport> {
    let envelope = Envelope::from_result(fetch_overview(source, symbol).await);
    if let Some(error) = envelope.error_message() {
        tracing::warn!(symbol, error, "Company overview failed");
    }
    envelope
}

async fn fetch_overview(
    source: Option<&dyn FinancialDataSource>,
    symbol: &str,
) -> Result<CompanyOverviewReport> {
    let source = source.ok_or(FinanceError::MissingApiKey)?;

    let body = source.fetch(ApiFunction::Overview, symbol).await?;
    let overview: CompanyOverview = decode(body)?;

    tracing::debug!(symbol, "Company overview fetched");

    Ok(CompanyOverviewReport {
        symbol: symbol.to_string(),
        overview: overview.into(),
    })
}

/// Tool wrapper around [`get_company_overview`]
pub struct CompanyOverviewTool {
    source: Option<Arc<dyn FinancialDataSource>>,
}

impl CompanyOverviewTool {
    /// Create the tool from configuration
    pub fn new(config: &FinanceConfig) -> Self {
        let source = AlphaVantageClient::from_config(config)
            .map(|client| Arc::new(client) as Arc<dyn FinancialDataSource>);
        Self::with_source(source)
    }

    /// Create the tool over an arbitrary data source
    pub fn with_source(source: Option<Arc<dyn FinancialDataSource>>) -> Self {
        Self { source }
    }

    /// Run the tool for one symbol
    pub async fn run(&self, symbol: &str) -> Envelope<CompanyOverviewReport> {
        get_company_overview(self.source.as_deref(), symbol).await
    }
}

#[async_trait]
impl Tool for CompanyOverviewTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let envelope = match super::parse_symbol(params) {
            Ok(symbol) => self.run(&symbol).await,
            Err(invalid) => invalid,
        };
        Ok(envelope.to_value()?)
    }

    fn name(&self) -> &str {
        "get_company_overview"
    }

    fn description(&self) -> &str {
        "Get comprehensive company information and financial metrics for a stock ticker: \
         description, sector, market capitalization, P/E ratio, profit margin and 52-week range."
    }

    fn input_schema(&self) -> Value {
        super::symbol_schema()
    }
}
