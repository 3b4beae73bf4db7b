//! Earnings history tool
//!
//! Keeps the most recent annual and quarterly EPS records exactly as the
//! API ordered them and formats the quarterly surprise as a percentage.

use agent_core::Result as AgentResult;
use agent_tools::{Envelope, Tool};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::api::alpha_vantage::decode;
use crate::api::{
    AlphaVantageClient, AnnualEarning, ApiFunction, EarningsHistory, FinancialDataSource,
    QuarterlyEarning,
};
use crate::config::FinanceConfig;
use crate::error::{FinanceError, Result};

/// Annual records kept (five fiscal years)
pub const ANNUAL_LIMIT: usize = 5;
/// Quarterly records kept (four fiscal quarters)
pub const QUARTERLY_LIMIT: usize = 4;

/// Metrics derived from the retained records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsMetrics {
    /// Reported EPS of the first retained quarter, as sent by the API
    pub latest_eps: Option<Value>,
}

/// Success payload of [`get_earnings`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsReport {
    /// Symbol exactly as requested
    pub symbol: String,
    pub annual_earnings: Vec<AnnualEarning>,
    pub quarterly_earnings: Vec<QuarterlyEarning>,
    pub metrics: EarningsMetrics,
}

impl EarningsReport {
    /// Normalize an upstream history
    ///
    /// Records are truncated, never re-sorted: the API is trusted to send
    /// the most recent period first.
    pub fn from_history(symbol: impl Into<String>, history: EarningsHistory) -> Self {
        let mut annual_earnings = history.annual_earnings;
        annual_earnings.truncate(ANNUAL_LIMIT);

        let mut quarterly_earnings = history.quarterly_earnings;
        quarterly_earnings.truncate(QUARTERLY_LIMIT);
        for quarter in &mut quarterly_earnings {
            if let Some(display) = quarter.surprise_percentage().map(format_surprise) {
                quarter.set_surprise(display);
            }
        }

        let latest_eps = quarterly_earnings
            .first()
            .and_then(|q| q.reported_eps().cloned());

        Self {
            symbol: symbol.into(),
            annual_earnings,
            quarterly_earnings,
            metrics: EarningsMetrics { latest_eps },
        }
    }
}

/// Display form of a surprise percentage: the value with a `%` suffix
fn format_surprise(percentage: &Value) -> String {
    match percentage {
        Value::String(s) => format!("{s}%"),
        other => format!("{other}%"),
    }
}

/// Fetch annual and quarterly earnings for `symbol`
///
/// `source` is `None` when no API key is configured; the call then fails
/// without touching the network.
pub async fn get_earnings(
    source: Option<&dyn FinancialDataSource>,
    symbol: &str,
) -> Envelope<EarningsReport> {
    let envelope = Envelope::from_result(fetch_earnings(source, symbol).await);
    if let Some(error) = envelope.error_message() {
        tracing::warn!(symbol, error, "Earnings lookup failed");
    }
    envelope
}

async fn fetch_earnings(
    source: Option<&dyn FinancialDataSource>,
    symbol: &str,
) -> Result<EarningsReport> {
    let source = source.ok_or(FinanceError::MissingApiKey)?;

    let body = source.fetch(ApiFunction::Earnings, symbol).await?;
    let history: EarningsHistory = decode(body)?;

    tracing::debug!(
        symbol,
        annual = history.annual_earnings.len(),
        quarterly = history.quarterly_earnings.len(),
        "Earnings fetched"
    );

    Ok(EarningsReport::from_history(symbol, history))
}

/// Tool wrapper around [`get_earnings`]
pub struct EarningsTool {
    source: Option<Arc<dyn FinancialDataSource>>,
}

impl EarningsTool {
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
    pub async fn run(&self, symbol: &str) -> Envelope<EarningsReport> {
        get_earnings(self.source.as_deref(), symbol).await
    }
}

#[async_trait]
impl Tool for EarningsTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let envelope = match super::parse_symbol(params) {
            Ok(symbol) => self.run(&symbol).await,
            Err(invalid) => invalid,
        };
        Ok(envelope.to_value()?)
    }

    fn name(&self) -> &str {
        "get_earnings"
    }

    fn description(&self) -> &str {
        "Get annual and quarterly earnings (EPS) for a stock ticker with analyst estimates \
         and surprises: the last 5 fiscal years, the last 4 quarters and the latest reported EPS."
    }

    fn input_schema(&self) -> Value {
        super::symbol_schema()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::alpha_vantage::MockFinancialDataSource;
    use serde_json::{Map, json};

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn quarter(date: &str, eps: &str, pct: &str) -> Value {
        json!({
            "fiscalDateEnding": date,
            "reportedDate": date,
            "reportedEPS": eps,
            "estimatedEPS": "1.00",
            "surprise": "0.05",
            "surprisePercentage": pct,
            "reportTime": "post-market"
        })
    }

    fn source_returning(body: Value) -> MockFinancialDataSource {
        let mut source = MockFinancialDataSource::new();
        source
            .expect_fetch()
            .withf(|function, _| *function == ApiFunction::Earnings)
            .times(1)
            .returning(move |_, _| Ok(object(body.clone())));
        source
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_call() {
        let envelope = get_earnings(None, "IBM").await;

        assert_eq!(
            envelope.to_value().unwrap(),
            json!({"status": "error", "error": "Missing API key"})
        );
    }

    #[tokio::test]
    async fn test_truncation_keeps_upstream_order() {
        let quarters: Vec<Value> = (1..=6)
            .map(|i| quarter(&format!("2024-0{i}-30"), &format!("{i}.00"), "1.0"))
            .collect();
        let annual: Vec<Value> = (0..7)
            .map(|i| json!({"fiscalDateEnding": format!("20{}-12-31", 23 - i), "reportedEPS": "9.0"}))
            .collect();
        let source = source_returning(json!({
            "symbol": "IBM",
            "annualEarnings": annual,
            "quarterlyEarnings": quarters
        }));

        let report = get_earnings(Some(&source), "IBM").await.into_result().unwrap();

        assert_eq!(report.annual_earnings.len(), ANNUAL_LIMIT);
        let first_year = serde_json::to_value(&report.annual_earnings[0]).unwrap();
        assert_eq!(first_year["fiscalDateEnding"], "2023-12-31");
        assert_eq!(report.quarterly_earnings.len(), QUARTERLY_LIMIT);
        let eps: Vec<_> = report
            .quarterly_earnings
            .iter()
            .map(|q| q.reported_eps().and_then(Value::as_str).unwrap())
            .collect();
        assert_eq!(eps, vec!["1.00", "2.00", "3.00", "4.00"]);
        assert_eq!(report.metrics.latest_eps, Some(json!("1.00")));
    }

    #[tokio::test]
    async fn test_surprise_formatting() {
        let source = source_returning(json!({
            "quarterlyEarnings": [quarter("2024-06-30", "2.43", "1.23")]
        }));

        let value = get_earnings(Some(&source), "IBM").await.to_value().unwrap();
        let q = &value["quarterly_earnings"][0];

        assert_eq!(q["surprise"], "1.23%");
        assert_eq!(q["surprisePercentage"], "1.23");
        assert_eq!(q["reportTime"], "post-market");
    }

    #[test]
    fn test_surprise_untouched_without_percentage() {
        let history: EarningsHistory = serde_json::from_value(json!({
            "quarterlyEarnings": [{"reportedEPS": "1.1", "surprise": "0.02"}]
        }))
        .unwrap();

        let report = EarningsReport::from_history("IBM", history);
        let first_quarter = serde_json::to_value(&report.quarterly_earnings[0]).unwrap();
        assert_eq!(first_quarter["surprise"], "0.02");
    }

    #[test]
    fn test_records_pass_through_except_surprise() {
        let quarter = json!({
            "fiscalDateEnding": "2024-06-30",
            "reportedEPS": 2.43,
            "estimatedEPS": null,
            "surprise": 0.1,
            "surprisePercentage": 4.29
        });
        let null_percentage = json!({
            "reportedEPS": 1.5,
            "estimatedEPS": null,
            "surprise": 0.1,
            "surprisePercentage": null
        });
        let annual = json!({"fiscalDateEnding": "2023-12-31", "reportedEPS": 9.62});
        let history: EarningsHistory = serde_json::from_value(json!({
            "annualEarnings": [annual.clone()],
            "quarterlyEarnings": [quarter.clone(), null_percentage.clone()]
        }))
        .unwrap();

        let report = EarningsReport::from_history("IBM", history);
        let value = serde_json::to_value(&report).unwrap();

        let mut expected = quarter;
        expected["surprise"] = json!("4.29%");
        assert_eq!(value["quarterly_earnings"][0], expected);
        assert_eq!(value["quarterly_earnings"][1], null_percentage);
        assert_eq!(value["annual_earnings"][0], annual);
        assert_eq!(value["metrics"]["latest_eps"], json!(2.43));
    }

    #[tokio::test]
    async fn test_empty_quarterly_latest_eps_null() {
        let source = source_returning(json!({
            "symbol": "IBM",
            "annualEarnings": [{"fiscalDateEnding": "2023-12-31", "reportedEPS": "9.62"}],
            "quarterlyEarnings": []
        }));

        let value = get_earnings(Some(&source), "IBM").await.to_value().unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["symbol"], "IBM");
        assert_eq!(value["annual_earnings"][0]["reportedEPS"], "9.62");
        assert_eq!(value["quarterly_earnings"], json!([]));
        assert!(value["metrics"]["latest_eps"].is_null());
    }

    #[tokio::test]
    async fn test_malformed_lists() {
        let source = source_returning(json!({"quarterlyEarnings": "not a list"}));

        let envelope = get_earnings(Some(&source), "IBM").await;
        assert!(!envelope.is_success());
        assert!(envelope.error_message().unwrap().starts_with("JSON error"));
    }

    #[tokio::test]
    async fn test_identical_data_identical_output() {
        let body = json!({
            "annualEarnings": [{"fiscalDateEnding": "2023-12-31", "reportedEPS": "9.62", "z": 1, "a": 2}],
            "quarterlyEarnings": [quarter("2024-06-30", "2.43", "1.23")]
        });
        let mut source = MockFinancialDataSource::new();
        source
            .expect_fetch()
            .times(2)
            .returning(move |_, _| Ok(object(body.clone())));

        let first = serde_json::to_string(&get_earnings(Some(&source), "IBM").await).unwrap();
        let second = serde_json::to_string(&get_earnings(Some(&source), "IBM").await).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_tool_execute() {
        let source: Arc<dyn FinancialDataSource> = Arc::new(source_returning(json!({
            "quarterlyEarnings": [quarter("2024-06-30", "2.43", "-0.5")]
        })));
        let tool = EarningsTool::with_source(Some(source));

        let value = tool.execute(json!({"symbol": "IBM"})).await.unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["metrics"]["latest_eps"], "2.43");
        assert_eq!(value["quarterly_earnings"][0]["surprise"], "-0.5%");
    }

    #[test]
    fn test_tool_metadata() {
        let tool = EarningsTool::new(&FinanceConfig::default());

        assert_eq!(tool.name(), "get_earnings");
        assert!(tool.description().contains("EPS"));
    }
}
