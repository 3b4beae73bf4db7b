//! Alpha Vantage response records
//!
//! Alpha Vantage mostly encodes numbers as JSON strings ("None" when
//! unknown), but nothing here relies on it: values are kept as the JSON the
//! API sent, nulls and numbers included.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `OVERVIEW` response, restricted to the fields the tools read
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompanyOverview {
    #[serde(rename = "Symbol", default)]
    pub symbol: Option<Value>,
    #[serde(rename = "Description", default)]
    pub description: Option<Value>,
    #[serde(rename = "Sector", default)]
    pub sector: Option<Value>,
    #[serde(rename = "MarketCapitalization", default)]
    pub market_capitalization: Option<Value>,
    #[serde(rename = "PERatio", default)]
    pub pe_ratio: Option<Value>,
    #[serde(rename = "ProfitMargin", default)]
    pub profit_margin: Option<Value>,
    #[serde(rename = "52WeekHigh", default)]
    pub week_52_high: Option<Value>,
    #[serde(rename = "52WeekLow", default)]
    pub week_52_low: Option<Value>,
}

/// `EARNINGS` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EarningsHistory {
    /// Yearly EPS, most recent first as sent by the API
    #[serde(rename = "annualEarnings", default)]
    pub annual_earnings: Vec<AnnualEarning>,
    /// Quarterly EPS with estimates, most recent first as sent by the API
    #[serde(rename = "quarterlyEarnings", default)]
    pub quarterly_earnings: Vec<QuarterlyEarning>,
}

/// One fiscal year of reported EPS, every upstream field preserved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnualEarning {
    fields: Map<String, Value>,
}

/// One fiscal quarter of reported vs. estimated EPS, every upstream field
/// preserved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuarterlyEarning {
    fields: Map<String, Value>,
}

impl QuarterlyEarning {
    pub fn reported_eps(&self) -> Option<&Value> {
        self.fields.get("reportedEPS")
    }

    /// Surprise percentage, unless missing or null
    pub fn surprise_percentage(&self) -> Option<&Value> {
        self.fields
            .get("surprisePercentage")
            .filter(|value| !value.is_null())
    }

    /// Replace the absolute surprise with its display form
    pub(crate) fn set_surprise(&mut self, display: String) {
        self.fields.insert("surprise".to_string(), Value::String(display));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overview_keeps_raw_values() {
        let overview: CompanyOverview = serde_json::from_value(json!({
            "Symbol": "IBM",
            "MarketCapitalization": 123456,
            "PERatio": "22.5",
            "ProfitMargin": null,
            "Industry": "ignored"
        }))
        .unwrap();

        assert_eq!(overview.symbol, Some(json!("IBM")));
        assert_eq!(overview.market_capitalization, Some(json!(123456)));
        assert_eq!(overview.pe_ratio, Some(json!("22.5")));
        assert_eq!(overview.profit_margin, None);
        assert_eq!(overview.sector, None);
    }

    #[test]
    fn test_quarterly_round_trips_unchanged() {
        let raw = json!({
            "fiscalDateEnding": "2024-03-31",
            "reportedEPS": 1.68,
            "estimatedEPS": null,
            "surprisePercentage": null,
            "reportTime": "post-market"
        });

        let quarter: QuarterlyEarning = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(quarter.reported_eps(), Some(&json!(1.68)));
        assert!(quarter.surprise_percentage().is_none());

        assert_eq!(serde_json::to_value(&quarter).unwrap(), raw);
    }

    #[test]
    fn test_earnings_missing_lists() {
        let history: EarningsHistory = serde_json::from_value(json!({"symbol": "IBM"})).unwrap();
        assert!(history.annual_earnings.is_empty());
        assert!(history.quarterly_earnings.is_empty());
    }

    #[test]
    fn test_record_must_be_object() {
        let result: Result<EarningsHistory, _> =
            serde_json::from_value(json!({"annualEarnings": ["2023"]}));
        assert!(result.is_err());
    }
}
