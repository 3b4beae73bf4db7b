//! Financial analyst agent tools
//!
//! Two agent-callable tools backed by the Alpha Vantage API:
//!
//! - `get_company_overview`: key fundamentals (description, sector, market
//!   cap, P/E, profit margin, 52-week range)
//! - `get_earnings`: last 5 annual and 4 quarterly EPS records with
//!   formatted surprise percentages and the latest reported EPS
//!
//! Every call answers with an [`agent_tools::Envelope`]: missing keys,
//! HTTP failures, upstream error messages and malformed bodies all become
//! `{"status": "error", "error": ...}`.
//!
//! # Example
//!
//! ```rust,no_run
//! use agent_finance::{FinanceConfig, FinancialAnalystAgent};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = FinanceConfig::from_env()?;
//!     let agent = FinancialAnalystAgent::new(&config)?;
//!
//!     let overview = agent
//!         .call_tool("get_company_overview", json!({"symbol": "IBM"}))
//!         .await?;
//!     println!("{overview}");
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod error;
pub mod tools;

pub use agent::{FinancialAnalystAgent, finance_tool_registry, financial_analyst_agent};
pub use api::{AlphaVantageClient, ApiFunction, FinancialDataSource};
pub use config::FinanceConfig;
pub use error::{FinanceError, Result};
pub use tools::{CompanyOverviewTool, EarningsTool, get_company_overview, get_earnings};
