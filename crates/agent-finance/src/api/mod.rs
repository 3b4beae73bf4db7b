//! Alpha Vantage access: HTTP client and response records

pub mod alpha_vantage;
pub mod models;

pub use alpha_vantage::{AlphaVantageClient, ApiFunction, FinancialDataSource};
pub use models::{AnnualEarning, CompanyOverview, EarningsHistory, QuarterlyEarning};
