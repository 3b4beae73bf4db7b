//! Agent-callable finance tools
//!
//! Each tool exists twice: as a plain async function taking an optional
//! data source (no source means no API key), and as an [`agent_tools::Tool`]
//! wrapper for registries. Both always answer with an [`Envelope`].

pub mod earnings;
pub mod overview;

pub use earnings::{EarningsMetrics, EarningsReport, EarningsTool, get_earnings};
pub use overview::{CompanyOverviewReport, CompanyOverviewTool, KeyMetrics, get_company_overview};

use agent_tools::{Envelope, schema};
use serde::Deserialize;
use serde_json::{Value, json};

/// Input accepted by both tools
#[derive(Debug, Deserialize)]
struct SymbolParams {
    symbol: String,
}

/// Parse `{"symbol": ...}`, or produce the error envelope to return
fn parse_symbol<T>(params: Value) -> Result<String, Envelope<T>> {
    serde_json::from_value::<SymbolParams>(params)
        .map(|p| p.symbol)
        .map_err(|e| Envelope::error(format!("Invalid parameters: {e}")))
}

fn symbol_schema() -> Value {
    schema::object(
        json!({ "symbol": schema::string("Stock ticker symbol (e.g., IBM)") }),
        &["symbol"],
    )
}
