//! Command-line interface for the financial analyst agent
//!
//! ```bash
//! export ALPHA_VANTAGE_API_KEY=...
//! agent-cli overview IBM
//! agent-cli earnings IBM --compact
//! agent-cli call get_earnings --params '{"symbol": "MSFT"}'
//! agent-cli tools
//! agent-cli agent
//! ```
//!
//! Tool envelopes go to stdout as JSON; logs go to stderr. An error
//! envelope is still a successful run.

use agent_finance::{FinanceConfig, FinancialAnalystAgent};
use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "agent-cli")]
#[command(about = "Company overviews and earnings from Alpha Vantage", long_about = None)]
struct Cli {
    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    /// Override the model announced in the agent definition
    #[arg(long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Company description, sector and key metrics
    Overview {
        /// Stock ticker symbol (e.g., IBM)
        symbol: String,
    },
    /// Last 5 annual and 4 quarterly EPS records
    Earnings {
        /// Stock ticker symbol (e.g., IBM)
        symbol: String,
    },
    /// Call any registered tool with JSON parameters
    Call {
        /// Tool name
        tool: String,
        /// Tool parameters as a JSON object
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List registered tools
    Tools,
    /// Print the agent definition
    Agent,
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}

fn tools_table(agent: &FinancialAnalystAgent) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Tool", "Description"]);

    for definition in agent.tool_definitions() {
        table.add_row(vec![definition.name, definition.description]);
    }
    table
}

fn load_config(model: Option<String>) -> anyhow::Result<FinanceConfig> {
    let mut builder = FinanceConfig::builder().with_env();
    if let Some(model) = model {
        builder = builder.model(model);
    }
    builder.build().context("invalid configuration")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agent_utils::load_dotenv();
    agent_utils::init_tracing_with_default("warn,agent_finance=info");

    let cli = Cli::parse();
    let config = load_config(cli.model)?;
    let agent = FinancialAnalystAgent::new(&config)?;

    info!(command = ?cli.command, "Starting agent-cli");

    match cli.command {
        Command::Overview { symbol } => {
            let value = agent
                .call_tool("get_company_overview", json!({ "symbol": symbol }))
                .await?;
            print_json(&value, cli.compact)?;
        }
        Command::Earnings { symbol } => {
            let value = agent
                .call_tool("get_earnings", json!({ "symbol": symbol }))
                .await?;
            print_json(&value, cli.compact)?;
        }
        Command::Call { tool, params } => {
            let params: Value =
                serde_json::from_str(&params).context("--params must be valid JSON")?;
            if !params.is_object() {
                bail!("--params must be a JSON object");
            }
            let value = agent.call_tool(&tool, params).await?;
            print_json(&value, cli.compact)?;
        }
        Command::Tools => {
            println!("{}", tools_table(&agent));
        }
        Command::Agent => {
            print_json(agent.definition(), cli.compact)?;
        }
    }

    Ok(())
}
