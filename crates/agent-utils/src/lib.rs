//! Shared utilities for the financial agent workspace
//!
//! Logging setup and environment-backed configuration helpers used by the
//! library crates and the CLI.

pub mod config;
pub mod logging;

pub use config::{env_var, load_dotenv};
pub use logging::init_tracing_with_default;
