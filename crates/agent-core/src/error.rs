//! Error types for agent-core

use thiserror::Error;

/// Result type alias for agent-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent and tool plumbing
///
/// Domain failures (an upstream API refusing a request, say) are reported
/// inside tool envelopes; this type covers the framework around them.
#[derive(Error, Debug)]
pub enum Error {
    /// No tool registered under the requested name
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Agent definition is incomplete
    #[error("Invalid agent definition: {0}")]
    InvalidDefinition(String),

    /// Tool output could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
