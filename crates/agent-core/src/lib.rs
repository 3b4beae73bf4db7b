//! Core abstractions for the financial agent workspace
//!
//! Shared error type and the declarative agent definition consumed by an
//! external agent host.

pub mod agent;
pub mod error;

pub use agent::{AgentDefinition, AgentDefinitionBuilder};
pub use error::{Error, Result};
