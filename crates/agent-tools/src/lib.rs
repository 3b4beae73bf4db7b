//! Tool contract for the financial agent workspace
//!
//! Defines how tools are described to an agent host ([`ToolDefinition`]),
//! executed ([`Tool`], [`ToolRegistry`]), and how they answer
//! ([`Envelope`]).

pub mod definition;
pub mod envelope;
pub mod registry;
pub mod tool;

pub use definition::{ToolDefinition, schema};
pub use envelope::Envelope;
pub use registry::ToolRegistry;
pub use tool::Tool;
