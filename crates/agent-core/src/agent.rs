//! Declarative agent definitions
//!
//! An [`AgentDefinition`] is what gets handed to a conversational-agent host:
//! the model to run, the instruction and description strings, and the names
//! of the tools the agent may call. The host owns the conversation loop.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Agent registration record ("agent card")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Unique agent name
    pub name: String,
    /// Model identifier understood by the host
    pub model: String,
    /// Short description shown to other agents and users
    pub description: String,
    /// System instruction for the model
    pub instruction: String,
    /// Names of the tools exposed to the model, in registration order
    pub tools: Vec<String>,
}

impl AgentDefinition {
    /// Start building a definition
    pub fn builder(name: impl Into<String>) -> AgentDefinitionBuilder {
        AgentDefinitionBuilder {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Builder for [`AgentDefinition`]
#[derive(Debug, Default)]
pub struct AgentDefinitionBuilder {
    name: String,
    model: Option<String>,
    description: String,
    instruction: String,
    tools: Vec<String>,
}

impl AgentDefinitionBuilder {
    /// Set the model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the instruction
    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Add a tool name
    pub fn tool(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.tools.contains(&name) {
            self.tools.push(name);
        }
        self
    }

    /// Add several tool names
    pub fn tools<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(self, |builder, name| builder.tool(name))
    }

    /// Build the definition
    ///
    /// Name and model are mandatory; an agent with no tools is allowed.
    pub fn build(self) -> Result<AgentDefinition> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidDefinition("agent name is empty".to_string()));
        }

        let model = self
            .model
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| Error::InvalidDefinition(format!("agent '{}' has no model", self.name)))?;

        Ok(AgentDefinition {
            name: self.name,
            model,
            description: self.description,
            instruction: self.instruction,
            tools: self.tools,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let agent = AgentDefinition::builder("analyst")
            .model("some-model")
            .description("desc")
            .instruction("be helpful")
            .tools(["a", "b"])
            .tool("a")
            .build()
            .unwrap();

        assert_eq!(agent.name, "analyst");
        assert_eq!(agent.model, "some-model");
        assert_eq!(agent.tools, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_model() {
        let err = AgentDefinition::builder("analyst").build().unwrap_err();
        assert!(matches!(err, Error::InvalidDefinition(_)));
        assert!(err.to_string().contains("no model"));
    }

    #[test]
    fn test_empty_name() {
        let err = AgentDefinition::builder("  ").model("m").build().unwrap_err();
        assert!(matches!(err, Error::InvalidDefinition(_)));
    }

    #[test]
    fn test_serialization_shape() {
        let agent = AgentDefinition::builder("analyst")
            .model("m")
            .tool("get_earnings")
            .build()
            .unwrap();

        let json = serde_json::to_value(&agent).unwrap();
        assert_eq!(json["name"], "analyst");
        assert_eq!(json["tools"][0], "get_earnings");
    }
}
