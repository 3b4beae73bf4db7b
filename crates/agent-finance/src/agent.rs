//! Financial analyst agent registration
//!
//! The conversational loop belongs to the agent host. This module only
//! assembles what the host needs: the tool registry and the declarative
//! [`AgentDefinition`] naming the model, instruction and tools.

use agent_core::{AgentDefinition, Result as AgentResult};
use agent_tools::{ToolDefinition, ToolRegistry};
use serde_json::Value;
use std::sync::Arc;

use crate::config::FinanceConfig;
use crate::tools::{CompanyOverviewTool, EarningsTool};

/// Agent name announced to the host
pub const AGENT_NAME: &str = "Financial_analyst_agent";
/// Agent description
pub const AGENT_DESCRIPTION: &str = "Agent to give company overviews with key financial metrics.";
/// System instruction
pub const AGENT_INSTRUCTION: &str =
    "You are a helpful AI agent that provides company overviews and earnings information";

/// Registry holding the overview and earnings tools
pub fn finance_tool_registry(config: &FinanceConfig) -> ToolRegistry {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(CompanyOverviewTool::new(config)));
    registry.register(Arc::new(EarningsTool::new(config)));
    registry
}

/// Agent definition exposing every tool in `registry`
pub fn financial_analyst_agent(
    config: &FinanceConfig,
    registry: &ToolRegistry,
) -> AgentResult<AgentDefinition> {
    AgentDefinition::builder(AGENT_NAME)
        .model(config.model.clone())
        .description(AGENT_DESCRIPTION)
        .instruction(AGENT_INSTRUCTION)
        .tools(registry.names())
        .build()
}

/// The financial analyst agent: definition plus callable tools
pub struct FinancialAnalystAgent {
    definition: AgentDefinition,
    registry: Arc<ToolRegistry>,
}

impl FinancialAnalystAgent {
    /// Assemble the agent from configuration
    pub fn new(config: &FinanceConfig) -> AgentResult<Self> {
        if !config.has_api_key() {
            tracing::warn!("No Alpha Vantage API key configured; tools will report it per call");
        }

        let registry = finance_tool_registry(config);
        let definition = financial_analyst_agent(config, &registry)?;

        tracing::info!(
            agent = %definition.name,
            model = %definition.model,
            tools = definition.tools.len(),
            "Financial analyst agent ready"
        );

        Ok(Self {
            definition,
            registry: Arc::new(registry),
        })
    }

    /// Declarative definition for the host
    pub fn definition(&self) -> &AgentDefinition {
        &self.definition
    }

    /// Tool definitions for the host
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }

    /// Shared tool registry
    pub fn registry(&self) -> Arc<ToolRegistry> {
        Arc::clone(&self.registry)
    }

    /// Call one of the agent's tools by name
    pub async fn call_tool(&self, name: &str, params: Value) -> AgentResult<Value> {
        self.registry.execute(name, params).await
    }
}
