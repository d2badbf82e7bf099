//! Agent profile containing metadata shared by all roles

use super::kind::AgentKind;
use crate::error::{SwarmError, SwarmResult};
use std::fmt;

/// Static description of an agent instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentProfile {
    /// Role of the agent
    pub kind: AgentKind,
    /// Human-readable name
    pub name: String,
    /// Description of the agent's purpose
    pub description: String,
    /// Model identifier the agent sends requests to
    pub model: String,
    /// System prompt for this agent
    pub system_prompt: String,
}

impl AgentProfile {
    /// Build a profile, rejecting unusable model identifiers
    pub(crate) fn new(
        kind: AgentKind,
        name: &str,
        description: &str,
        model: impl Into<String>,
        system_prompt: &str,
    ) -> SwarmResult<Self> {
        let model = model.into();
        validate_model(kind, &model)?;
        Ok(Self {
            kind,
            name: name.to_string(),
            description: description.to_string(),
            model,
            system_prompt: system_prompt.to_string(),
        })
    }
}

impl fmt::Display for AgentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, model: {})", self.name, self.kind, self.model)
    }
}

fn validate_model(kind: AgentKind, model: &str) -> SwarmResult<()> {
    if model.trim().is_empty() {
        return Err(SwarmError::agent_construction(
            kind.as_str(),
            "model identifier is empty",
        ));
    }
    if model.chars().any(char::is_whitespace) {
        return Err(SwarmError::agent_construction(
            kind.as_str(),
            format!("model identifier '{}' contains whitespace", model),
        ));
    }
    Ok(())
}

/// Model used by the no-argument constructors
pub(crate) fn default_model() -> String {
    std::env::var("SWARM_MODEL")
        .ok()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| crate::config::DEFAULT_MODEL.to_string())
}
