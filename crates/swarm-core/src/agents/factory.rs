//! Construction seam between the registry and the agent types

use super::agent::Agent;
use super::auditor::AuditorAgent;
use super::fixer::FixerAgent;
use super::judge::JudgeAgent;
use super::kind::AgentKind;
use crate::error::SwarmResult;

/// Builds one agent of the requested kind
#[cfg_attr(test, mockall::automock)]
pub trait AgentFactory: Send + Sync {
    fn build(&self, kind: AgentKind) -> SwarmResult<Agent>;
}

/// Factory backed by the agents' own constructors
#[derive(Debug, Clone, Default)]
pub struct BuiltinAgentFactory {
    model: Option<String>,
}

impl BuiltinAgentFactory {
    /// Factory using the no-argument constructors
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory that pins every agent to `model`
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
        }
    }
}

impl AgentFactory for BuiltinAgentFactory {
    fn build(&self, kind: AgentKind) -> SwarmResult<Agent> {
        let agent: Agent = match (kind, self.model.as_deref()) {
            (AgentKind::Auditor, None) => AuditorAgent::new()?.into(),
            (AgentKind::Auditor, Some(m)) => AuditorAgent::with_model(m)?.into(),
            (AgentKind::Fixer, None) => FixerAgent::new()?.into(),
            (AgentKind::Fixer, Some(m)) => FixerAgent::with_model(m)?.into(),
            (AgentKind::Judge, None) => JudgeAgent::new()?.into(),
            (AgentKind::Judge, Some(m)) => JudgeAgent::with_model(m)?.into(),
        };
        Ok(agent)
    }
}
