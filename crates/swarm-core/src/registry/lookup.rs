//! Agent lookups

use super::types::AgentRegistry;
use crate::agents::{Agent, AgentKind, AuditorAgent, FixerAgent, JudgeAgent};
use crate::error::{SwarmError, SwarmResult};
use std::sync::Arc;
use tracing::warn;

impl AgentRegistry {
    /// Look up an agent by name, ignoring case
    ///
    /// Fails with [`SwarmError::NotInitialized`] before `initialize`. An unknown
    /// name is not an error: it logs the available names and yields `None`.
    pub fn get_agent(&self, name: &str) -> SwarmResult<Option<Agent>> {
        let inner = self.inner.read();
        if !inner.initialized {
            return Err(SwarmError::NotInitialized);
        }

        let agent = name
            .parse::<AgentKind>()
            .ok()
            .and_then(|kind| inner.get(kind));

        if agent.is_none() {
            warn!(
                agent = name,
                available = ?inner.names(),
                "Agent not found in registry"
            );
        }

        Ok(agent)
    }

    pub fn get_auditor(&self) -> SwarmResult<Option<Arc<AuditorAgent>>> {
        Ok(self
            .get_agent(AgentKind::Auditor.as_str())?
            .and_then(|a| a.as_auditor().cloned()))
    }

    pub fn get_fixer(&self) -> SwarmResult<Option<Arc<FixerAgent>>> {
        Ok(self
            .get_agent(AgentKind::Fixer.as_str())?
            .and_then(|a| a.as_fixer().cloned()))
    }

    pub fn get_judge(&self) -> SwarmResult<Option<Arc<JudgeAgent>>> {
        Ok(self
            .get_agent(AgentKind::Judge.as_str())?
            .and_then(|a| a.as_judge().cloned()))
    }

    /// Names of the loaded agents in load order; empty when uninitialized
    pub fn list_agents(&self) -> Vec<String> {
        self.inner.read().names()
    }
}
