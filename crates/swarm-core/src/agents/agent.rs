//! Closed set of agent instances held by the registry

use super::auditor::AuditorAgent;
use super::fixer::FixerAgent;
use super::judge::JudgeAgent;
use super::kind::AgentKind;
use super::profile::AgentProfile;
use std::sync::Arc;

/// Capability shared by every swarm agent
pub trait SwarmAgent: Send + Sync {
    fn profile(&self) -> &AgentProfile;

    fn kind(&self) -> AgentKind {
        self.profile().kind
    }

    fn model(&self) -> &str {
        &self.profile().model
    }
}

/// An agent instance tagged with its role
///
/// Cloning an `Agent` shares the underlying instance.
#[derive(Debug, Clone)]
pub enum Agent {
    Auditor(Arc<AuditorAgent>),
    Fixer(Arc<FixerAgent>),
    Judge(Arc<JudgeAgent>),
}

impl Agent {
    pub fn kind(&self) -> AgentKind {
        match self {
            Agent::Auditor(_) => AgentKind::Auditor,
            Agent::Fixer(_) => AgentKind::Fixer,
            Agent::Judge(_) => AgentKind::Judge,
        }
    }

    /// View the instance through the shared capability trait
    pub fn as_swarm_agent(&self) -> &dyn SwarmAgent {
        match self {
            Agent::Auditor(a) => a.as_ref(),
            Agent::Fixer(f) => f.as_ref(),
            Agent::Judge(j) => j.as_ref(),
        }
    }

    pub fn profile(&self) -> &AgentProfile {
        self.as_swarm_agent().profile()
    }

    pub fn as_auditor(&self) -> Option<&Arc<AuditorAgent>> {
        match self {
            Agent::Auditor(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_fixer(&self) -> Option<&Arc<FixerAgent>> {
        match self {
            Agent::Fixer(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_judge(&self) -> Option<&Arc<JudgeAgent>> {
        match self {
            Agent::Judge(j) => Some(j),
            _ => None,
        }
    }

    /// Whether two handles refer to the same instance
    pub fn ptr_eq(&self, other: &Agent) -> bool {
        match (self, other) {
            (Agent::Auditor(a), Agent::Auditor(b)) => Arc::ptr_eq(a, b),
            (Agent::Fixer(a), Agent::Fixer(b)) => Arc::ptr_eq(a, b),
            (Agent::Judge(a), Agent::Judge(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<AuditorAgent> for Agent {
    fn from(agent: AuditorAgent) -> Self {
        Agent::Auditor(Arc::new(agent))
    }
}

impl From<FixerAgent> for Agent {
    fn from(agent: FixerAgent) -> Self {
        Agent::Fixer(Arc::new(agent))
    }
}

impl From<JudgeAgent> for Agent {
    fn from(agent: JudgeAgent) -> Self {
        Agent::Judge(Arc::new(agent))
    }
}
