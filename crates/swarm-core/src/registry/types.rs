//! Agent registry state

use crate::agents::{Agent, AgentFactory, AgentKind};
use crate::config::CredentialSource;
use crate::experiment::ExperimentSink;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Component name used for the registry's experiment entries
pub const REGISTRY_COMPONENT: &str = "AgentRegistry";

/// Lifecycle state of a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// No agents loaded; lookups fail
    Uninitialized,
    /// All three agents loaded
    Ready,
}

/// Owned agents plus the initialized flag, guarded by one lock
#[derive(Default)]
pub(super) struct RegistryInner {
    /// Insertion-ordered: auditor, fixer, judge
    pub(super) agents: Vec<Agent>,
    pub(super) initialized: bool,
}

impl RegistryInner {
    pub(super) fn names(&self) -> Vec<String> {
        self.agents
            .iter()
            .map(|a| a.kind().as_str().to_string())
            .collect()
    }

    pub(super) fn get(&self, kind: AgentKind) -> Option<Agent> {
        self.agents.iter().find(|a| a.kind() == kind).cloned()
    }
}

/// Directory of the swarm's agents
///
/// Construct one explicitly with [`AgentRegistry::builder`] or
/// [`AgentRegistry::from_config`] and pass it to whatever needs agents;
/// [`get_registry`](super::get_registry) exists for callers that want a
/// process-wide instance instead.
pub struct AgentRegistry {
    pub(super) inner: RwLock<RegistryInner>,
    pub(super) factory: Arc<dyn AgentFactory>,
    pub(super) credentials: Arc<dyn CredentialSource>,
    pub(super) sink: Arc<dyn ExperimentSink>,
    pub(super) credential_var: String,
}

impl fmt::Debug for AgentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("AgentRegistry")
            .field("initialized", &inner.initialized)
            .field("agents", &inner.names())
            .field("credential_var", &self.credential_var)
            .finish()
    }
}
