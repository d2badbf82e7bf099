//! Process-wide registry instance
//!
//! The shared registry is created on first access from the environment
//! configuration. It is never initialized implicitly: callers still call
//! `get_registry().initialize()` themselves.

use super::types::AgentRegistry;
use crate::agents::{AuditorAgent, FixerAgent, JudgeAgent};
use crate::config::SwarmConfig;
use crate::error::SwarmResult;
use std::sync::{Arc, OnceLock};

static GLOBAL_REGISTRY: OnceLock<AgentRegistry> = OnceLock::new();

/// Get the process-wide registry, creating it on first call
pub fn get_registry() -> &'static AgentRegistry {
    GLOBAL_REGISTRY.get_or_init(|| {
        let config = SwarmConfig::from_env().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Invalid swarm configuration, using defaults");
            SwarmConfig::default()
        });
        tracing::debug!("Created process-wide agent registry");
        AgentRegistry::from_config(&config)
    })
}

/// Auditor from the process-wide registry
pub fn get_auditor_agent() -> SwarmResult<Option<Arc<AuditorAgent>>> {
    get_registry().get_auditor()
}

/// Fixer from the process-wide registry
pub fn get_fixer_agent() -> SwarmResult<Option<Arc<FixerAgent>>> {
    get_registry().get_fixer()
}

/// Judge from the process-wide registry
pub fn get_judge_agent() -> SwarmResult<Option<Arc<JudgeAgent>>> {
    get_registry().get_judge()
}
