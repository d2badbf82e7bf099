//! Refactoring Swarm Core Library
//!
//! This crate provides the agent registry of the refactoring swarm: the auditor,
//! fixer and judge agents, the registry that owns them, configuration, and the
//! structured experiment log every registry transition is recorded in.

pub mod agents;
pub mod config;
pub mod error;
pub mod experiment;
pub mod registry;

// Re-export commonly used types
pub use agents::{Agent, AgentKind, AuditorAgent, FixerAgent, JudgeAgent, SwarmAgent};
pub use config::SwarmConfig;
pub use error::{SwarmError, SwarmResult, UnifiedError};
pub use experiment::{ActionType, ExperimentDetails, ExperimentEntry, log_experiment};
pub use registry::{
    AgentRegistry, RegistryState, get_auditor_agent, get_fixer_agent, get_judge_agent,
    get_registry,
};
