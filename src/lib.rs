//! Refactoring swarm
//!
//! Facade over [`swarm_core`]: the auditor, fixer and judge agents, the registry
//! that owns them, and the structured experiment log.

pub use swarm_core::*;
