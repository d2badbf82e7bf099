//! Agent registry for the refactoring swarm
//!
//! [`AgentRegistry`] owns the auditor, fixer and judge once `initialize` has
//! succeeded, and hands out shared handles by name until `shutdown`.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use swarm_core::config::StaticCredentials;
//! use swarm_core::experiment::MemoryExperimentLog;
//! use swarm_core::registry::AgentRegistry;
//!
//! let registry = AgentRegistry::builder()
//!     .credentials(Arc::new(StaticCredentials::new().with("GOOGLE_API_KEY", "key")))
//!     .sink(Arc::new(MemoryExperimentLog::new()))
//!     .build();
//!
//! registry.initialize()?;
//! assert_eq!(registry.list_agents(), vec!["auditor", "fixer", "judge"]);
//!
//! let fixer = registry.get_fixer()?.expect("fixer is registered");
//! println!("{}", fixer.fix_prompt("calc.py", "x = 1", &[]));
//!
//! registry.shutdown();
//! assert!(registry.get_fixer().is_err());
//! # Ok::<(), swarm_core::SwarmError>(())
//! ```

mod builder;
pub mod global;
mod lifecycle;
mod lookup;
#[cfg(test)]
mod tests;
mod types;

pub use builder::AgentRegistryBuilder;
pub use global::{get_auditor_agent, get_fixer_agent, get_judge_agent, get_registry};
pub use types::{AgentRegistry, REGISTRY_COMPONENT, RegistryState};
