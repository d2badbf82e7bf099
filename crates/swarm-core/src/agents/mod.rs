//! Refactoring swarm agents
//!
//! The swarm has three fixed roles:
//!
//! - **Auditor**: analyzes source files and reports issues
//! - **Fixer**: rewrites code to resolve the reported issues
//! - **Judge**: runs the tests and decides whether a fix is accepted
//!
//! Each role is its own type with a no-argument fallible constructor. The
//! [`Agent`] enum is the closed set the registry stores, and [`AgentFactory`] is
//! the seam through which the registry constructs them.

mod agent;
mod auditor;
mod factory;
mod fixer;
mod judge;
mod kind;
mod profile;

pub use agent::{Agent, SwarmAgent};
pub use auditor::AuditorAgent;
pub use factory::{AgentFactory, BuiltinAgentFactory};
#[cfg(test)]
pub use factory::MockAgentFactory;
pub use fixer::FixerAgent;
pub use judge::JudgeAgent;
pub use kind::{AgentKind, UnknownAgentKind};
pub use profile::AgentProfile;
