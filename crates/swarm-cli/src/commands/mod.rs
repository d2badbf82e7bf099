//! CLI command implementations

pub mod agents;
pub mod logs;
