//! Agent kind enumeration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three roles of the swarm, in construction order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Auditor,
    Fixer,
    Judge,
}

impl AgentKind {
    /// All kinds, in the order the registry constructs them
    pub const ALL: [AgentKind; 3] = [AgentKind::Auditor, AgentKind::Fixer, AgentKind::Judge];

    /// Registry name for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Auditor => "auditor",
            AgentKind::Fixer => "fixer",
            AgentKind::Judge => "judge",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name does not match any agent kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAgentKind(pub String);

impl fmt::Display for UnknownAgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown agent '{}'", self.0)
    }
}

impl std::error::Error for UnknownAgentKind {}

impl FromStr for AgentKind {
    type Err = UnknownAgentKind;

    /// Case-insensitive parse of a registry name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAgentKind(s.to_string()))
    }
}
