//! UnifiedError trait implementation for SwarmError

use super::types::{SwarmError, UnifiedError};

impl UnifiedError for SwarmError {
    fn error_code(&self) -> &str {
        match self {
            Self::Config { .. } => "CONFIG_ERROR",
            Self::AgentConstruction { .. } => "AGENT_CONSTRUCTION_ERROR",
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::InvalidLogEntry { .. } => "INVALID_LOG_ENTRY",
            Self::Io { .. } => "IO_ERROR",
            Self::Json { .. } => "JSON_ERROR",
            Self::Other { .. } => "OTHER_ERROR",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Config { message, .. } => message,
            Self::AgentConstruction { message, .. } => message,
            Self::NotInitialized => "Agent registry not initialized",
            Self::InvalidLogEntry { message } => message,
            Self::Io { message, .. } => message,
            Self::Json { message } => message,
            Self::Other { message } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::AgentConstruction { agent, .. } => Some(agent),
            Self::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}
