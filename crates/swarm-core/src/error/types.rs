//! Core error types and traits

use thiserror::Error;

/// Result type alias for swarm operations
pub type SwarmResult<T> = Result<T, SwarmError>;

/// Unified error trait implemented by [`SwarmError`].
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Stable code for programmatic handling
    fn error_code(&self) -> &str;

    /// Human-readable message without the variant prefix
    fn message(&self) -> &str;

    /// Optional context about where the error occurred
    fn context(&self) -> Option<&str> {
        None
    }
}

/// Main error type for the swarm
///
/// An unknown agent name is deliberately absent from this enum: lookups report it
/// as `Ok(None)` rather than an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwarmError {
    /// A required setting or credential is missing or invalid
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// An agent constructor failed during registry initialization
    #[error("Failed to construct {agent} agent: {message}")]
    AgentConstruction { agent: String, message: String },

    /// A lookup was attempted before the registry was initialized
    #[error("Agent registry not initialized. Call initialize() first.")]
    NotInitialized,

    /// A structured log entry is missing required fields
    #[error("Invalid log entry: {message}")]
    InvalidLogEntry { message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// Generic error
    #[error("Error: {message}")]
    Other { message: String },
}
