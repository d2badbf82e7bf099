//! Configuration model

use super::logging_config::LoggingConfig;
use std::path::PathBuf;

/// Environment variable holding the API credential the agents require
pub const DEFAULT_CREDENTIAL_VAR: &str = "GOOGLE_API_KEY";

/// Model identifier handed to the agents when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default location of the experiment log
pub const DEFAULT_LOG_FILE: &str = "logs/experiment_data.json";

/// Top-level swarm configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwarmConfig {
    /// Name of the environment variable that must hold the API credential
    pub credential_var: String,
    /// Model identifier used by the agents
    pub model: String,
    /// Experiment log file
    pub log_file: PathBuf,
    /// Console logging settings
    pub logging: LoggingConfig,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            credential_var: DEFAULT_CREDENTIAL_VAR.to_string(),
            model: DEFAULT_MODEL.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            logging: LoggingConfig::default(),
        }
    }
}

impl SwarmConfig {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> crate::error::SwarmResult<Self> {
        super::env_loader::load_from_env()
    }

    /// Override the experiment log path
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Override the credential variable name
    pub fn with_credential_var(mut self, var: impl Into<String>) -> Self {
        self.credential_var = var.into();
        self
    }
}
