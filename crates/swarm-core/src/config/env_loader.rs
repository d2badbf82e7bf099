//! Environment variable-based configuration loading

use super::logging_config::LogFormat;
use super::model::SwarmConfig;
use crate::error::SwarmResult;
use std::path::PathBuf;
use std::sync::OnceLock;

static DOTENV_LOADED: OnceLock<()> = OnceLock::new();

/// Load the nearest `.env` file into the process environment, once per process
///
/// Variables already set in the environment are left untouched.
pub fn load_dotenv() {
    DOTENV_LOADED.get_or_init(|| {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
    });
}

/// Load configuration from the process environment
///
/// A `.env` file in the working directory (or a parent) is loaded first; variables
/// already set in the environment take precedence over it.
pub fn load_from_env() -> SwarmResult<SwarmConfig> {
    load_dotenv();
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup
///
/// Recognized variables:
/// - `SWARM_CREDENTIAL_VAR`: name of the credential variable (default `GOOGLE_API_KEY`)
/// - `SWARM_MODEL`: model identifier
/// - `SWARM_LOG_FILE`: experiment log path
/// - `SWARM_LOG_LEVEL`, `SWARM_LOG_FORMAT`: console logging
pub fn load_from_lookup<F>(lookup: F) -> SwarmResult<SwarmConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = SwarmConfig::default();
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(var) = non_empty("SWARM_CREDENTIAL_VAR") {
        config.credential_var = var;
    }

    if let Some(model) = non_empty("SWARM_MODEL") {
        config.model = model;
    }

    if let Some(path) = non_empty("SWARM_LOG_FILE") {
        config.log_file = PathBuf::from(path);
    }

    if let Some(level) = non_empty("SWARM_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Some(format) = non_empty("SWARM_LOG_FORMAT") {
        config.logging.format = format.parse::<LogFormat>()?;
    }

    Ok(config)
}
