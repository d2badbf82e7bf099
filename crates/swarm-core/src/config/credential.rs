//! Credential lookup

use std::collections::HashMap;

/// Source of credential values, consulted at registry initialization
pub trait CredentialSource: Send + Sync {
    /// Return the non-empty value bound to `name`, if any
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads credentials from the process environment at call time
///
/// The nearest `.env` file is loaded on first use, so a credential defined only
/// there is visible without calling [`load_from_env`](super::load_from_env).
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn get(&self, name: &str) -> Option<String> {
        super::env_loader::load_dotenv();
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

/// Fixed set of credentials, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    values: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl CredentialSource for StaticCredentials {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).filter(|v| !v.is_empty()).cloned()
    }
}
