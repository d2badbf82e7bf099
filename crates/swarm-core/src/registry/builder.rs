//! Builder for AgentRegistry

use super::types::{AgentRegistry, RegistryInner};
use crate::agents::{AgentFactory, BuiltinAgentFactory};
use crate::config::{CredentialSource, DEFAULT_CREDENTIAL_VAR, EnvCredentials, SwarmConfig};
use crate::experiment::{ExperimentSink, FileExperimentLog};
use parking_lot::RwLock;
use std::sync::Arc;

/// Fluent builder for [`AgentRegistry`]
///
/// Unset parts default to the built-in agent constructors, environment
/// credentials, the `GOOGLE_API_KEY` variable and a file log at
/// `logs/experiment_data.json`.
#[derive(Default)]
pub struct AgentRegistryBuilder {
    factory: Option<Arc<dyn AgentFactory>>,
    credentials: Option<Arc<dyn CredentialSource>>,
    sink: Option<Arc<dyn ExperimentSink>>,
    credential_var: Option<String>,
}

impl AgentRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factory(mut self, factory: Arc<dyn AgentFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn credentials(mut self, credentials: Arc<dyn CredentialSource>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn sink(mut self, sink: Arc<dyn ExperimentSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Name of the credential that must be present for `initialize` to succeed
    pub fn credential_var(mut self, var: impl Into<String>) -> Self {
        self.credential_var = Some(var.into());
        self
    }

    pub fn build(self) -> AgentRegistry {
        AgentRegistry {
            inner: RwLock::new(RegistryInner::default()),
            factory: self
                .factory
                .unwrap_or_else(|| Arc::new(BuiltinAgentFactory::new())),
            credentials: self.credentials.unwrap_or_else(|| Arc::new(EnvCredentials)),
            sink: self.sink.unwrap_or_else(|| {
                Arc::new(FileExperimentLog::new(crate::config::DEFAULT_LOG_FILE))
            }),
            credential_var: self
                .credential_var
                .unwrap_or_else(|| DEFAULT_CREDENTIAL_VAR.to_string()),
        }
    }
}

impl AgentRegistry {
    pub fn builder() -> AgentRegistryBuilder {
        AgentRegistryBuilder::new()
    }

    /// Registry wired from configuration: built-in agents on the configured
    /// model, environment credentials, file log at the configured path
    pub fn from_config(config: &SwarmConfig) -> Self {
        Self::builder()
            .factory(Arc::new(BuiltinAgentFactory::with_model(config.model.clone())))
            .credentials(Arc::new(EnvCredentials))
            .sink(Arc::new(FileExperimentLog::new(&config.log_file)))
            .credential_var(config.credential_var.clone())
            .build()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::builder().build()
    }
}
