//! Initialization and shutdown

use super::types::{AgentRegistry, REGISTRY_COMPONENT, RegistryState};
use crate::agents::{Agent, AgentKind};
use crate::error::{SwarmError, SwarmResult};
use crate::experiment::{ActionType, EntryStatus, ExperimentDetails, log_experiment};
use tracing::{error, info, warn};

const INIT_PROMPT: &str = "Agent registry initialization";
const SHUTDOWN_PROMPT: &str = "Agent registry shutdown";

impl AgentRegistry {
    /// Load the auditor, fixer and judge
    ///
    /// Requires the configured credential. Agents are built in order and only
    /// stored once all three succeed; on any failure the ones already built are
    /// dropped and the registry stays uninitialized. Calling this on a ready
    /// registry logs a warning and changes nothing.
    pub fn initialize(&self) -> SwarmResult<()> {
        let mut inner = self.inner.write();
        if inner.initialized {
            warn!("Agent registry already initialized");
            return Ok(());
        }

        info!("Initializing agent registry");

        match self.load_agents() {
            Ok(agents) => {
                inner.agents = agents;
                inner.initialized = true;
                let names = inner.names();
                drop(inner);

                info!(count = names.len(), agents = ?names, "Agent registry initialized");
                self.record(
                    ActionType::Analysis,
                    ExperimentDetails::new(
                        INIT_PROMPT,
                        format!(
                            "Successfully loaded {} agents: [{}]",
                            names.len(),
                            names.join(", ")
                        ),
                    ),
                    EntryStatus::Success,
                );
                Ok(())
            }
            Err(err) => {
                drop(inner);
                error!(error = %err, "Error initializing agent registry");
                self.record(
                    ActionType::Debug,
                    ExperimentDetails::new(INIT_PROMPT, format!("Failed to initialize: {}", err)),
                    EntryStatus::Failure,
                );
                Err(err)
            }
        }
    }

    /// Release all agents and return to the uninitialized state
    ///
    /// Does nothing, and records nothing, when the registry is not initialized.
    pub fn shutdown(&self) {
        let mut inner = self.inner.write();
        if !inner.initialized {
            return;
        }

        info!("Shutting down agent registry");
        inner.agents.clear();
        inner.initialized = false;
        drop(inner);

        info!("Agent registry shutdown complete");
        self.record(
            ActionType::Analysis,
            ExperimentDetails::new(SHUTDOWN_PROMPT, "All agents released and registry cleared"),
            EntryStatus::Success,
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.read().initialized
    }

    pub fn state(&self) -> RegistryState {
        if self.is_initialized() {
            RegistryState::Ready
        } else {
            RegistryState::Uninitialized
        }
    }

    /// Build all agents into a staging list; nothing is stored here
    fn load_agents(&self) -> SwarmResult<Vec<Agent>> {
        if self.credentials.get(&self.credential_var).is_none() {
            return Err(SwarmError::config(format!(
                "{} not found in environment variables",
                self.credential_var
            )));
        }

        let mut staged = Vec::with_capacity(AgentKind::ALL.len());
        for kind in AgentKind::ALL {
            info!(agent = %kind, "Loading agent");
            let agent = self.factory.build(kind).map_err(|err| match err {
                SwarmError::AgentConstruction { .. } => err,
                other => SwarmError::agent_construction(kind.as_str(), other.to_string()),
            })?;
            if agent.kind() != kind {
                return Err(SwarmError::agent_construction(
                    kind.as_str(),
                    format!("factory returned a {} agent", agent.kind()),
                ));
            }
            staged.push(agent);
        }
        Ok(staged)
    }

    /// Write a registry entry; a failing sink never changes the outcome
    fn record(&self, action: ActionType, details: ExperimentDetails, status: EntryStatus) {
        if let Err(err) = log_experiment(
            self.sink.as_ref(),
            REGISTRY_COMPONENT,
            "N/A",
            action,
            details,
            status,
        ) {
            warn!(error = %err, "Failed to write experiment entry");
        }
    }
}
