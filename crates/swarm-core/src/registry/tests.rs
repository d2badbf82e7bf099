//! Tests for AgentRegistry

use super::types::{AgentRegistry, REGISTRY_COMPONENT, RegistryState};
use crate::agents::{
    Agent, AgentKind, AuditorAgent, BuiltinAgentFactory, FixerAgent, JudgeAgent,
    MockAgentFactory, SwarmAgent,
};
use crate::config::{CredentialSource, StaticCredentials};
use crate::error::SwarmError;
use crate::experiment::{
    ActionType, EntryStatus, ExperimentEntry, ExperimentSink, MemoryExperimentLog,
};
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

const KEY_VAR: &str = "SWARM_UNIT_TEST_API_KEY";

fn registry_with(sink: Arc<MemoryExperimentLog>) -> AgentRegistry {
    AgentRegistry::builder()
        .factory(Arc::new(BuiltinAgentFactory::with_model("gemini-2.0-flash")))
        .credentials(Arc::new(StaticCredentials::new().with(KEY_VAR, "test-key")))
        .credential_var(KEY_VAR)
        .sink(sink)
        .build()
}

fn entries(sink: &MemoryExperimentLog) -> Vec<ExperimentEntry> {
    sink.entries().unwrap()
}

// ===== State Tests =====

#[test]
fn test_new_registry_is_uninitialized() {
    let registry = registry_with(Arc::new(MemoryExperimentLog::new()));
    assert!(!registry.is_initialized());
    assert_eq!(registry.state(), RegistryState::Uninitialized);
    assert!(registry.list_agents().is_empty());
}

#[test]
fn test_lookups_fail_before_initialize() {
    let registry = registry_with(Arc::new(MemoryExperimentLog::new()));

    assert_eq!(registry.get_agent("auditor").unwrap_err(), SwarmError::NotInitialized);
    assert_eq!(registry.get_agent("nonexistent").unwrap_err(), SwarmError::NotInitialized);
    assert!(registry.get_auditor().unwrap_err().is_not_initialized());
    assert!(registry.get_fixer().unwrap_err().is_not_initialized());
    assert!(registry.get_judge().unwrap_err().is_not_initialized());
}

// ===== Initialization Tests =====

#[test]
fn test_initialize_loads_three_agents_in_order() {
    let sink = Arc::new(MemoryExperimentLog::new());
    let registry = registry_with(sink.clone());

    registry.initialize().unwrap();

    assert!(registry.is_initialized());
    assert_eq!(registry.state(), RegistryState::Ready);
    assert_eq!(registry.list_agents(), vec!["auditor", "fixer", "judge"]);

    let logged = entries(&sink);
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].agent_name, REGISTRY_COMPONENT);
    assert_eq!(logged[0].model_used, "N/A");
    assert_eq!(logged[0].action, ActionType::Analysis);
    assert_eq!(logged[0].status, EntryStatus::Success);
    assert_eq!(logged[0].input_prompt(), Some("Agent registry initialization"));
    assert_eq!(
        logged[0].output_response(),
        Some("Successfully loaded 3 agents: [auditor, fixer, judge]")
    );
}

#[test]
fn test_initialize_twice_is_skipped() {
    let sink = Arc::new(MemoryExperimentLog::new());
    let registry = registry_with(sink.clone());

    registry.initialize().unwrap();
    let auditor = registry.get_agent("auditor").unwrap().unwrap();

    registry.initialize().unwrap();

    let again = registry.get_agent("auditor").unwrap().unwrap();
    assert!(auditor.ptr_eq(&again));
    assert_eq!(registry.list_agents().len(), 3);
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_initialize_without_credential() {
    let sink = Arc::new(MemoryExperimentLog::new());
    let mut factory = MockAgentFactory::new();
    factory.expect_build().times(0);

    let registry = AgentRegistry::builder()
        .factory(Arc::new(factory))
        .credentials(Arc::new(StaticCredentials::new()))
        .credential_var(KEY_VAR)
        .sink(sink.clone())
        .build();

    let err = registry.initialize().unwrap_err();
    assert!(matches!(err, SwarmError::Config { .. }));
    assert!(err.to_string().contains(KEY_VAR));
    assert!(!registry.is_initialized());

    let logged = entries(&sink);
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].action, ActionType::Debug);
    assert_eq!(logged[0].status, EntryStatus::Failure);
    assert!(
        logged[0]
            .output_response()
            .unwrap()
            .starts_with("Failed to initialize: Configuration error")
    );
}

#[test]
fn test_initialize_failure_releases_built_agents() {
    let sink = Arc::new(MemoryExperimentLog::new());
    let auditor = Arc::new(AuditorAgent::with_model("m").unwrap());

    let mut factory = MockAgentFactory::new();
    let handed_out = auditor.clone();
    factory
        .expect_build()
        .withf(|kind| *kind == AgentKind::Auditor)
        .times(1)
        .returning(move |_| Ok(Agent::Auditor(handed_out.clone())));
    factory
        .expect_build()
        .withf(|kind| *kind == AgentKind::Fixer)
        .times(1)
        .returning(|_| Err(SwarmError::agent_construction("fixer", "model unavailable")));
    factory
        .expect_build()
        .withf(|kind| *kind == AgentKind::Judge)
        .times(0);

    let registry = AgentRegistry::builder()
        .factory(Arc::new(factory))
        .credentials(Arc::new(StaticCredentials::new().with(KEY_VAR, "k")))
        .credential_var(KEY_VAR)
        .sink(sink.clone())
        .build();

    let err = registry.initialize().unwrap_err();
    assert_eq!(err, SwarmError::agent_construction("fixer", "model unavailable"));
    assert!(!registry.is_initialized());
    assert!(registry.list_agents().is_empty());

    // only the mock's captured handle and ours remain
    assert_eq!(Arc::strong_count(&auditor), 2);

    let logged = entries(&sink);
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].status, EntryStatus::Failure);
}

#[test]
fn test_initialize_wraps_foreign_construction_errors() {
    let mut factory = MockAgentFactory::new();
    factory
        .expect_build()
        .returning(|_| Err(SwarmError::other("socket closed")));

    let registry = AgentRegistry::builder()
        .factory(Arc::new(factory))
        .credentials(Arc::new(StaticCredentials::new().with(KEY_VAR, "k")))
        .credential_var(KEY_VAR)
        .sink(Arc::new(MemoryExperimentLog::new()))
        .build();

    let err = registry.initialize().unwrap_err();
    assert!(matches!(
        err,
        SwarmError::AgentConstruction { ref agent, .. } if agent == "auditor"
    ));
}

#[test]
fn test_initialize_rejects_mismatched_agent_kind() {
    let mut factory = MockAgentFactory::new();
    factory
        .expect_build()
        .returning(|_| Ok(JudgeAgent::with_model("m").unwrap().into()));

    let registry = AgentRegistry::builder()
        .factory(Arc::new(factory))
        .credentials(Arc::new(StaticCredentials::new().with(KEY_VAR, "k")))
        .credential_var(KEY_VAR)
        .sink(Arc::new(MemoryExperimentLog::new()))
        .build();

    assert!(registry.initialize().is_err());
    assert!(!registry.is_initialized());
}

/// Credential that can be supplied after the registry is built
#[derive(Default)]
struct LateCredential(Mutex<Option<String>>);

impl LateCredential {
    fn set(&self, value: &str) {
        *self.0.lock() = Some(value.to_string());
    }
}

impl CredentialSource for LateCredential {
    fn get(&self, name: &str) -> Option<String> {
        if name == KEY_VAR { self.0.lock().clone() } else { None }
    }
}

#[test]
fn test_initialize_after_failure_can_succeed() {
    let sink = Arc::new(MemoryExperimentLog::new());
    let credential = Arc::new(LateCredential::default());
    let registry = AgentRegistry::builder()
        .factory(Arc::new(BuiltinAgentFactory::with_model("m")))
        .credentials(credential.clone())
        .credential_var(KEY_VAR)
        .sink(sink.clone())
        .build();

    assert!(matches!(registry.initialize(), Err(SwarmError::Config { .. })));
    assert_eq!(registry.state(), RegistryState::Uninitialized);

    credential.set("late-key");
    registry.initialize().unwrap();

    assert_eq!(registry.state(), RegistryState::Ready);
    assert_eq!(registry.list_agents(), vec!["auditor", "fixer", "judge"]);

    let logged = entries(&sink);
    assert_eq!(logged.len(), 2);
    assert_eq!(logged[0].status, EntryStatus::Failure);
    assert_eq!(logged[1].status, EntryStatus::Success);
}

// ===== Lookup Tests =====

#[test]
fn test_get_agent_case_insensitive() {
    let registry = registry_with(Arc::new(MemoryExperimentLog::new()));
    registry.initialize().unwrap();

    let upper = registry.get_agent("AUDITOR").unwrap().unwrap();
    let lower = registry.get_agent("auditor").unwrap().unwrap();
    assert!(upper.ptr_eq(&lower));
    assert_eq!(upper.kind(), AgentKind::Auditor);
}

#[test]
fn test_get_agent_unknown_name_is_none() {
    let registry = registry_with(Arc::new(MemoryExperimentLog::new()));
    registry.initialize().unwrap();

    assert!(registry.get_agent("nonexistent").unwrap().is_none());
    assert!(registry.get_agent("").unwrap().is_none());
    assert!(registry.is_initialized());
}

#[test]
fn test_typed_getters() {
    let registry = registry_with(Arc::new(MemoryExperimentLog::new()));
    registry.initialize().unwrap();

    let auditor: Arc<AuditorAgent> = registry.get_auditor().unwrap().unwrap();
    let fixer: Arc<FixerAgent> = registry.get_fixer().unwrap().unwrap();
    let judge: Arc<JudgeAgent> = registry.get_judge().unwrap().unwrap();

    let by_name = registry.get_agent("Fixer").unwrap().unwrap();
    assert!(Arc::ptr_eq(by_name.as_fixer().unwrap(), &fixer));
    assert_eq!(auditor.profile().model, "gemini-2.0-flash");
    assert_eq!(judge.profile().name, "Judge");
}

// ===== Shutdown Tests =====

#[test]
fn test_shutdown_uninitialized_is_noop() {
    let sink = Arc::new(MemoryExperimentLog::new());
    let registry = registry_with(sink.clone());

    registry.shutdown();

    assert!(!registry.is_initialized());
    assert!(sink.is_empty());
}

#[test]
fn test_shutdown_clears_and_logs_once() {
    let sink = Arc::new(MemoryExperimentLog::new());
    let registry = registry_with(sink.clone());
    registry.initialize().unwrap();

    registry.shutdown();
    registry.shutdown();

    assert!(!registry.is_initialized());
    assert!(registry.list_agents().is_empty());
    assert!(registry.get_fixer().unwrap_err().is_not_initialized());

    let logged = entries(&sink);
    assert_eq!(logged.len(), 2);
    assert_eq!(logged[1].action, ActionType::Analysis);
    assert_eq!(logged[1].input_prompt(), Some("Agent registry shutdown"));
    assert_eq!(
        logged[1].output_response(),
        Some("All agents released and registry cleared")
    );
}

#[test]
fn test_reinitialize_after_shutdown_builds_fresh_agents() {
    let registry = registry_with(Arc::new(MemoryExperimentLog::new()));
    registry.initialize().unwrap();
    let first = registry.get_agent("judge").unwrap().unwrap();

    registry.shutdown();
    registry.initialize().unwrap();

    let second = registry.get_agent("judge").unwrap().unwrap();
    assert!(!first.ptr_eq(&second));
    assert_eq!(registry.list_agents(), vec!["auditor", "fixer", "judge"]);
}

// ===== Sink Failure Tests =====

struct FailingSink;

impl ExperimentSink for FailingSink {
    fn record(&self, _entry: ExperimentEntry) -> crate::error::SwarmResult<()> {
        Err(SwarmError::io("disk full"))
    }

    fn entries(&self) -> crate::error::SwarmResult<Vec<ExperimentEntry>> {
        Ok(Vec::new())
    }
}

#[test]
fn test_sink_failure_does_not_change_outcome() {
    let registry = AgentRegistry::builder()
        .factory(Arc::new(BuiltinAgentFactory::with_model("m")))
        .credentials(Arc::new(StaticCredentials::new().with(KEY_VAR, "k")))
        .credential_var(KEY_VAR)
        .sink(Arc::new(FailingSink))
        .build();

    registry.initialize().unwrap();
    assert!(registry.is_initialized());
    registry.shutdown();
    assert!(!registry.is_initialized());
}

#[test]
fn test_debug_output() {
    let registry = registry_with(Arc::new(MemoryExperimentLog::new()));
    registry.initialize().unwrap();
    let debug = format!("{:?}", registry);
    assert!(debug.contains("initialized: true"));
    assert!(debug.contains("\"fixer\""));
}

// ===== Diagnostics Tests =====

/// Shared buffer a test subscriber writes formatted events into
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_transitions_emit_diagnostics() {
    let captured = CapturedLogs::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let registry = registry_with(Arc::new(MemoryExperimentLog::new()));
        registry.initialize().unwrap();
        registry.initialize().unwrap();
        assert!(registry.get_agent("nonexistent").unwrap().is_none());
        registry.shutdown();
    });

    let output = captured.contents();
    assert!(output.contains("Agent registry initialized"));
    assert!(output.contains("Agent registry already initialized"));
    assert!(output.contains("Agent not found in registry"));
    assert!(output.contains("nonexistent"));
    assert!(output.contains(r#"available=["auditor", "fixer", "judge"]"#));
    assert!(output.contains("Shutting down agent registry"));
    assert!(output.contains("Agent registry shutdown complete"));
}

#[test]
fn test_initialize_failure_emits_error_diagnostic() {
    let captured = CapturedLogs::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let registry = AgentRegistry::builder()
            .credentials(Arc::new(StaticCredentials::new()))
            .credential_var(KEY_VAR)
            .sink(Arc::new(MemoryExperimentLog::new()))
            .build();
        assert!(registry.initialize().is_err());
    });

    let output = captured.contents();
    assert!(output.contains("ERROR"));
    assert!(output.contains("Error initializing agent registry"));
}
