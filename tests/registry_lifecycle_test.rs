//! End-to-end registry lifecycle against a file-backed experiment log

use std::sync::Arc;
use swarm::config::{EnvCredentials, StaticCredentials, SwarmConfig};
use swarm::experiment::{
    ActionType, EntryStatus, ExperimentSink, FileExperimentLog, validate_log_file,
};
use swarm::{AgentRegistry, RegistryState, SwarmError, get_registry};
use tempfile::TempDir;

#[test]
fn test_full_lifecycle_with_file_log() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("logs").join("experiment_data.json");
    let log = Arc::new(FileExperimentLog::new(&log_path));

    let registry = AgentRegistry::builder()
        .credentials(Arc::new(StaticCredentials::new().with("GOOGLE_API_KEY", "key")))
        .sink(log.clone())
        .build();

    registry.initialize().unwrap();
    assert_eq!(registry.state(), RegistryState::Ready);
    assert_eq!(registry.list_agents(), vec!["auditor", "fixer", "judge"]);

    let fixer = registry.get_fixer().unwrap().expect("fixer registered");
    assert!(fixer.fix_prompt("calc.py", "x = 1", &[]).contains("x = 1"));

    registry.shutdown();
    assert!(registry.list_agents().is_empty());
    assert_eq!(registry.get_fixer().unwrap_err(), SwarmError::NotInitialized);

    let entries = log.entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].action, ActionType::Analysis);
    assert_eq!(entries[0].status, EntryStatus::Success);
    assert_eq!(entries[1].input_prompt(), Some("Agent registry shutdown"));

    let report = validate_log_file(&log_path).unwrap();
    assert!(report.is_valid());
    assert_eq!(report.total_entries, 2);
}

#[test]
fn test_missing_env_credential() {
    let dir = TempDir::new().unwrap();
    let config = SwarmConfig::default()
        .with_credential_var("SWARM_IT_CREDENTIAL_NEVER_SET")
        .with_log_file(dir.path().join("log.json"));
    let registry = AgentRegistry::from_config(&config);

    let err = registry.initialize().unwrap_err();
    assert!(matches!(err, SwarmError::Config { .. }));
    assert!(!registry.is_initialized());

    let entries = FileExperimentLog::new(&config.log_file).entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, ActionType::Debug);
    assert_eq!(entries[0].status, EntryStatus::Failure);
}

#[test]
fn test_env_credential_read_at_initialize() {
    const VAR: &str = "SWARM_IT_CREDENTIAL_SET_LATER";
    let registry = AgentRegistry::builder()
        .credentials(Arc::new(EnvCredentials))
        .credential_var(VAR)
        .sink(Arc::new(swarm::experiment::MemoryExperimentLog::new()))
        .build();

    assert!(registry.initialize().is_err());

    // SAFETY: the variable name is unique to this test
    unsafe {
        std::env::set_var(VAR, "late-key");
    }
    registry.initialize().unwrap();
    assert!(registry.is_initialized());

    unsafe {
        std::env::remove_var(VAR);
    }
}

#[test]
fn test_process_wide_registry_is_shared() {
    let first = get_registry();
    let second = get_registry();
    assert!(std::ptr::eq(first, second));
}
