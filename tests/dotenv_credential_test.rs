//! Credentials defined only in `.env` reach a registry built without `from_env`
//!
//! Kept in its own test binary: it changes the working directory of the process.

use std::sync::Arc;
use swarm::AgentRegistry;
use swarm::experiment::MemoryExperimentLog;
use tempfile::TempDir;

const VAR: &str = "SWARM_DOTENV_ONLY_TEST_KEY";

#[test]
fn test_builder_registry_reads_credential_from_dotenv() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".env"), format!("{}=secret\n", VAR)).unwrap();
    assert!(std::env::var(VAR).is_err());
    std::env::set_current_dir(dir.path()).unwrap();

    let registry = AgentRegistry::builder()
        .credential_var(VAR)
        .sink(Arc::new(MemoryExperimentLog::new()))
        .build();

    registry.initialize().unwrap();
    assert!(registry.is_initialized());
    assert_eq!(std::env::var(VAR).as_deref(), Ok("secret"));
}
