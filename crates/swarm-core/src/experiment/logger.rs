//! Entry points for writing experiment entries

use super::entry::{ActionType, EntryStatus, ExperimentDetails, ExperimentEntry};
use super::storage::ExperimentSink;
use super::validation::validate_log_entry;
use crate::error::SwarmResult;

/// Validate and record one experiment entry
///
/// Returns the stored entry. Invalid entries are rejected before they reach the
/// sink.
pub fn log_experiment(
    sink: &dyn ExperimentSink,
    agent_name: &str,
    model_used: &str,
    action: ActionType,
    details: ExperimentDetails,
    status: EntryStatus,
) -> SwarmResult<ExperimentEntry> {
    let entry = ExperimentEntry::new(agent_name, model_used, action, details, status);
    validate_log_entry(&entry)?;
    sink.record(entry.clone())?;
    tracing::debug!(
        agent = %entry.agent_name,
        action = %entry.action,
        id = %entry.id,
        "Recorded experiment entry"
    );
    Ok(entry)
}

/// Record one iteration of the audit/fix/judge loop
///
/// The iteration number is stored in the details under `iteration`.
pub fn log_iteration(
    sink: &dyn ExperimentSink,
    iteration: u32,
    agent_name: &str,
    model_used: &str,
    action: ActionType,
    details: ExperimentDetails,
) -> SwarmResult<ExperimentEntry> {
    log_experiment(
        sink,
        agent_name,
        model_used,
        action,
        details.with("iteration", iteration),
        EntryStatus::Success,
    )
}
