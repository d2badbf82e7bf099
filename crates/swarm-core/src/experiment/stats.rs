//! Aggregate statistics over an experiment log

use super::entry::{ActionType, EntryStatus, ExperimentEntry};
use serde::Serialize;
use std::collections::BTreeMap;

/// Counts over a set of experiment entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperimentStats {
    pub total_entries: usize,
    pub successes: usize,
    pub failures: usize,
    pub by_agent: BTreeMap<String, usize>,
    pub by_action: BTreeMap<ActionType, usize>,
}

/// Compute statistics for `entries`
pub fn get_experiment_stats(entries: &[ExperimentEntry]) -> ExperimentStats {
    let mut stats = ExperimentStats {
        total_entries: entries.len(),
        ..Default::default()
    };

    for entry in entries {
        match entry.status {
            EntryStatus::Success => stats.successes += 1,
            EntryStatus::Failure => stats.failures += 1,
        }
        *stats.by_agent.entry(entry.agent_name.clone()).or_default() += 1;
        *stats.by_action.entry(entry.action).or_default() += 1;
    }

    stats
}
