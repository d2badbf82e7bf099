//! `swarm logs validate` and `swarm logs stats`

use crate::console;
use anyhow::{Result, bail};
use std::path::Path;
use swarm_core::experiment::{
    ExperimentSink, ExperimentStats, FileExperimentLog, get_experiment_stats, validate_log_file,
};

/// Validate the log file; fails if any entry is invalid
pub fn validate(path: &Path) -> Result<()> {
    let report = validate_log_file(path)?;

    console::header(&format!("Experiment log: {}", path.display()));
    console::field("entries", report.total_entries);
    console::field("valid", report.valid_entries);

    if report.is_valid() {
        console::success("All entries are valid");
        return Ok(());
    }

    for issue in &report.issues {
        console::error(&format!("entry {}: {}", issue.index, issue.reason));
    }
    bail!(
        "{} of {} entries are invalid",
        report.issues.len(),
        report.total_entries
    )
}

/// Print entry counts for the log file
pub fn stats(path: &Path, json: bool) -> Result<()> {
    if !path.exists() {
        console::warn(&format!("No experiment log at {}", path.display()));
        return Ok(());
    }

    let entries = FileExperimentLog::new(path).entries()?;
    let stats = get_experiment_stats(&entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(path, &stats);
    }
    Ok(())
}

fn print_stats(path: &Path, stats: &ExperimentStats) {
    console::header(&format!("Experiment log: {}", path.display()));
    console::field("entries", stats.total_entries);
    console::field("successes", stats.successes);
    console::field("failures", stats.failures);

    if !stats.by_agent.is_empty() {
        println!("\n  By agent:");
        for (agent, count) in &stats.by_agent {
            console::field(agent, count);
        }
    }
    if !stats.by_action.is_empty() {
        println!("\n  By action:");
        for (action, count) in &stats.by_action {
            console::field(action.as_str(), count);
        }
    }
}
