//! Validation of experiment entries and log files

use super::entry::ExperimentEntry;
use crate::error::{SwarmError, SwarmResult};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

const REQUIRED_DETAILS: [&str; 2] = ["input_prompt", "output_response"];

/// Check that an entry carries everything later analysis relies on
pub fn validate_log_entry(entry: &ExperimentEntry) -> SwarmResult<()> {
    if entry.agent_name.trim().is_empty() {
        return Err(SwarmError::invalid_log_entry("agent_name is empty"));
    }
    if entry.model_used.trim().is_empty() {
        return Err(SwarmError::invalid_log_entry("model_used is empty"));
    }

    let details = entry
        .details
        .as_object()
        .ok_or_else(|| SwarmError::invalid_log_entry("details must be an object"))?;

    for field in REQUIRED_DETAILS {
        match details.get(field) {
            Some(Value::String(s)) if !s.trim().is_empty() => {}
            Some(Value::String(_)) => {
                return Err(SwarmError::invalid_log_entry(format!(
                    "details.{} is empty",
                    field
                )));
            }
            Some(_) => {
                return Err(SwarmError::invalid_log_entry(format!(
                    "details.{} must be a string",
                    field
                )));
            }
            None => {
                return Err(SwarmError::invalid_log_entry(format!(
                    "details.{} is missing",
                    field
                )));
            }
        }
    }

    Ok(())
}

/// Problem found at one position of a log file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogIssue {
    pub index: usize,
    pub reason: String,
}

/// Result of checking a whole log file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogValidationReport {
    pub path: PathBuf,
    pub total_entries: usize,
    pub valid_entries: usize,
    pub issues: Vec<LogIssue>,
}

impl LogValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate every entry of a JSON array log file
///
/// A missing file is a configuration error and a file that is not a JSON array
/// is a JSON error. Individual bad entries are reported, not raised.
pub fn validate_log_file<P: AsRef<Path>>(path: P) -> SwarmResult<LogValidationReport> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SwarmError::config_with_context(
            "Experiment log file not found",
            path.display().to_string(),
        ));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| SwarmError::io_with_path(e.to_string(), path.display().to_string()))?;
    let values: Vec<Value> = if content.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(&content)?
    };

    let total_entries = values.len();
    let mut issues = Vec::new();
    for (index, value) in values.into_iter().enumerate() {
        let outcome = serde_json::from_value::<ExperimentEntry>(value)
            .map_err(SwarmError::from)
            .and_then(|entry| validate_log_entry(&entry));
        if let Err(err) = outcome {
            issues.push(LogIssue {
                index,
                reason: err.to_string(),
            });
        }
    }

    Ok(LogValidationReport {
        path: path.to_path_buf(),
        total_entries,
        valid_entries: total_entries - issues.len(),
        issues,
    })
}
