//! Experiment log entry types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Kind of action an entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionType {
    /// Code analysis or registry bookkeeping
    #[serde(rename = "CODE_ANALYSIS")]
    Analysis,
    /// Code generation
    #[serde(rename = "CODE_GEN")]
    Generation,
    /// Diagnostics and failures
    #[serde(rename = "DEBUG")]
    Debug,
    /// A fix applied to the code
    #[serde(rename = "FIX")]
    Fix,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Analysis => "CODE_ANALYSIS",
            ActionType::Generation => "CODE_GEN",
            ActionType::Debug => "DEBUG",
            ActionType::Fix => "FIX",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome recorded with an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    #[default]
    Success,
    Failure,
}

/// Details mapping of an entry
///
/// `input_prompt` and `output_response` are always present; extra fields are
/// carried through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentDetails {
    fields: Map<String, Value>,
}

impl ExperimentDetails {
    pub fn new(input_prompt: impl Into<String>, output_response: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("input_prompt".to_string(), Value::String(input_prompt.into()));
        fields.insert(
            "output_response".to_string(),
            Value::String(output_response.into()),
        );
        Self { fields }
    }

    /// Attach an extra field
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn input_prompt(&self) -> &str {
        self.fields
            .get("input_prompt")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn output_response(&self) -> &str {
        self.fields
            .get("output_response")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// One record of the experiment log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentEntry {
    pub id: Uuid,
    /// RFC 3339 timestamp
    pub timestamp: String,
    pub agent_name: String,
    /// Model identifier, or `N/A` for non-LLM components
    pub model_used: String,
    pub action: ActionType,
    pub details: Value,
    pub status: EntryStatus,
}

impl ExperimentEntry {
    /// Create an entry stamped with a fresh id and the current time
    pub fn new(
        agent_name: impl Into<String>,
        model_used: impl Into<String>,
        action: ActionType,
        details: ExperimentDetails,
        status: EntryStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            agent_name: agent_name.into(),
            model_used: model_used.into(),
            action,
            details: details.into_value(),
            status,
        }
    }

    /// The `input_prompt` detail, if present
    pub fn input_prompt(&self) -> Option<&str> {
        self.details.get("input_prompt").and_then(Value::as_str)
    }

    /// The `output_response` detail, if present
    pub fn output_response(&self) -> Option<&str> {
        self.details.get("output_response").and_then(Value::as_str)
    }
}
