//! Judge agent: validates fixes against the test suite

use super::agent::SwarmAgent;
use super::kind::AgentKind;
use super::profile::{AgentProfile, default_model};
use crate::error::SwarmResult;

/// Decides whether a fix passes, or sends it back to the fixer
#[derive(Debug, Clone)]
pub struct JudgeAgent {
    profile: AgentProfile,
}

impl JudgeAgent {
    /// Construct with the model from `SWARM_MODEL` or the default model
    pub fn new() -> SwarmResult<Self> {
        Self::with_model(default_model())
    }

    pub fn with_model(model: impl Into<String>) -> SwarmResult<Self> {
        let profile = AgentProfile::new(
            AgentKind::Judge,
            "Judge",
            "Runs the unit tests and accepts the fix or returns the failure log.",
            model,
            JUDGE_PROMPT,
        )?;
        Ok(Self { profile })
    }

    /// Build the verdict request from a file and its test output
    pub fn judge_prompt(&self, file_name: &str, test_output: &str) -> String {
        format!(
            "{}\n\nFile: {}\nTest output:\n```\n{}\n```\n",
            self.profile.system_prompt, file_name, test_output
        )
    }
}

impl SwarmAgent for JudgeAgent {
    fn profile(&self) -> &AgentProfile {
        &self.profile
    }
}

const JUDGE_PROMPT: &str = r#"You are the Judge of a code refactoring team.

Read the test output below. Answer PASS if every test succeeded. Otherwise
answer FAIL followed by the failing tests and the error messages the fixer
needs to correct the code.
"#;
