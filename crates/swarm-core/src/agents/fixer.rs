//! Fixer agent: applies the refactoring plan

use super::agent::SwarmAgent;
use super::kind::AgentKind;
use super::profile::{AgentProfile, default_model};
use crate::error::SwarmResult;

/// Rewrites code according to the auditor's plan or the judge's feedback
#[derive(Debug, Clone)]
pub struct FixerAgent {
    profile: AgentProfile,
}

impl FixerAgent {
    /// Construct with the model from `SWARM_MODEL` or the default model
    pub fn new() -> SwarmResult<Self> {
        Self::with_model(default_model())
    }

    pub fn with_model(model: impl Into<String>) -> SwarmResult<Self> {
        let profile = AgentProfile::new(
            AgentKind::Fixer,
            "Fixer",
            "Reads the refactoring plan and rewrites the code file by file.",
            model,
            FIXER_PROMPT,
        )?;
        Ok(Self { profile })
    }

    /// Build the fix request for one file and its outstanding issues
    pub fn fix_prompt(&self, file_name: &str, source: &str, issues: &[String]) -> String {
        let mut prompt = format!("{}\n\nFile: {}\n", self.profile.system_prompt, file_name);
        if issues.is_empty() {
            prompt.push_str("Issues: none reported, improve quality only.\n");
        } else {
            prompt.push_str("Issues:\n");
            for (i, issue) in issues.iter().enumerate() {
                prompt.push_str(&format!("{}. {}\n", i + 1, issue));
            }
        }
        prompt.push_str(&format!("```python\n{}\n```\n", source));
        prompt
    }
}

impl SwarmAgent for FixerAgent {
    fn profile(&self) -> &AgentProfile {
        &self.profile
    }
}

const FIXER_PROMPT: &str = r#"You are the Fixer of a code refactoring team.

Rewrite the file below so that every listed issue is resolved. Keep the public
behavior unchanged unless an issue says it is wrong. Return only the complete
corrected file.
"#;
