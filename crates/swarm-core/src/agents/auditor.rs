//! Auditor agent: static analysis of the target code

use super::agent::SwarmAgent;
use super::kind::AgentKind;
use super::profile::{AgentProfile, default_model};
use crate::error::SwarmResult;

/// Analyzes source files and produces a refactoring plan
#[derive(Debug, Clone)]
pub struct AuditorAgent {
    profile: AgentProfile,
}

impl AuditorAgent {
    /// Construct with the model from `SWARM_MODEL` or the default model
    pub fn new() -> SwarmResult<Self> {
        Self::with_model(default_model())
    }

    pub fn with_model(model: impl Into<String>) -> SwarmResult<Self> {
        let profile = AgentProfile::new(
            AgentKind::Auditor,
            "Auditor",
            "Reads the code, runs static analysis and produces a refactoring plan.",
            model,
            AUDITOR_PROMPT,
        )?;
        Ok(Self { profile })
    }

    /// Build the analysis request for one source file
    pub fn audit_prompt(&self, file_name: &str, source: &str) -> String {
        format!(
            "{}\n\nFile: {}\n```python\n{}\n```\n",
            self.profile.system_prompt, file_name, source
        )
    }
}

impl SwarmAgent for AuditorAgent {
    fn profile(&self) -> &AgentProfile {
        &self.profile
    }
}

const AUDITOR_PROMPT: &str = r#"You are the Auditor of a code refactoring team.

Analyze the file below and report every problem you find:
1. Bugs and runtime errors
2. Missing or incorrect documentation
3. Style violations reported by the linter
4. Missing unit tests

Return a numbered refactoring plan. Do not rewrite the code yourself.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auditor_profile() {
        let auditor = AuditorAgent::with_model("gemini-2.0-flash").unwrap();
        assert_eq!(auditor.kind(), AgentKind::Auditor);
        assert_eq!(auditor.profile().model, "gemini-2.0-flash");
    }

    #[test]
    fn test_audit_prompt_contains_source() {
        let auditor = AuditorAgent::with_model("m").unwrap();
        let prompt = auditor.audit_prompt("calc.py", "def add(a, b): return a - b");
        assert!(prompt.starts_with("You are the Auditor"));
        assert!(prompt.contains("File: calc.py"));
        assert!(prompt.contains("return a - b"));
    }
}
