//! `swarm agents`

use crate::console;
use anyhow::{Context, Result};
use swarm_core::get_registry;

/// Initialize the process-wide registry, print its agents, then shut it down
pub fn show_agents() -> Result<()> {
    let registry = get_registry();
    registry
        .initialize()
        .context("Failed to initialize the agent registry")?;

    console::header("Refactoring swarm agents");
    for name in registry.list_agents() {
        if let Some(agent) = registry.get_agent(&name)? {
            let profile = agent.profile();
            println!();
            console::field("name", &profile.name);
            console::field("registry key", &name);
            console::field("model", &profile.model);
            console::field("role", &profile.description);
        }
    }
    println!();
    console::success(&format!("{} agents loaded", registry.list_agents().len()));

    registry.shutdown();
    Ok(())
}
