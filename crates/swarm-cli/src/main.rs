//! Refactoring swarm CLI

mod args;
mod commands;
mod console;
mod logging;

use anyhow::Result;
use clap::Parser;
use swarm_core::SwarmConfig;

use crate::args::{Cli, Commands, LogsAction};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SwarmConfig::from_env()?;
    logging::init(&config.logging, cli.verbose);

    match cli.command {
        Commands::Agents => commands::agents::show_agents(),
        Commands::Logs { action } => {
            let default_file = config.log_file.clone();
            match action {
                LogsAction::Validate { file } => {
                    commands::logs::validate(&file.unwrap_or(default_file))
                }
                LogsAction::Stats { file, json } => {
                    commands::logs::stats(&file.unwrap_or(default_file), json)
                }
            }
        }
    }
}
