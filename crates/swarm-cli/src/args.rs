//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "swarm")]
#[command(about = "Refactoring swarm - agent registry and experiment log tools")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the agent registry and list the loaded agents
    Agents,

    /// Inspect the experiment log
    Logs {
        #[command(subcommand)]
        action: LogsAction,
    },
}

#[derive(Subcommand, Clone)]
pub enum LogsAction {
    /// Check every entry of the experiment log
    Validate {
        /// Log file (defaults to SWARM_LOG_FILE or logs/experiment_data.json)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Show entry counts per agent and action
    Stats {
        /// Log file (defaults to SWARM_LOG_FILE or logs/experiment_data.json)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}
