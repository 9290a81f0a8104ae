use clap::Parser;
use std::path::PathBuf;

use crate::config::{CommitMode, Config};

/// Five counter implementations side by side in the terminal.
#[derive(Debug, Parser)]
#[command(name = "counter-variants", version, about)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When queued updates are committed
    #[arg(long, value_enum, value_name = "MODE")]
    pub commit_mode: Option<CommitMode>,

    /// Tick interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_rate_ms: Option<u64>,

    /// Print every counter once as plain text and exit
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.commit_mode {
            config.ui.commit_mode = mode;
        }
        if let Some(tick_rate_ms) = self.tick_rate_ms {
            config.ui.tick_rate_ms = tick_rate_ms;
        }
    }
}
