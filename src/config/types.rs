use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::counters::{DEFAULT_DECREMENT_DELTA, DEFAULT_INCREMENT_DELTA};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub data_attribute: DataAttributeConfig,
}

/// When queued counter updates are committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CommitMode {
    /// Commit and re-render after every key press.
    #[default]
    PerEvent,
    /// Queue key presses and commit once per tick.
    PerTick,
}

impl CommitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitMode::PerEvent => "per-event",
            CommitMode::PerTick => "per-tick",
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Update batching discipline (default: per-event).
    #[serde(default)]
    pub commit_mode: CommitMode,
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            commit_mode: CommitMode::default(),
        }
    }
}

/// Raw `delta` attribute values placed on the data-attribute counter's
/// controls. Parsed by the counter at activation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataAttributeConfig {
    #[serde(default = "default_decrement_delta")]
    pub decrement_delta: String,
    #[serde(default = "default_increment_delta")]
    pub increment_delta: String,
}

impl Default for DataAttributeConfig {
    fn default() -> Self {
        Self {
            decrement_delta: default_decrement_delta(),
            increment_delta: default_increment_delta(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_decrement_delta() -> String {
    DEFAULT_DECREMENT_DELTA.to_string()
}

fn default_increment_delta() -> String {
    DEFAULT_INCREMENT_DELTA.to_string()
}
