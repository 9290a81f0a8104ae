//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use counter_variants::counters::{
    BasicCounter, CallbackCounter, DataAttributeCounter, FunctionalCounter, ReducerCounter,
};
use counter_variants::testing::CounterHarness;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use std::path::PathBuf;
use tempfile::TempDir;

pub const DECREMENT: &str = "decrement-button";
pub const INCREMENT: &str = "increment-button";

/// One freshly mounted harness per variant, in display order.
pub fn every_variant() -> Vec<(&'static str, CounterHarness)> {
    vec![
        ("Basic", CounterHarness::mount(BasicCounter::new())),
        ("Functional", CounterHarness::mount(FunctionalCounter::new())),
        ("Callback", CounterHarness::mount(CallbackCounter::new())),
        ("DataAttribute", CounterHarness::mount(DataAttributeCounter::new())),
        ("Reducer", CounterHarness::mount(ReducerCounter::new())),
    ]
}

/// Variants that apply updates to the latest committed state.
pub fn latest_state_variants() -> Vec<(&'static str, CounterHarness)> {
    every_variant()
        .into_iter()
        .filter(|(label, _)| *label != "Basic")
        .collect()
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Rows of a rendered buffer as plain strings.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}
