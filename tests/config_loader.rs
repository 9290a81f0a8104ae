mod common;

use common::temp_config;
use counter_variants::config::{CommitMode, Config, ConfigError, DataAttributeConfig, UiConfig};
use counter_variants::counters::RootComposer;
use counter_variants::host::ControlId;
use std::path::Path;
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert_eq!(config.ui.commit_mode, CommitMode::PerEvent);
    assert_eq!(config.data_attribute.decrement_delta, "-1");
    assert_eq!(config.data_attribute.increment_delta, "+1");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("counter-variants/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/counter-variants.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_file_parses() {
    let (_dir, path) = temp_config(
        r#"[ui]
tick_rate_ms = 100
commit_mode = "per-tick"

[data_attribute]
decrement_delta = "-2"
increment_delta = "3"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config,
        Config {
            ui: UiConfig {
                tick_rate_ms: 100,
                commit_mode: CommitMode::PerTick,
            },
            data_attribute: DataAttributeConfig {
                decrement_delta: "-2".to_string(),
                increment_delta: "3".to_string(),
            },
        }
    );
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config("[ui]\ncommit_mode = \"per-tick\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.commit_mode, CommitMode::PerTick);
    assert_eq!(config.data_attribute, DataAttributeConfig::default());
}

#[test]
fn test_validation_fails_on_zero_tick_rate() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("tick_rate_ms"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = temp_config("[ui\ntick_rate_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_unknown_commit_mode_is_parse_error() {
    let (_dir, path) = temp_config("[ui]\ncommit_mode = \"sometimes\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_configured_deltas_reach_the_counter() {
    let mut config = Config::default();
    config.data_attribute.increment_delta = "+5".to_string();
    let mut root = RootComposer::from_config(&config);
    let mount = root.find_mut("DataAttribute").unwrap();
    mount.click(ControlId::Increment);
    mount.click(ControlId::Increment);
    assert_eq!(mount.count(), 10);
}
