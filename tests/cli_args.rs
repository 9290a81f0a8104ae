//! Tests for the binary's command line.

use std::process::Command;

fn counter_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_counter-variants"))
}

#[test]
fn test_help_lists_options() {
    let output = counter_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--commit-mode"));
    assert!(stdout.contains("--tick-rate-ms"));
    assert!(stdout.contains("--print"));
}

#[test]
fn test_print_renders_every_counter() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = counter_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--print")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Basic\n  Count: 0\nFunctional\n  Count: 0\nCallback\n  Count: 0\n\
         DataAttribute\n  Count: 0\nReducer\n  Count: 0\n"
    );
}

#[test]
fn test_invalid_commit_mode_is_rejected() {
    let output = counter_cmd()
        .arg("--commit-mode")
        .arg("sometimes")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value 'sometimes'"));
}

#[test]
fn test_zero_tick_rate_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = counter_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--tick-rate-ms")
        .arg("0")
        .arg("--print")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick_rate_ms must be greater than zero"));
}
