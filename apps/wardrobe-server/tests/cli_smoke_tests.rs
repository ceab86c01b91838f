//! CLI smoke tests for the wardrobe-server binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration validation, help output, and basic command functionality.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Helper to run the wardrobe-server binary with given arguments
fn run_wardrobe_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_wardrobe-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute wardrobe-server")
}

#[test]
fn test_cli_help_command() {
    let output = run_wardrobe_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("wardrobe-server") || stdout.contains("Wardrobe"),
        "Should contain binary name"
    );
    assert!(
        stdout.contains("Usage:") || stdout.contains("USAGE:"),
        "Should contain usage information"
    );
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(
        stdout.contains("check"),
        "Should contain 'check' subcommand"
    );
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let output = run_wardrobe_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("wardrobe-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.chars().any(|c| c.is_ascii_digit()),
        "Should contain version numbers"
    );
}

#[test]
fn test_cli_invalid_command() {
    let output = run_wardrobe_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");
}

#[test]
fn test_cli_check_with_config_file() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join("config.yaml");
    let mut f = std::fs::File::create(&config_path).expect("create config file");
    writeln!(
        f,
        "server:\n  home_dir: \"{}\"\n  host: 127.0.0.1\n  port: 5000\ndatabase:\n  url: sqlite://wardrobe.db",
        temp_dir.path().display()
    )
    .expect("write config");

    let output = run_wardrobe_server(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(output.status.success(), "Check command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Configuration check passed"),
        "Should report a passing check"
    );
}

#[test]
fn test_cli_print_config() {
    let output = run_wardrobe_server(&["--print-config"]);

    assert!(output.status.success(), "Print config should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("server:") && stdout.contains("port:"),
        "Should print the YAML configuration"
    );
}
