//! CLI smoke tests for the examples-server binary.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

/// Helper to run the examples-server binary with given arguments
fn run_examples_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_examples-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute examples-server")
}

#[test]
fn test_cli_help_command() {
    let output = run_examples_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("examples-server"));
    assert!(stdout.contains("--example"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("print-config"));
}

#[test]
fn test_cli_rejects_unknown_example() {
    let output = run_examples_server(&["--example", "bogus", "print-config"]);
    assert!(!output.status.success());
}

#[test]
fn test_print_config_uses_defaults() {
    let output = run_examples_server(&["print-config"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let config: serde_json::Value =
        serde_json::from_str(&stdout).expect("print-config should emit JSON");
    assert_eq!(config["server"]["port"], 8087);
    assert_eq!(config["database"]["url"], "sqlite::memory:");
}

#[test]
fn test_print_config_merges_file_and_port_flag() {
    let mut file = NamedTempFile::new().expect("temp config file");
    writeln!(
        file,
        "server:\n  host: 0.0.0.0\n  port: 9000\ndatabase:\n  url: \"sqlite://demo.sqlite?mode=rwc\""
    )
    .unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let output = run_examples_server(&["--config", &path, "--port", "9001", "print-config"]);
    assert!(output.status.success());

    let config: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(config["server"]["host"], "0.0.0.0");
    // The CLI flag overrides the file.
    assert_eq!(config["server"]["port"], 9001);
    assert_eq!(config["database"]["url"], "sqlite://demo.sqlite?mode=rwc");
}

#[test]
fn test_rejects_unknown_config_keys() {
    let mut file = NamedTempFile::new().expect("temp config file");
    writeln!(file, "server:\n  host: 127.0.0.1\n  port: 9000\n  bogus: 1").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let output = run_examples_server(&["--config", &path, "print-config"]);
    assert!(!output.status.success());
}
