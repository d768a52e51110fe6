//! Tests for the `scmdp` binary.
//!
//! These run the built executable against a registry description written to
//! a temporary directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

const REGISTRY: &str = r#"
[program]
usage = "USAGE: app [-OPTIONS] arg1 arg2\nOR: app arg1 arg2 [-OPTIONS]"
description = "App for testing"

[help]
long = "--help"
short = "-h"

[[positional]]
key = "arg1"
help = "Necessary argument 1"

[[positional]]
key = "arg2"
help = "Necessary argument 2"

[[optional]]
long = "--option1"
short = "-op1"
help = "Optional argument 1\nwith value"
value = "VALUE"

[[optional]]
long = "--option2"
short = "-op2"
help = "Optional argument 2\nwithout value"
"#;

fn registry_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("registry.toml");
    fs::write(&path, REGISTRY).unwrap();
    path
}

fn scmdp(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scmdp"))
        .arg("--spec")
        .arg(registry_file(dir))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_bindings_printed_in_registration_order() {
    let dir = TempDir::new().unwrap();
    let output = scmdp(&dir, &["--", "-op1", "v1", "-op2", "a", "b"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "arg1=a\narg2=b\n--option1=v1\n--option2=true\n");
}

#[test]
fn test_help_trigger_exits_successfully() {
    let dir = TempDir::new().unwrap();
    let output = scmdp(&dir, &["--", "-h"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(">> Non-optional arguments:"));
    assert!(stdout.contains("   --option1 ,-op1 VALUE  Optional argument 1"));
}

#[test]
fn test_rejected_tokens_exit_with_error() {
    let dir = TempDir::new().unwrap();
    let output = scmdp(&dir, &["a", "b", "--bogus"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Error: Unknown argument or option!\nprint -h or --help to see help\n"
    );
}

#[test]
fn test_wrong_count_prints_usage() {
    let dir = TempDir::new().unwrap();
    let output = scmdp(&dir, &["a"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "USAGE: app [-OPTIONS] arg1 arg2\nOR: app arg1 arg2 [-OPTIONS]\n");
}

#[test]
fn test_json_output_on_success() {
    let dir = TempDir::new().unwrap();
    let output = scmdp(&dir, &["--json", "a", "b", "--option1", "x"]);

    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["bindings"]["arg1"], "a");
    assert_eq!(body["bindings"]["--option1"], "x");
    assert!(body["bindings"].get("--option2").is_none());
}

#[test]
fn test_json_output_on_rejection_keeps_partial_bindings() {
    let dir = TempDir::new().unwrap();
    let output = scmdp(&dir, &["--json", "--", "-op1", "a", "b"]);

    assert_eq!(output.status.code(), Some(1));
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["status"], "rejected");
    assert_eq!(body["error"], "no_value_for_optional_parameter");
    assert_eq!(body["bindings"]["arg2"], "b");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Need a value for optional parameter!"));
}

#[test]
fn test_missing_spec_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_scmdp"))
        .arg("--spec")
        .arg(dir.path().join("absent.toml"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot use registry description"));
}
