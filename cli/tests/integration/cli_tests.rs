//! Integration tests for argument parsing and the read-only commands.

#![allow(clippy::expect_used)]

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

pub const WATCHTOWER_YAML: &str = "\
service: watchtower
environment:
  rpcURL: https://api.testnet.solana.com
flags:
  validatorIdentities: [Va1idat0r1]
  intervalSeconds: 30
notifications:
  telegram:
    botToken: '123456:abc'
    chatId: '-1001'
";

pub const FIREDANCER_YAML: &str = "\
service: firedancer
keyPairs:
  identity: '[11,12,13]'
  voteAccount: '[21,22,23]'
config:
  user: sol
";

pub fn nodekit() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nodekit"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("NODEKIT_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `yaml` to `<dir>/nodekit.yaml` and return the path.
pub fn deployment(dir: &TempDir, yaml: &str) -> std::path::PathBuf {
    let path = dir.path().join("nodekit.yaml");
    std::fs::write(&path, yaml).expect("write deployment");
    path
}

fn with_config(path: &Path) -> Command {
    let mut cmd = nodekit();
    cmd.arg("--config").arg(path);
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help() {
    nodekit().assert().code(2).stderr(predicate::str::contains(
        "Installation payloads for validator-node services",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    nodekit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("bundle"));
}

#[test]
fn test_version_command_shows_version() {
    nodekit()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_json() {
    let out = nodekit().args(["--json", "version"]).output().expect("run");
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_unknown_command_fails() {
    nodekit().arg("deploy").assert().failure();
}

// --- check ---

#[test]
fn test_check_valid_watchtower() {
    let dir = TempDir::new().expect("tempdir");
    let path = deployment(&dir, WATCHTOWER_YAML);
    with_config(&path)
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("watchtower configuration is valid"));
}

#[test]
fn test_check_invalid_watchtower_exits_one() {
    let dir = TempDir::new().expect("tempdir");
    let path = deployment(
        &dir,
        "service: watchtower\nflags:\n  nameSuffix: 'two words'\n",
    );
    with_config(&path)
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("whitespace"));
}

#[test]
fn test_check_json_error_object() {
    let dir = TempDir::new().expect("tempdir");
    let path = deployment(
        &dir,
        "service: watchtower\nflags:\n  nameSuffix: 'two words'\n",
    );
    let out = with_config(&path).args(["--json", "check"]).output().expect("run");
    assert_eq!(out.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(v["error"], true);
    assert_eq!(v["code"], "INVALID_CONFIG");
}

#[test]
fn test_missing_config_names_file() {
    nodekit()
        .args(["--config", "/nonexistent/nodekit.yaml", "check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/nodekit.yaml"));
}

#[test]
fn test_config_from_env_var() {
    let dir = TempDir::new().expect("tempdir");
    let path = deployment(&dir, FIREDANCER_YAML);
    nodekit()
        .env("NODEKIT_CONFIG", &path)
        .arg("check")
        .assert()
        .success();
}

#[test]
fn test_default_config_in_working_dir() {
    let dir = TempDir::new().expect("tempdir");
    deployment(&dir, FIREDANCER_YAML);
    nodekit().current_dir(dir.path()).arg("check").assert().success();
}

// --- env / args ---

#[test]
fn test_env_prints_sourceable_lines() {
    let dir = TempDir::new().expect("tempdir");
    let path = deployment(&dir, WATCHTOWER_YAML);
    with_config(&path)
        .args(["--quiet", "env"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "WATCHTOWER_FLAGS='--validator-identity Va1idat0r1 --url https://api.testnet.solana.com --interval 30'\n",
        ))
        .stdout(predicate::str::contains("WATCHTOWER_ENV="));
}

#[test]
fn test_env_json_is_ordered_mapping() {
    let dir = TempDir::new().expect("tempdir");
    let path = deployment(&dir, WATCHTOWER_YAML);
    let out = with_config(&path).args(["--json", "env"]).output().expect("run");
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    let keys: Vec<_> = v.as_object().expect("object").keys().cloned().collect();
    assert_eq!(keys, vec!["WATCHTOWER_FLAGS", "WATCHTOWER_ENV"]);
    assert!(
        v["WATCHTOWER_ENV"]
            .as_str()
            .expect("string")
            .contains("TELEGRAM_CHAT_ID=-1001")
    );
}

#[test]
fn test_env_firedancer_is_empty() {
    let dir = TempDir::new().expect("tempdir");
    let path = deployment(&dir, FIREDANCER_YAML);
    with_config(&path)
        .args(["--quiet", "env"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_args_one_token_per_line() {
    let dir = TempDir::new().expect("tempdir");
    let path = deployment(&dir, WATCHTOWER_YAML);
    with_config(&path)
        .args(["--quiet", "args"])
        .assert()
        .success()
        .stdout(
            "--validator-identity\nVa1idat0r1\n--url\nhttps://api.testnet.solana.com\n--interval\n30\n",
        );
}

#[test]
fn test_args_json_null_for_firedancer() {
    let dir = TempDir::new().expect("tempdir");
    let path = deployment(&dir, FIREDANCER_YAML);
    let out = with_config(&path).args(["--json", "args"]).output().expect("run");
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(v["service"], "firedancer");
    assert!(v["args"].is_null());
}

#[test]
fn test_secrets_never_reach_logs() {
    let dir = TempDir::new().expect("tempdir");
    let path = deployment(&dir, FIREDANCER_YAML);
    let out = dir.path().join("bundle.tar.gz");
    with_config(&path)
        .args(["-vv", "bundle", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("artifact added"))
        .stderr(predicate::str::contains("[11,12,13]").not());
}
