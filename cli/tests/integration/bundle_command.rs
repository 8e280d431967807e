//! Integration tests for `nodekit bundle`.

#![allow(clippy::expect_used)]

use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::cli_tests::{FIREDANCER_YAML, WATCHTOWER_YAML, deployment, nodekit};

/// `(path, mode, contents)` per archive entry, in order.
fn read_archive(path: &Path) -> Vec<(String, u32, Vec<u8>)> {
    let file = std::fs::File::open(path).expect("open archive");
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    archive
        .entries()
        .expect("entries")
        .map(|e| {
            let mut e = e.expect("entry");
            let name = e.path().expect("path").to_string_lossy().into_owned();
            let mode = e.header().mode().expect("mode");
            let mut body = Vec::new();
            e.read_to_end(&mut body).expect("read");
            (name, mode, body)
        })
        .collect()
}

#[test]
fn test_bundle_firedancer_archive() {
    let dir = TempDir::new().expect("tempdir");
    let config = deployment(&dir, FIREDANCER_YAML);
    let out = dir.path().join("fd.tar.gz");

    nodekit()
        .arg("--config")
        .arg(&config)
        .args(["bundle", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Digest:"));

    let entries = read_archive(&out);
    let summary: Vec<_> = entries.iter().map(|(p, m, _)| (p.as_str(), *m)).collect();
    assert_eq!(
        summary,
        vec![
            ("config.toml", 0o644),
            ("steps.sh", 0o755),
            ("validator-keypair.json", 0o600),
            ("vote-account-keypair.json", 0o600),
        ]
    );
    assert_eq!(entries[2].2, b"[11,12,13]");
    let toml = String::from_utf8_lossy(&entries[0].2);
    assert!(toml.contains("user = \"sol\""), "got: {toml}");
}

#[test]
fn test_bundle_watchtower_writes_env_file() {
    let dir = TempDir::new().expect("tempdir");
    let config = deployment(&dir, WATCHTOWER_YAML);
    let out = dir.path().join("wt.tar.gz");
    let env_file = dir.path().join("install.env");

    nodekit()
        .arg("--config")
        .arg(&config)
        .args(["bundle", "--output"])
        .arg(&out)
        .arg("--env-file")
        .arg(&env_file)
        .assert()
        .success();

    let env = std::fs::read_to_string(&env_file).expect("env file");
    assert!(env.starts_with("WATCHTOWER_FLAGS="), "got: {env}");
    let entries = read_archive(&out);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "steps.sh");
    assert!(String::from_utf8_lossy(&entries[0].2).contains("solana-watchtower"));
}

#[test]
fn test_bundle_json_reports_digest_and_env() {
    let dir = TempDir::new().expect("tempdir");
    let config = deployment(&dir, WATCHTOWER_YAML);
    let out = dir.path().join("wt.tar.gz");

    let output = nodekit()
        .arg("--config")
        .arg(&config)
        .args(["--json", "bundle", "--output"])
        .arg(&out)
        .output()
        .expect("run");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["service"], "watchtower");
    assert_eq!(v["digest"].as_str().expect("digest").len(), 64);
    assert_eq!(v["artifacts"][0]["path"], "steps.sh");
    assert_eq!(v["artifacts"][0]["mode"], "0755");
    assert!(v["envFile"].is_null());
    assert!(v["env"]["WATCHTOWER_FLAGS"].is_string());
}

#[test]
fn test_bundle_is_reproducible() {
    let dir = TempDir::new().expect("tempdir");
    let config = deployment(&dir, FIREDANCER_YAML);
    let a = dir.path().join("a.tar.gz");
    let b = dir.path().join("b.tar.gz");

    for out in [&a, &b] {
        nodekit()
            .arg("--config")
            .arg(&config)
            .args(["--quiet", "bundle", "--output"])
            .arg(out)
            .assert()
            .success();
    }
    assert_eq!(
        std::fs::read(&a).expect("a"),
        std::fs::read(&b).expect("b")
    );
}

#[test]
fn test_bundle_uses_assets_dir_override() {
    let dir = TempDir::new().expect("tempdir");
    let config = deployment(&dir, FIREDANCER_YAML);
    let assets = dir.path().join("assets");
    std::fs::create_dir_all(assets.join("firedancer")).expect("mkdir");
    std::fs::write(assets.join("firedancer/steps.sh"), "#!/bin/sh\necho patched\n")
        .expect("write");
    let out = dir.path().join("fd.tar.gz");

    nodekit()
        .arg("--config")
        .arg(&config)
        .arg("--assets-dir")
        .arg(&assets)
        .args(["--quiet", "bundle", "--output"])
        .arg(&out)
        .assert()
        .success();

    let entries = read_archive(&out);
    assert_eq!(entries[1].2, b"#!/bin/sh\necho patched\n");
}

#[test]
fn test_bundle_invalid_deployment_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let config = deployment(
        &dir,
        "service: watchtower\nflags:\n  validatorIdentities: ['a b']\n",
    );
    let out = dir.path().join("wt.tar.gz");

    nodekit()
        .arg("--config")
        .arg(&config)
        .args(["bundle", "--output"])
        .arg(&out)
        .assert()
        .code(1);
    assert!(!out.exists());
}
