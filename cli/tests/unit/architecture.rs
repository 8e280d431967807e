//! Structural tests for architectural boundary enforcement.
//!
//! These tests scan source files to verify that layer boundaries hold and
//! that key material only leaves its wrapper in one place.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Track brace depth and return whether a line is inside a `#[cfg(test)]` block.
struct CfgTestTracker {
    in_test_block: bool,
    brace_depth: i32,
    test_block_start_depth: i32,
}

impl CfgTestTracker {
    fn new() -> Self {
        Self {
            in_test_block: false,
            brace_depth: 0,
            test_block_start_depth: 0,
        }
    }

    /// Process a line and return `true` if it's inside a `#[cfg(test)]` block.
    fn process_line(&mut self, line: &str) -> bool {
        if line.trim().contains("#[cfg(test)]") {
            self.in_test_block = true;
            self.test_block_start_depth = self.brace_depth;
        }
        for ch in line.chars() {
            match ch {
                '{' => self.brace_depth += 1,
                '}' => {
                    self.brace_depth -= 1;
                    if self.in_test_block && self.brace_depth <= self.test_block_start_depth {
                        self.in_test_block = false;
                    }
                }
                _ => {}
            }
        }
        self.in_test_block
    }
}

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

/// `(relative path, line number, line)` for every non-test, non-comment line
/// under `dir` containing any of `needles`.
fn find_outside_tests(dir: &Path, needles: &[&str]) -> Vec<String> {
    let mut hits = Vec::new();
    for file in collect_rs_files(dir) {
        let Ok(content) = std::fs::read_to_string(&file) else {
            continue;
        };
        let rel = file
            .strip_prefix(env!("CARGO_MANIFEST_DIR"))
            .unwrap_or(&file)
            .display()
            .to_string();
        let mut tracker = CfgTestTracker::new();
        for (i, line) in content.lines().enumerate() {
            let in_test = tracker.process_line(line);
            let trimmed = line.trim();
            if in_test || trimmed.starts_with("//") {
                continue;
            }
            if needles.iter().any(|n| line.contains(n)) {
                hits.push(format!("{rel}:{}: {trimmed}", i + 1));
            }
        }
    }
    hits
}

// ── Layer boundaries ──────────────────────────────────────────────────────────

#[test]
fn domain_has_no_io_or_outer_layer_imports() {
    let violations = find_outside_tests(
        &src_dir().join("domain"),
        &[
            "crate::infra",
            "crate::application",
            "crate::commands",
            "crate::output",
            "std::fs",
            "std::process",
            "std::net",
        ],
    );
    assert!(
        violations.is_empty(),
        "domain/ must stay pure:\n{}",
        violations.join("\n")
    );
}

#[test]
fn application_has_no_infra_or_presentation_imports() {
    let violations = find_outside_tests(
        &src_dir().join("application"),
        &["crate::infra", "crate::commands", "crate::output"],
    );
    assert!(
        violations.is_empty(),
        "application/ may only use domain/ and its own ports:\n{}",
        violations.join("\n")
    );
}

#[test]
fn infra_has_no_imports_from_commands_or_output() {
    let violations =
        find_outside_tests(&src_dir().join("infra"), &["crate::commands", "crate::output"]);
    assert!(
        violations.is_empty(),
        "infra/ must not import from commands/ or output/:\n{}",
        violations.join("\n")
    );
}

#[test]
fn infra_has_no_print_macros_outside_tests() {
    let violations = find_outside_tests(&src_dir().join("infra"), &["println!", "eprintln!"]);
    assert!(
        violations.is_empty(),
        "infra/ must not print:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_inline_json_branching_in_commands() {
    let violations = find_outside_tests(
        &src_dir().join("commands"),
        &["json: bool", "if json", "if !json", "is_json()"],
    );
    assert!(
        violations.is_empty(),
        "Found inline JSON branching in commands/ — use app.renderer() instead:\n{}",
        violations.join("\n")
    );
}

// ── Key material ──────────────────────────────────────────────────────────────

#[test]
fn secrets_are_exposed_only_when_stored_in_a_payload() {
    let violations: Vec<_> = find_outside_tests(&src_dir(), &[".expose()"])
        .into_iter()
        .filter(|hit| !hit.starts_with("src/domain/runner/payload.rs:"))
        .collect();
    assert!(
        violations.is_empty(),
        "Secret::expose() outside Payload::add_secret:\n{}",
        violations.join("\n")
    );
}
