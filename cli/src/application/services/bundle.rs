//! Application service — bundle hand-off.
//!
//! Writes a prepared [`InstallPlan`] to the locations the external runner
//! picks it up from. Imports only from `crate::domain` and
//! `crate::application::ports`.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{BundleWriter, ProgressReporter};
use crate::application::services::install::InstallPlan;

/// What was written, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOutcome {
    /// Hex SHA-256 of the payload.
    pub digest: String,
    pub artifacts: Vec<String>,
    /// Whether the environment went to a file.
    pub env_written: bool,
}

/// Write `plan.payload` to `archive` and, when given, `plan.env` to
/// `env_file`.
///
/// # Errors
///
/// Returns an error if either write fails. The archive is written first; an
/// env-file failure leaves the archive in place.
pub fn write_bundle(
    plan: &InstallPlan,
    writer: &impl BundleWriter,
    archive: &Path,
    env_file: Option<&Path>,
    reporter: &impl ProgressReporter,
) -> Result<BundleOutcome> {
    if plan.payload.is_empty() {
        reporter.warn("payload is empty");
    }

    reporter.step(&format!("writing {}", archive.display()));
    writer.write_archive(&plan.payload, archive)?;
    tracing::info!(dest = %archive.display(), artifacts = plan.payload.len(), "archive written");

    if let Some(dest) = env_file {
        reporter.step(&format!("writing {}", dest.display()));
        writer.write_env(&plan.env, dest)?;
        tracing::info!(dest = %dest.display(), vars = plan.env.len(), "env file written");
    }

    let outcome = BundleOutcome {
        digest: plan.payload.digest(),
        artifacts: plan.payload.paths().map(str::to_string).collect(),
        env_written: env_file.is_some(),
    };
    reporter.success(&format!("bundle written to {}", archive.display()));
    Ok(outcome)
}
