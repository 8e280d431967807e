//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed document on
//! stdout, including failures (see [`format_error`]).

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::services::bundle::BundleOutcome;
use crate::application::services::install::InstallPlan;
use crate::domain::{CommandError, EnvBuilder};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Machine-readable code for a failed command.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<CommandError>() {
            return match e {
                CommandError::Invalid(_) => "INVALID_CONFIG",
                _ => "PAYLOAD_FAILED",
            };
        }
        if cause.downcast_ref::<serde_yaml::Error>().is_some() {
            return "PARSE_ERROR";
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return "IO_ERROR";
        }
    }
    "ERROR"
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    service: &'a str,
    valid: bool,
}

#[derive(Serialize)]
struct ArgsOutput<'a> {
    service: &'a str,
    args: Option<&'a [String]>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactOutput<'a> {
    path: &'a str,
    mode: String,
    bytes: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BundleOutput<'a> {
    service: &'a str,
    archive: String,
    digest: &'a str,
    artifacts: Vec<ArtifactOutput<'a>>,
    env_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    env: Option<&'a indexmap::IndexMap<String, String>>,
}

fn print_pretty(value: &impl Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}

/// Renders results as JSON documents on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_check(&self, service: &str) -> Result<()> {
        print_pretty(&CheckOutput {
            service,
            valid: true,
        })
    }

    /// Variables as a JSON object, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_env(&self, env: &EnvBuilder) -> Result<()> {
        print_pretty(env.as_map())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_args(&self, service: &str, args: Option<&[String]>) -> Result<()> {
        print_pretty(&ArgsOutput { service, args })
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_bundle(
        &self,
        service: &str,
        archive: &Path,
        env_file: Option<&Path>,
        plan: &InstallPlan,
        outcome: &BundleOutcome,
    ) -> Result<()> {
        let artifacts = plan
            .payload
            .iter()
            .map(|a| ArtifactOutput {
                path: a.path(),
                mode: format!("{:04o}", a.mode()),
                bytes: a.contents().len(),
            })
            .collect();
        print_pretty(&BundleOutput {
            service,
            archive: archive.display().to_string(),
            digest: &outcome.digest,
            artifacts,
            env_file: env_file.map(|p| p.display().to_string()),
            env: (!outcome.env_written).then(|| plan.env.as_map()),
        })
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        print_pretty(&serde_json::json!({ "version": version }))
    }
}
