//! Application service — install pipeline.
//!
//! Drives a [`Command`] through `check → env → add_to_payload` and hands the
//! result back as an [`InstallPlan`]. Imports only from `crate::domain` and
//! `crate::application::ports`.

use std::fmt;

use anyhow::{Context, Result};

use crate::application::ports::ProgressReporter;
use crate::domain::{Command, EnvBuilder, Payload};

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Check,
    Env,
    Payload,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Check => "check",
            Self::Env => "env",
            Self::Payload => "payload",
        };
        f.write_str(s)
    }
}

/// Everything the external runner needs to execute an install.
#[derive(Debug)]
pub struct InstallPlan {
    pub env: EnvBuilder,
    pub payload: Payload,
}

/// Run only the check stage.
///
/// # Errors
///
/// Returns the command's validation error with the service name attached.
pub fn check(command: &dyn Command, reporter: &impl ProgressReporter) -> Result<()> {
    run_check(command, reporter)?;
    reporter.success(&format!("{} configuration is valid", command.name()));
    Ok(())
}

/// Run the full pipeline on a fresh payload.
///
/// A failure at any stage drops the partially built payload; nothing is
/// returned for a failed install.
///
/// # Errors
///
/// Returns the first stage error, tagged with the stage and service name.
pub fn prepare(command: &dyn Command, reporter: &impl ProgressReporter) -> Result<InstallPlan> {
    let name = command.name();

    run_check(command, reporter)?;

    enter(Stage::Env, name, reporter);
    let env = command.env();
    tracing::debug!(service = name, vars = env.len(), "environment built");

    enter(Stage::Payload, name, reporter);
    let mut payload = Payload::new();
    command
        .add_to_payload(&mut payload)
        .with_context(|| format!("{} stage failed for {name}", Stage::Payload))?;
    for artifact in payload.iter() {
        let mode = format!("{:o}", artifact.mode());
        tracing::debug!(
            path = artifact.path(),
            mode = %mode,
            bytes = artifact.contents().len(),
            "artifact added"
        );
    }

    reporter.success(&format!(
        "{name}: {} artifact(s), {} env var(s)",
        payload.len(),
        env.len()
    ));
    Ok(InstallPlan { env, payload })
}

fn run_check(command: &dyn Command, reporter: &impl ProgressReporter) -> Result<()> {
    let name = command.name();
    enter(Stage::Check, name, reporter);
    command
        .check()
        .with_context(|| format!("{} stage failed for {name}", Stage::Check))
}

fn enter(stage: Stage, name: &str, reporter: &impl ProgressReporter) {
    tracing::debug!(service = name, %stage, "entering stage");
    reporter.step(&format!("{name}: {stage}"));
}
