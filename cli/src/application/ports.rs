//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;

use anyhow::Result;
use nodekit_common::ServiceConfig;

use crate::domain::{EnvBuilder, Payload};

// ── Deployment Source Port ────────────────────────────────────────────────────

/// Abstracts where the declared service configuration comes from.
pub trait DeploymentSource {
    /// Load and parse the deployment.
    fn load(&self) -> Result<ServiceConfig>;
    /// Human-readable origin, e.g. the file path.
    fn describe(&self) -> String;
}

// ── Bundle Output Port ────────────────────────────────────────────────────────

/// Abstracts writing an assembled payload and its environment to the
/// hand-off location for the external runner.
pub trait BundleWriter {
    /// Write `payload` as an archive at `dest`.
    fn write_archive(&self, payload: &Payload, dest: &Path) -> Result<()>;
    /// Write the rendered environment to `dest`.
    fn write_env(&self, env: &EnvBuilder, dest: &Path) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
