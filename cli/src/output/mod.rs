//! Output formatting module

pub mod human;
pub mod json;
pub mod reporter;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

use crate::application::services::bundle::BundleOutcome;
use crate::application::services::install::InstallPlan;
use crate::domain::EnvBuilder;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

/// Dispatches rendering to the human or JSON renderer.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_check(&self, service: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_check(service);
                Ok(())
            }
            Self::Json(r) => r.render_check(service),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_env(&self, env: &EnvBuilder) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_env(env);
                Ok(())
            }
            Self::Json(r) => r.render_env(env),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_args(&self, service: &str, args: Option<&[String]>) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_args(args);
                Ok(())
            }
            Self::Json(r) => r.render_args(service, args),
        }
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
        match self {
            Self::Human(r) => {
                r.render_bundle(archive, env_file, plan, outcome);
                Ok(())
            }
            Self::Json(r) => r.render_bundle(service, archive, env_file, plan, outcome),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(r) => r.render_version(version),
        }
    }
}
