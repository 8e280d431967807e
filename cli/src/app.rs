//! Application context — unified state passed to every command handler.
//!
//! Built once in `Cli::run()` from the global flags. Commands reach the
//! deployment file, the asset source and the renderer through it instead of
//! constructing their own.

use std::path::PathBuf;

use anyhow::Result;
use nodekit_common::ServiceConfig;

use crate::application::ports::DeploymentSource;
use crate::domain::AssetSource;
use crate::infra::assets::{DirAssets, EmbeddedAssets};
use crate::infra::config::{YamlDeploymentSource, resolve_path};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Deployment file from `--config` / `NODEKIT_CONFIG`.
    pub config: Option<PathBuf>,
    /// Asset override directory from `--assets-dir`.
    pub assets_dir: Option<PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    deployment: YamlDeploymentSource,
    assets: Box<dyn AssetSource>,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags. Performs no I/O.
    #[must_use]
    pub fn new(flags: AppFlags) -> Self {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        // Progress lines would corrupt a JSON document on stdout.
        let quiet = flags.output.quiet || flags.output.json;

        let assets: Box<dyn AssetSource> = match flags.assets_dir {
            Some(dir) => Box::new(DirAssets::new(dir)),
            None => Box::new(EmbeddedAssets),
        };

        Self {
            output: OutputContext::new(flags.output.no_color, quiet),
            mode,
            deployment: YamlDeploymentSource::new(resolve_path(flags.config.as_deref())),
            assets,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Load the deployment file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_service(&self) -> Result<ServiceConfig> {
        tracing::debug!(source = %self.deployment.describe(), "loading deployment");
        self.deployment.load()
    }

    /// Where install scripts are read from.
    #[must_use]
    pub fn assets(&self) -> &dyn AssetSource {
        self.assets.as_ref()
    }

    /// Progress reporter for application services.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }
}
