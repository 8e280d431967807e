//! Human-readable terminal renderer.
//!
//! Data a user may pipe elsewhere (`env`, `args`) is printed bare and is
//! never suppressed by `--quiet`; summaries go through `OutputContext`.

use std::path::Path;

use crate::application::services::bundle::BundleOutcome;
use crate::application::services::install::InstallPlan;
use crate::domain::EnvBuilder;
use crate::output::OutputContext;

/// Renders results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// The reporter already announced success; nothing more to print.
    pub fn render_check(&self, _service: &str) {}

    /// Shell-sourceable `KEY=value` lines.
    pub fn render_env(&self, env: &EnvBuilder) {
        print!("{env}");
    }

    /// One token per line.
    pub fn render_args(&self, args: Option<&[String]>) {
        for arg in args.unwrap_or_default() {
            println!("{arg}");
        }
    }

    /// Bundle summary; the environment follows when it was not written to a
    /// file.
    pub fn render_bundle(
        &self,
        archive: &Path,
        env_file: Option<&Path>,
        plan: &InstallPlan,
        outcome: &BundleOutcome,
    ) {
        self.ctx.header("Bundle:");
        self.ctx.kv("Archive:", &archive.display().to_string());
        for artifact in plan.payload.iter() {
            self.ctx.kv(
                "Artifact:",
                &format!(
                    "{} ({:04o}, {} bytes)",
                    artifact.path(),
                    artifact.mode(),
                    artifact.contents().len()
                ),
            );
        }
        self.ctx.kv("Digest:", &outcome.digest);
        match env_file {
            Some(path) => self.ctx.kv("Env file:", &path.display().to_string()),
            None if !plan.env.is_empty() => {
                self.ctx.header("Environment:");
                print!("{}", plan.env);
            }
            None => {}
        }
    }

    pub fn render_version(&self, version: &str) {
        println!("nodekit {version}");
    }
}
