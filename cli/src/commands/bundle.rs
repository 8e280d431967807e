//! Bundle command

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{bundle, install};
use crate::domain::Install as _;
use crate::infra::archive::TarGzBundleWriter;

/// Arguments for the bundle command.
#[derive(Args)]
pub struct BundleArgs {
    /// Archive to write
    #[arg(short, long, value_name = "FILE", default_value = "payload.tar.gz")]
    pub output: PathBuf,

    /// Write the environment here instead of printing it
    #[arg(long, value_name = "FILE")]
    pub env_file: Option<PathBuf>,
}

/// Run the bundle command.
///
/// # Errors
///
/// Returns an error if any pipeline stage or either write fails.
pub fn run(app: &AppContext, args: &BundleArgs) -> Result<()> {
    let service = app.load_service()?;
    let command = service.install(app.assets());
    let reporter = app.reporter();

    let plan = install::prepare(command.as_ref(), &reporter)?;
    let outcome = bundle::write_bundle(
        &plan,
        &TarGzBundleWriter,
        &args.output,
        args.env_file.as_deref(),
        &reporter,
    )?;

    app.renderer().render_bundle(
        service.name(),
        &args.output,
        args.env_file.as_deref(),
        &plan,
        &outcome,
    )
}
