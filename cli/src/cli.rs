//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;

/// Installation payloads for validator-node services
#[derive(Parser)]
#[command(
    name = "nodekit",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Deployment file [default: ./nodekit.yaml]
    #[arg(long, global = true, env = "NODEKIT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read install scripts from this directory instead of the bundled set
    #[arg(long, global = true, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the deployment file
    Check,

    /// Print the environment the install runs with
    Env,

    /// Print the flags passed to the service binary
    Args,

    /// Build the install payload and write it as a tar.gz bundle
    Bundle(commands::bundle::BundleArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the deployment cannot be loaded or the command
    /// fails.
    pub fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            config,
            assets_dir,
            command,
            ..
        } = self;

        let app = AppContext::new(AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            config,
            assets_dir,
        });

        match command {
            Command::Check => commands::check::run(&app),
            Command::Env => commands::env::run(&app),
            Command::Args => commands::args::run(&app),
            Command::Bundle(args) => commands::bundle::run(&app, &args),
            Command::Version => commands::version::run(&app),
        }
    }
}
