//! nodekit CLI - installation payloads for validator-node services

use clap::Parser;
use nodekit_cli::cli::Cli;
use nodekit_cli::output::json::{error_code, format_error};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over
/// `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;

    if let Err(e) = cli.run() {
        let message = format!("{e:#}");
        match json.then(|| format_error(&message, error_code(&e))) {
            Some(Ok(doc)) => println!("{doc}"),
            _ => eprintln!("Error: {message}"),
        }
        std::process::exit(1);
    }
}
