//! afxgen command line entry point.
//!
//! ```text
//! afxgen generate <INPUT> <OUTPUT_DIR>
//! afxgen clean <OUTPUT_DIR>
//! afxgen --clean <OUTPUT_DIR>
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

use afxgen::cli::{Cli, run};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let action = match cli.action() {
        Ok(action) => action,
        Err(e) => e.exit(),
    };

    match run(&action, &cli.output.to_config()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
