//! Command line front end.

use afxgen_codegen::config::{DEFAULT_HEADER_NAME, DEFAULT_NAMESPACE, DEFAULT_SOURCE_NAME};
use afxgen_codegen::{CleanOutcome, GeneratorConfig, WriteOutcome};
use anyhow::Context;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Generates Axe-Fx II lookup tables from a device description.
#[derive(Debug, Parser)]
#[command(name = "afxgen", version, arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Delete the generated files from OUTPUT_DIR (same as `clean`).
    #[arg(long, value_name = "OUTPUT_DIR")]
    pub clean: Option<PathBuf>,

    /// Output options.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the header and source files from a device description.
    Generate {
        /// Device description (XML).
        input: PathBuf,
        /// Directory receiving the generated files.
        output_dir: PathBuf,
    },
    /// Delete previously generated files.
    Clean {
        /// Directory holding the generated files.
        output_dir: PathBuf,
    },
}

/// Options shaping the generated files.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// C++ namespace wrapping the generated code.
    #[arg(long, global = true, env = "AFXGEN_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// File name of the generated header.
    #[arg(long, global = true, default_value = DEFAULT_HEADER_NAME)]
    pub header_name: String,

    /// File name of the generated source.
    #[arg(long, global = true, default_value = DEFAULT_SOURCE_NAME)]
    pub source_name: String,
}

impl OutputArgs {
    /// Builds the generator configuration.
    #[must_use]
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .namespace(&self.namespace)
            .header_name(&self.header_name)
            .source_name(&self.source_name)
    }
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Generate from `input` into `output_dir`.
    Generate {
        /// Device description.
        input: PathBuf,
        /// Output directory.
        output_dir: PathBuf,
    },
    /// Remove generated files from `output_dir`.
    Clean {
        /// Output directory.
        output_dir: PathBuf,
    },
}

impl Cli {
    /// Resolves the subcommand or legacy `--clean` flag into one action.
    ///
    /// # Errors
    /// Returns a usage error if both or neither forms are given.
    pub fn action(&self) -> Result<Action, clap::Error> {
        match (&self.command, &self.clean) {
            (Some(_), Some(_)) => Err(Cli::command().error(
                clap::error::ErrorKind::ArgumentConflict,
                "--clean cannot be combined with a subcommand",
            )),
            (Some(Command::Generate { input, output_dir }), None) => Ok(Action::Generate {
                input: input.clone(),
                output_dir: output_dir.clone(),
            }),
            (Some(Command::Clean { output_dir }), None) | (None, Some(output_dir)) => {
                Ok(Action::Clean {
                    output_dir: output_dir.clone(),
                })
            }
            (None, None) => Err(Cli::command().error(
                clap::error::ErrorKind::MissingSubcommand,
                "expected `generate`, `clean` or --clean",
            )),
        }
    }
}

/// Runs an action, printing one status line per file to stdout.
///
/// # Errors
/// Returns an error if generation, writing, or cleaning fails.
pub fn run(action: &Action, config: &GeneratorConfig) -> anyhow::Result<()> {
    match action {
        Action::Generate { input, output_dir } => {
            tracing::debug!(
                input = %input.display(),
                output_dir = %output_dir.display(),
                "generate"
            );
            let reports = afxgen_codegen::generate_into(input, output_dir, config)
                .with_context(|| format!("generating from {}", input.display()))?;
            for report in reports {
                match report.outcome {
                    WriteOutcome::Generated => println!("Generating {}", report.path.display()),
                    WriteOutcome::Unchanged => {
                        println!("{} is up to date.", report.path.display());
                    }
                }
            }
        }
        Action::Clean { output_dir } => {
            println!("Deleting generated files in {}", output_dir.display());
            let reports = afxgen_codegen::clean(output_dir, config)
                .with_context(|| format!("cleaning {}", output_dir.display()))?;
            let removed = reports
                .iter()
                .filter(|r| r.outcome == CleanOutcome::Removed)
                .count();
            tracing::debug!(removed, "clean finished");
        }
    }
    Ok(())
}
