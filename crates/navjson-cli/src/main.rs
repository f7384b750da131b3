//! # navjson CLI entry point
//!
//! Parses command-line arguments, installs logging and maps the outcome of
//! the validation to an exit code.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use navjson_cli::{run_validate, verbosity_filter, ValidateArgs};

/// Validate a nav.json documentation navigation file.
///
/// Checks that the document is well-formed and has its required keys.
/// With `--check-files`, also checks that every referenced file exists.
#[derive(Parser, Debug)]
#[command(name = "navjson", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    validate: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Silent mode produces no output at all, logs included.
    let filter = if cli.validate.silent {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(cli.verbose)))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    match run_validate(&cli.validate) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
