//! placevisits - CLI entry point
//!
//! Exit codes: 0 on success, 1 when arguments are invalid, 2 when the
//! extraction itself fails.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use placevisits::cli::Cli;
use placevisits::ExtractOptions;

const EXIT_USAGE: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here, on stdout
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.log_level());

    let options = match cli.options() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!();
            eprintln!("{}", Cli::command().render_help());
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match cmd_extract(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Log to stderr so stdout carries only CSV. `RUST_LOG` wins over `-v`.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn cmd_extract(options: &ExtractOptions) -> Result<()> {
    let stdout = io::stdout();
    let summary = placevisits::run(options, stdout.lock())
        .with_context(|| format!("Failed to extract visits from {:?}", options.source))?;

    if !summary.skipped.is_empty() {
        eprintln!("Skipped {} malformed file(s):", summary.skipped.len());
        for skipped in &summary.skipped {
            eprintln!("  - {}: {}", skipped.name, skipped.reason);
        }
    }

    Ok(())
}
