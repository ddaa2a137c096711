//! swissvote CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use swissvote::cli::{Cli, OutputFormat, execute};
use swissvote::{Error, OperationResult};
use tracing_subscriber::EnvFilter;

fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to set tracing subscriber")
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        let _ = writeln!(std::io::stderr(), "Error: {e:#}");
        return ExitCode::FAILURE;
    }

    match execute(&cli) {
        Ok(output) => {
            if !output.is_empty() {
                let _ = write!(std::io::stdout(), "{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e, OutputFormat::parse(&cli.format));
            ExitCode::FAILURE
        }
    }
}

/// Failed voting operations keep their envelope shape in JSON mode.
fn report(err: &Error, format: OutputFormat) {
    match (err, format) {
        (Error::Fetch(fetch), OutputFormat::Json) => {
            let envelope = OperationResult::<()>::err(fetch);
            let _ = write!(std::io::stdout(), "{}", format.to_json(&envelope));
        }
        _ => {
            let _ = writeln!(std::io::stderr(), "Error: {err}");
        }
    }
}
