//! CLI entry point for spanwise.
//!
//! Initialises logging, runs the parsed command, and prints its summary to
//! stdout. Failures are logged with the library error code, when one exists,
//! and mapped to a non-zero exit status.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use spanwise_cli::{
    cli::{Cli, CliError, RunSummary, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn print_summary(summary: &RunSummary) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    render_summary(summary, &mut out).context("failed to render summary")?;
    out.flush().context("failed to flush stdout")
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let outcome = run_cli(Cli::parse())
        .context("run failed")
        .and_then(|summary| print_summary(&summary));
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<CliError>().and_then(CliError::code);
            error!(
                error = format_args!("{err:#}"),
                code = code.map(field::display),
                "command execution failed"
            );
            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is unavailable until logging initialises"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
