//! CLI entry point for randgraph.
//!
//! Initialises logging, generates a random graph, prints its edges to
//! stdout, writes the HTML page and opens it in the default browser. Any
//! failure is logged with its stable code and mapped to a failing exit
//! status.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use randgraph_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());
    run_cli(cli, writer).context("failed to generate and render graph")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Generate(generate) => Some(generate.code().as_str()),
                CliError::Render(render) => Some(render.code().as_str()),
                CliError::EdgeLog { .. } => None,
            })
            .map(field::display);

        let message = format!("{err:#}");
        error!(error = %message, code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
