//! Argument parsing and orchestration for the randgraph CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use randgraph_core::{GeneratorError, Graph};
use randgraph_render::{
    BrowserVisualizer, DEFAULT_OUTPUT, PageVisualizer, RenderError, SystemLauncher, Visualizer,
    write_edge_log,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "randgraph",
    about = "Generate a small random weighted graph and open it in the browser."
)]
pub struct Cli {
    /// Where to write the rendered HTML page.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Write the page and the edge listing without opening a browser.
    #[arg(long = "no-open")]
    pub no_open: bool,
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph generation failed.
    #[error(transparent)]
    Generate(#[from] GeneratorError),
    /// Rendering or opening the page failed.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// The edge listing could not be written.
    #[error("failed to write edge listing: {source}")]
    EdgeLog {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Summarises a completed run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// The generated graph.
    pub graph: Graph,
    /// Where the page was written.
    pub output: PathBuf,
    /// Whether the page was handed to the browser.
    pub opened: bool,
}

/// Generates a graph, writes its edge listing to `stdout`, and renders it.
///
/// # Errors
/// Returns [`CliError`] when generation, the edge listing, rendering or
/// launching fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use randgraph_cli::cli::{Cli, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let cli = Cli {
///     output: dir.path().join("graph.html"),
///     no_open: true,
/// };
/// let mut stdout = Vec::new();
/// let summary = run_cli(cli, &mut stdout)?;
/// assert_eq!(String::from_utf8(stdout)?.lines().count(), summary.graph.edge_count());
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, stdout),
    fields(output = field::Empty, open = field::Empty),
)]
pub fn run_cli(cli: Cli, stdout: impl Write) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("output", field::display(cli.output.display()));
    span.record("open", !cli.no_open);

    let graph = randgraph_core::generate()?;
    let visualizer = select_visualizer(&cli);
    execute(&graph, visualizer.as_ref(), stdout)?;

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        graph,
        output: cli.output,
        opened: !cli.no_open,
    })
}

pub(super) fn select_visualizer(cli: &Cli) -> Box<dyn Visualizer> {
    if cli.no_open {
        Box::new(PageVisualizer::new(cli.output.clone()))
    } else {
        Box::new(BrowserVisualizer::new(
            cli.output.clone(),
            SystemLauncher::new(),
        ))
    }
}

/// Prints the edge listing, flushes it, then hands the graph to
/// `visualizer`.
#[instrument(name = "cli.execute", err, skip_all)]
pub(super) fn execute(
    graph: &Graph,
    visualizer: &dyn Visualizer,
    mut stdout: impl Write,
) -> Result<(), CliError> {
    write_edge_log(graph, &mut stdout)
        .and_then(|()| stdout.flush())
        .map_err(|source| CliError::EdgeLog { source })?;
    visualizer.visualize(graph)?;
    Ok(())
}
