//! Command-line interface for randgraph.
//!
//! Generates one random graph, prints its edges, writes the HTML page and
//! opens it in the default browser. Flags only move the page or skip the
//! browser; graph sizes and weights are fixed.

mod commands;

pub use commands::{Cli, CliError, ExecutionSummary, run_cli};
