//! Support library for the randgraph binary.
//!
//! Exposes the CLI and logging modules so tests can drive the whole
//! generate-and-render flow without forking a subprocess.

pub mod cli;
pub mod logging;
