//! Error types for rendering and launching.

use std::{io, path::PathBuf};

use randgraph_core::define_error_codes;
use thiserror::Error;

/// Errors raised while asking the operating system to open a file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The host platform has no known default-application command.
    #[error("unsupported platform `{os}`")]
    UnsupportedPlatform {
        /// Platform name as reported by `std::env::consts::OS`.
        os: String,
    },
    /// The launch command could not be started.
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        /// Program that failed to start.
        program: &'static str,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

/// Errors raised while turning a graph into a visualization.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RenderError {
    /// The chart configuration could not be serialized.
    #[error("failed to serialize chart options: {source}")]
    Serialize {
        /// Error reported by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The output page could not be written.
    #[error("failed to write `{path}`: {source}")]
    Write {
        /// Destination of the page.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The written page could not be opened.
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

define_error_codes! {
    /// Stable codes describing [`RenderError`] variants.
    enum RenderErrorCode for RenderError {
        /// The chart configuration could not be serialized.
        Serialize => Serialize { .. } => "RENDER_SERIALIZE",
        /// The output page could not be written.
        Write => Write { .. } => "RENDER_WRITE",
        /// The written page could not be opened.
        Launch => Launch { .. } => "RENDER_LAUNCH",
    }
}
