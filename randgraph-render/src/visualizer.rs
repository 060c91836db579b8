//! The narrow seam between a generated graph and whatever displays it.

use std::path::{Path, PathBuf};

use randgraph_core::Graph;
use tracing::{info, instrument};

use crate::{error::RenderError, launch::Launcher, page::write_page};

/// File name the page is written to when no other path is chosen.
pub const DEFAULT_OUTPUT: &str = "graph.html";

/// Displays a graph.
pub trait Visualizer {
    /// Makes `graph` visible to the user.
    ///
    /// # Errors
    /// Returns [`RenderError`] when the graph cannot be rendered or shown.
    fn visualize(&self, graph: &Graph) -> Result<(), RenderError>;
}

/// Writes the graph to an HTML page and stops there.
#[derive(Clone, Debug)]
pub struct PageVisualizer {
    output: PathBuf,
}

impl Default for PageVisualizer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT)
    }
}

impl PageVisualizer {
    /// Creates a visualizer that writes to `output`.
    #[must_use]
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Returns the page destination.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Visualizer for PageVisualizer {
    fn visualize(&self, graph: &Graph) -> Result<(), RenderError> {
        write_page(graph, &self.output)?;
        info!(
            path = %self.output.display(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph page written"
        );
        Ok(())
    }
}

/// Writes the graph to an HTML page and opens it with a [`Launcher`].
#[derive(Clone, Debug)]
pub struct BrowserVisualizer<L> {
    page: PageVisualizer,
    launcher: L,
}

impl<L: Launcher> BrowserVisualizer<L> {
    /// Creates a visualizer that writes to `output` and opens the result
    /// with `launcher`.
    #[must_use]
    pub fn new(output: impl Into<PathBuf>, launcher: L) -> Self {
        Self {
            page: PageVisualizer::new(output),
            launcher,
        }
    }

    /// Returns the page destination.
    #[must_use]
    pub fn output(&self) -> &Path {
        self.page.output()
    }
}

impl<L: Launcher> Visualizer for BrowserVisualizer<L> {
    #[instrument(name = "render.visualize", err, skip(self, graph))]
    fn visualize(&self, graph: &Graph) -> Result<(), RenderError> {
        self.page.visualize(graph)?;
        self.launcher.open(self.page.output())?;
        Ok(())
    }
}
