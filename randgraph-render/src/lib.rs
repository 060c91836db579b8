//! Rendering collaborators for randgraph.
//!
//! Turns a [`randgraph_core::Graph`] into an ECharts HTML page, writes the
//! plain-text edge listing, and opens the page with the host's default
//! application. Callers depend on the [`Visualizer`] trait; the concrete
//! visualizers compose page writing with a [`Launcher`].

mod edge_log;
mod error;
mod launch;
mod page;
mod visualizer;

pub use crate::{
    edge_log::{edge_line, write_edge_log},
    error::{LaunchError, RenderError, RenderErrorCode},
    launch::{LaunchCommand, Launcher, SystemLauncher},
    page::{ChartLink, ChartNode, PAGE_TITLE, chart_links, chart_nodes, render_page, write_page},
    visualizer::{BrowserVisualizer, DEFAULT_OUTPUT, PageVisualizer, Visualizer},
};
