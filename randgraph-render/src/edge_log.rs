//! Plain-text edge listing written alongside the rendered page.

use std::io::{self, Write};

use randgraph_core::{Edge, Graph};

/// Formats a single edge as `Source: <src> Target: <dst> Value: <weight>`.
///
/// # Examples
/// ```
/// use randgraph_core::{Edge, Node};
/// use randgraph_render::edge_line;
///
/// let edge = Edge::canonical(
///     Node::parse("1").expect("valid label"),
///     Node::parse("3").expect("valid label"),
///     5,
/// );
/// assert_eq!(edge_line(&edge), "Source: 1 Target: 3 Value: 5");
/// ```
#[must_use]
pub fn edge_line(edge: &Edge) -> String {
    format!(
        "Source: {} Target: {} Value: {}",
        edge.source(),
        edge.destination(),
        edge.weight()
    )
}

/// Writes one line per edge of `graph` to `writer`, in generation order.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn write_edge_log(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    for edge in graph.edges() {
        writeln!(writer, "{}", edge_line(edge))?;
    }
    Ok(())
}
