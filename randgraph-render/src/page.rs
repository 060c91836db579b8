//! HTML page rendering for ECharts graph series.
//!
//! The page loads ECharts and the Westeros theme from the public asset host
//! and embeds the chart options as a JSON literal.

use std::{fs, path::Path};

use randgraph_core::Graph;
use serde::Serialize;
use tracing::{Span, field, instrument};

use crate::error::RenderError;

/// Title shown above the chart and in the browser tab.
pub const PAGE_TITLE: &str = "Graph rendered";

const ASSETS_HOST: &str = "https://go-echarts.github.io/go-echarts-assets/assets/";
const THEME: &str = "westeros";
const CHART_ID: &str = "randgraph";
const REPULSION: u32 = 5000;

#[derive(Debug, Serialize)]
struct ChartOptions {
    title: Title,
    tooltip: Toggle,
    series: [GraphSeries; 1],
}

#[derive(Debug, Serialize)]
struct Title {
    text: &'static str,
}

#[derive(Debug, Serialize)]
struct Toggle {
    show: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphSeries {
    name: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    layout: &'static str,
    force: Force,
    roam: bool,
    label: Label,
    mark_point: MarkPoint,
    data: Vec<ChartNode>,
    links: Vec<ChartLink>,
}

#[derive(Debug, Serialize)]
struct Force {
    repulsion: u32,
}

#[derive(Debug, Serialize)]
struct Label {
    show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct MarkPoint {
    label: Label,
}

/// A node entry of the chart, identified by its label text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChartNode {
    /// Node label.
    pub name: String,
}

/// A link entry of the chart: source label, target label and weight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChartLink {
    /// Label of the source node.
    pub source: String,
    /// Label of the target node.
    pub target: String,
    /// Edge weight.
    pub value: u32,
}

/// Converts the nodes of `graph` into chart entries, in label order.
#[must_use]
pub fn chart_nodes(graph: &Graph) -> Vec<ChartNode> {
    graph
        .nodes()
        .iter()
        .map(|node| ChartNode {
            name: node.to_string(),
        })
        .collect()
}

/// Converts the edges of `graph` into chart links, in generation order.
#[must_use]
pub fn chart_links(graph: &Graph) -> Vec<ChartLink> {
    graph
        .edges()
        .iter()
        .map(|edge| ChartLink {
            source: edge.source().to_string(),
            target: edge.destination().to_string(),
            value: edge.weight(),
        })
        .collect()
}

/// Renders `graph` as a standalone HTML document.
///
/// # Errors
/// Returns [`RenderError::Serialize`] if the chart options cannot be encoded.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randgraph_render::render_page;
///
/// let graph = randgraph_core::generate_graph(&mut SmallRng::seed_from_u64(1))
///     .expect("generation succeeds");
/// let html = render_page(&graph).expect("page renders");
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_page(graph: &Graph) -> Result<String, RenderError> {
    let options = ChartOptions {
        title: Title { text: PAGE_TITLE },
        tooltip: Toggle { show: true },
        series: [GraphSeries {
            name: "graph",
            kind: "graph",
            layout: "circular",
            force: Force {
                repulsion: REPULSION,
            },
            roam: true,
            label: Label {
                show: true,
                position: Some("right"),
            },
            mark_point: MarkPoint {
                label: Label {
                    show: true,
                    position: None,
                },
            },
            data: chart_nodes(graph),
            links: chart_links(graph),
        }],
    };
    let json = serde_json::to_string(&options)
        .map_err(|source| RenderError::Serialize { source })?
        .replace("</", "<\\/");
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{PAGE_TITLE}</title>
    <script src="{ASSETS_HOST}echarts.min.js"></script>
    <script src="{ASSETS_HOST}themes/{THEME}.js"></script>
</head>
<body>
<div class="container">
    <div class="item" id="{CHART_ID}" style="width:900px;height:500px;"></div>
</div>
<script type="text/javascript">
    "use strict";
    let chart = echarts.init(document.getElementById("{CHART_ID}"), "{THEME}", {{ renderer: "canvas" }});
    let option = {json};
    chart.setOption(option);
</script>
</body>
</html>
"#
    ))
}

/// Renders `graph` and writes the page to `path`, replacing any existing
/// file.
///
/// # Errors
/// Returns [`RenderError::Serialize`] if rendering fails and
/// [`RenderError::Write`] if the file cannot be created or written.
#[instrument(
    name = "render.write_page",
    err,
    skip(graph),
    fields(path = field::Empty, bytes = field::Empty),
)]
pub fn write_page(graph: &Graph, path: &Path) -> Result<(), RenderError> {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let html = render_page(graph)?;
    fs::write(path, &html).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    span.record("bytes", html.len());
    Ok(())
}
