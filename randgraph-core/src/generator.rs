//! Random graph generation.
//!
//! The generator picks a node count in [`MIN_NODES`]..=[`MAX_NODES`], an edge
//! count in `[N, N(N-1)/2]`, and then places each edge by rejection sampling:
//! two endpoints are drawn with replacement and redrawn while they form a
//! self-pair or repeat an existing relation. Each edge gets a bounded number
//! of draws; once that budget is spent the edge is taken uniformly from the
//! relations still unused, which always exist because the edge count never
//! exceeds the number of distinct pairs.

use std::{
    collections::HashSet,
    num::NonZeroU32,
    time::{SystemTime, UNIX_EPOCH},
};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{Span, debug, field, instrument};

use crate::{
    error::GeneratorError,
    graph::{Edge, Graph, MAX_WEIGHT, MIN_WEIGHT, Node},
};

/// Smallest node count the generator produces.
pub const MIN_NODES: usize = 4;
/// Largest node count the generator produces.
pub const MAX_NODES: usize = 7;
/// Draws allowed per edge, as a multiple of the number of distinct pairs,
/// before falling back to picking from the unused relations directly.
pub const REJECTION_BUDGET_FACTOR: usize = 16;

/// Generates a random graph from a generator seeded with the wall clock.
///
/// This is the no-argument entry point used by the binary. Successive calls
/// are not reproducible.
///
/// # Errors
/// Returns [`GeneratorError`] only if the generated graph fails its internal
/// consistency check.
///
/// # Examples
/// ```
/// let graph = randgraph_core::generate().expect("generation succeeds");
/// assert!((4..=7).contains(&graph.node_count()));
/// ```
pub fn generate() -> Result<Graph, GeneratorError> {
    let seed = clock_seed();
    debug!(seed, "seeding generator from wall clock");
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_graph(&mut rng)
}

/// Derives a seed from the current wall-clock time at nanosecond resolution.
///
/// A clock set before the Unix epoch yields `0`.
#[must_use]
pub fn clock_seed() -> u64 {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    elapsed
        .as_secs()
        .wrapping_mul(1_000_000_000)
        .wrapping_add(u64::from(elapsed.subsec_nanos()))
}

/// Generates a random graph using `rng`.
///
/// # Errors
/// Returns [`GeneratorError`] only if the generated graph fails its internal
/// consistency check.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randgraph_core::generate_graph;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = generate_graph(&mut rng).expect("generation succeeds");
/// let bounds = randgraph_core::Graph::edge_count_bounds(graph.node_count());
/// assert!(bounds.contains(&graph.edge_count()));
/// ```
#[instrument(
    name = "generator.generate",
    err,
    skip(rng),
    fields(node_count = field::Empty, edge_count = field::Empty),
)]
pub fn generate_graph<R: Rng + ?Sized>(rng: &mut R) -> Result<Graph, GeneratorError> {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edge_count = rng.gen_range(Graph::edge_count_bounds(node_count));
    let span = Span::current();
    span.record("node_count", node_count);
    span.record("edge_count", edge_count);
    generate_graph_with_counts(rng, node_count, edge_count)
}

/// Generates a random graph with exactly `node_count` nodes and
/// `edge_count` edges.
///
/// # Errors
/// Returns [`GeneratorError::NodeCountOutOfRange`] when `node_count` is
/// outside [`MIN_NODES`]..=[`MAX_NODES`] and
/// [`GeneratorError::EdgeCountOutOfRange`] when `edge_count` is outside
/// [`Graph::edge_count_bounds`].
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randgraph_core::generate_graph_with_counts;
///
/// let mut rng = SmallRng::seed_from_u64(11);
/// let graph = generate_graph_with_counts(&mut rng, 4, 6).expect("counts are valid");
/// assert_eq!(graph.edge_count(), 6);
/// ```
#[instrument(
    name = "generator.place_edges",
    err,
    skip(rng),
    fields(rejected_draws = field::Empty, fallback_picks = field::Empty),
)]
pub fn generate_graph_with_counts<R: Rng + ?Sized>(
    rng: &mut R,
    node_count: usize,
    edge_count: usize,
) -> Result<Graph, GeneratorError> {
    let label_count = validate_counts(node_count, edge_count)?;
    let nodes: Vec<Node> = (0..node_count).filter_map(Node::at_position).collect();

    let mut sampler = RelationSampler::new(label_count, Graph::max_relations(node_count));
    let mut edges = Vec::with_capacity(edge_count);
    for placed in 0..edge_count {
        let (a, b) = sampler
            .draw(rng)
            .ok_or(GeneratorError::RelationsExhausted {
                placed,
                requested: edge_count,
            })?;
        let weight = rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT);
        edges.push(Edge::canonical(a, b, weight));
    }

    let span = Span::current();
    span.record("rejected_draws", sampler.rejected);
    span.record("fallback_picks", sampler.fallbacks);
    Ok(Graph::try_from_parts(nodes, edges)?)
}

fn validate_counts(node_count: usize, edge_count: usize) -> Result<NonZeroU32, GeneratorError> {
    let node_range_error = GeneratorError::NodeCountOutOfRange {
        got: node_count,
        min: MIN_NODES,
        max: MAX_NODES,
    };
    if !(MIN_NODES..=MAX_NODES).contains(&node_count) {
        return Err(node_range_error);
    }
    let bounds = Graph::edge_count_bounds(node_count);
    if !bounds.contains(&edge_count) {
        return Err(GeneratorError::EdgeCountOutOfRange {
            got: edge_count,
            node_count,
            min: *bounds.start(),
            max: *bounds.end(),
        });
    }
    u32::try_from(node_count)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(node_range_error)
}

/// Draws unused relations among nodes `1..=label_count`.
struct RelationSampler {
    label_count: NonZeroU32,
    used: HashSet<(Node, Node)>,
    budget: usize,
    rejected: usize,
    fallbacks: usize,
}

impl RelationSampler {
    fn new(label_count: NonZeroU32, max_relations: usize) -> Self {
        Self {
            label_count,
            used: HashSet::with_capacity(max_relations),
            budget: max_relations.saturating_mul(REJECTION_BUDGET_FACTOR),
            rejected: 0,
            fallbacks: 0,
        }
    }

    /// Returns a canonical pair not drawn before, or `None` once every pair
    /// is in use.
    fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(Node, Node)> {
        for _ in 0..self.budget {
            let candidate = match (self.sample_node(rng), self.sample_node(rng)) {
                (Some(a), Some(b)) if a < b => Some((a, b)),
                (Some(a), Some(b)) if a > b => Some((b, a)),
                _ => None,
            };
            if let Some(pair) = candidate
                && self.used.insert(pair)
            {
                return Some(pair);
            }
            self.rejected = self.rejected.saturating_add(1);
        }
        self.pick_unused(rng)
    }

    fn sample_node<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Node> {
        label_node(rng.gen_range(1..=self.label_count.get()))
    }

    fn pick_unused<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(Node, Node)> {
        let unused: Vec<(Node, Node)> = self
            .all_pairs()
            .filter(|pair| !self.used.contains(pair))
            .collect();
        if unused.is_empty() {
            return None;
        }
        let pair = *unused.get(rng.gen_range(0..unused.len()))?;
        self.used.insert(pair);
        self.fallbacks = self.fallbacks.saturating_add(1);
        debug!(
            source = %pair.0,
            destination = %pair.1,
            "rejection budget spent; picked an unused relation directly"
        );
        Some(pair)
    }

    fn all_pairs(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        let labels = 1..=self.label_count.get();
        labels.clone().flat_map(move |low| {
            labels
                .clone()
                .filter(move |&high| high > low)
                .filter_map(move |high| Some((label_node(low)?, label_node(high)?)))
        })
    }
}

fn label_node(label: u32) -> Option<Node> {
    NonZeroU32::new(label).map(Node::new)
}
