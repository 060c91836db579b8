//! Graph data model: labelled nodes, weighted relations, and the structural
//! checks that every [`Graph`] satisfies.

use std::{collections::HashSet, fmt, num::NonZeroU32, ops::RangeInclusive, str::FromStr};

use crate::error::GraphError;

/// Smallest edge weight a graph may carry.
pub const MIN_WEIGHT: u32 = 1;
/// Largest edge weight a graph may carry.
pub const MAX_WEIGHT: u32 = 6;

/// A vertex identified by a positive integer label.
///
/// Labels display as plain decimal text, so node `3` renders as `"3"`.
///
/// # Examples
/// ```
/// use randgraph_core::Node;
///
/// let node = Node::parse("3").expect("3 is a valid label");
/// assert_eq!(node.label(), 3);
/// assert_eq!(node.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Node {
    label: NonZeroU32,
}

impl Node {
    /// Creates a node with the given label.
    #[must_use]
    pub const fn new(label: NonZeroU32) -> Self {
        Self { label }
    }

    /// Creates the node stored at zero-based `position` of a graph, which
    /// carries label `position + 1`.
    ///
    /// Returns `None` when the label would not fit in a `u32`.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::Node;
    ///
    /// let first = Node::at_position(0).expect("position 0 is representable");
    /// assert_eq!(first.label(), 1);
    /// ```
    #[must_use]
    pub fn at_position(position: usize) -> Option<Self> {
        let label = u32::try_from(position).ok()?.checked_add(1)?;
        NonZeroU32::new(label).map(Self::new)
    }

    /// Parses a node from its textual label.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeLabel`] when `label` is not a positive
    /// decimal integer.
    pub fn parse(label: &str) -> Result<Self, GraphError> {
        label
            .parse::<NonZeroU32>()
            .map(Self::new)
            .map_err(|_| GraphError::InvalidNodeLabel {
                label: label.to_owned(),
            })
    }

    /// Returns the numeric label.
    #[must_use]
    pub const fn label(self) -> u32 {
        self.label.get()
    }
}

impl FromStr for Node {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A weighted relation between two nodes.
///
/// Edges are stored with a source and a destination, but two edges with
/// swapped endpoints describe the same relation.
///
/// # Examples
/// ```
/// use randgraph_core::{Edge, Node};
///
/// let a = Node::parse("4").expect("valid label");
/// let b = Node::parse("2").expect("valid label");
/// let edge = Edge::canonical(a, b, 5);
/// assert_eq!(edge.source(), b);
/// assert_eq!(edge.destination(), a);
/// assert!(edge.connects(a, b));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    source: Node,
    destination: Node,
    weight: u32,
}

impl Edge {
    /// Creates an edge exactly as given, without reordering the endpoints.
    #[must_use]
    pub const fn new(source: Node, destination: Node, weight: u32) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Creates an edge whose source is the endpoint with the smaller label.
    #[must_use]
    pub fn canonical(a: Node, b: Node, weight: u32) -> Self {
        let (source, destination) = if a <= b { (a, b) } else { (b, a) };
        Self::new(source, destination, weight)
    }

    /// Returns the recorded source node.
    #[must_use]
    pub const fn source(&self) -> Node {
        self.source
    }

    /// Returns the recorded destination node.
    #[must_use]
    pub const fn destination(&self) -> Node {
        self.destination
    }

    /// Returns the edge weight.
    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Reports whether this edge joins `a` and `b`, in either direction.
    #[must_use]
    pub fn connects(&self, a: Node, b: Node) -> bool {
        (self.source == a && self.destination == b) || (self.source == b && self.destination == a)
    }

    fn relation_key(&self) -> (u32, u32) {
        let (low, high) = if self.source <= self.destination {
            (self.source, self.destination)
        } else {
            (self.destination, self.source)
        };
        (low.label(), high.label())
    }
}

/// An undirected weighted graph with nodes labelled `1..=N`.
///
/// A `Graph` can only be obtained through [`Graph::try_from_parts`] (or the
/// generator, which goes through it), so every instance holds the structural
/// invariants: contiguous labels, canonical edges, no self-loops, no
/// repeated relations, and weights within [`MIN_WEIGHT`]..=[`MAX_WEIGHT`].
///
/// # Examples
/// ```
/// use randgraph_core::{Edge, Graph, Node};
///
/// let nodes: Vec<Node> = (0..3).filter_map(Node::at_position).collect();
/// let edges = vec![Edge::canonical(nodes[0], nodes[2], 2)];
/// let graph = Graph::try_from_parts(nodes, edges).expect("graph is well formed");
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph after checking every structural invariant.
    ///
    /// # Errors
    /// Returns the [`GraphError`] describing the first violation found: node
    /// labels are checked first, then each edge in order.
    pub fn try_from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        check_labels(&nodes)?;
        let mut relations = HashSet::with_capacity(edges.len());
        for edge in &edges {
            check_edge(edge, nodes.len())?;
            let (low, high) = edge.relation_key();
            if !relations.insert((low, high)) {
                return Err(GraphError::DuplicateRelation {
                    source_label: low,
                    destination: high,
                });
            }
        }
        Ok(Self { nodes, edges })
    }

    /// Returns the nodes in label order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the edges in generation order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Reports whether some edge already joins `a` and `b`.
    #[must_use]
    pub fn relation_exists(&self, a: Node, b: Node) -> bool {
        self.edges.iter().any(|edge| edge.connects(a, b))
    }

    /// Returns the number of distinct unordered pairs among `node_count`
    /// nodes, `N(N-1)/2`.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::Graph;
    ///
    /// assert_eq!(Graph::max_relations(4), 6);
    /// assert_eq!(Graph::max_relations(7), 21);
    /// ```
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "n(n-1) is always even so the halving is exact"
    )]
    pub const fn max_relations(node_count: usize) -> usize {
        node_count.saturating_mul(node_count.saturating_sub(1)) / 2
    }

    /// Returns the inclusive edge-count range `[N, N(N-1)/2]` used when
    /// sizing a random graph on `node_count` nodes.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::Graph;
    ///
    /// assert_eq!(Graph::edge_count_bounds(4), 4..=6);
    /// ```
    #[must_use]
    pub const fn edge_count_bounds(node_count: usize) -> RangeInclusive<usize> {
        node_count..=Self::max_relations(node_count)
    }
}

fn check_labels(nodes: &[Node]) -> Result<(), GraphError> {
    for (position, node) in nodes.iter().enumerate() {
        let expected = position.saturating_add(1);
        if usize::try_from(node.label()).ok() != Some(expected) {
            return Err(GraphError::NonContiguousLabels {
                position,
                expected,
                found: node.label(),
            });
        }
    }
    Ok(())
}

fn check_edge(edge: &Edge, node_count: usize) -> Result<(), GraphError> {
    for endpoint in [edge.source, edge.destination] {
        let known = usize::try_from(endpoint.label()).is_ok_and(|label| label <= node_count);
        if !known {
            return Err(GraphError::UnknownEndpoint {
                label: endpoint.label(),
            });
        }
    }
    if edge.source == edge.destination {
        return Err(GraphError::SelfLoop {
            label: edge.source.label(),
        });
    }
    if edge.source > edge.destination {
        return Err(GraphError::NonCanonicalEdge {
            source_label: edge.source.label(),
            destination: edge.destination.label(),
        });
    }
    if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&edge.weight) {
        return Err(GraphError::WeightOutOfRange {
            weight: edge.weight,
            min: MIN_WEIGHT,
            max: MAX_WEIGHT,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn node(label: u32) -> Node {
        Node::new(NonZeroU32::new(label).expect("test labels are non-zero"))
    }

    #[rstest]
    #[case("1", 1)]
    #[case("7", 7)]
    #[case("42", 42)]
    fn parse_accepts_positive_labels(#[case] raw: &str, #[case] expected: u32) {
        let parsed = Node::parse(raw).expect("label must parse");
        assert_eq!(parsed.label(), expected);
        assert_eq!(parsed.to_string(), raw);
    }

    #[rstest]
    #[case("")]
    #[case("0")]
    #[case("-1")]
    #[case("two")]
    #[case(" 3")]
    fn parse_rejects_non_positive_labels(#[case] raw: &str) {
        let err = Node::parse(raw).expect_err("label must be rejected");
        assert_eq!(
            err,
            GraphError::InvalidNodeLabel {
                label: raw.to_owned()
            }
        );
    }

    #[test]
    fn at_position_is_one_based() {
        let labels: Vec<u32> = (0..4)
            .filter_map(Node::at_position)
            .map(Node::label)
            .collect();
        assert_eq!(labels, vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case(2, 5, 2, 5)]
    #[case(5, 2, 2, 5)]
    fn canonical_orders_endpoints(
        #[case] a: u32,
        #[case] b: u32,
        #[case] source: u32,
        #[case] destination: u32,
    ) {
        let edge = Edge::canonical(node(a), node(b), 3);
        assert_eq!(edge.source().label(), source);
        assert_eq!(edge.destination().label(), destination);
        assert_eq!(edge.weight(), 3);
    }

    #[test]
    fn connects_ignores_direction() {
        let edge = Edge::new(node(1), node(3), 1);
        assert!(edge.connects(node(1), node(3)));
        assert!(edge.connects(node(3), node(1)));
        assert!(!edge.connects(node(1), node(2)));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(4, 6)]
    #[case(5, 10)]
    #[case(7, 21)]
    fn max_relations_matches_complete_graph(#[case] nodes: usize, #[case] expected: usize) {
        assert_eq!(Graph::max_relations(nodes), expected);
    }

    #[test]
    fn relation_exists_checks_both_orientations() {
        let nodes: Vec<Node> = (0..3).filter_map(Node::at_position).collect();
        let graph = Graph::try_from_parts(nodes, vec![Edge::canonical(node(1), node(2), 4)])
            .expect("graph must be valid");
        assert!(graph.relation_exists(node(2), node(1)));
        assert!(!graph.relation_exists(node(2), node(3)));
    }
}
