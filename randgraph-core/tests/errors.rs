//! Tests for the stable error codes exposed by the core library.

use randgraph_core::{GeneratorError, GeneratorErrorCode, GraphError, GraphErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    GraphError::InvalidNodeLabel { label: "x".into() },
    GraphErrorCode::InvalidNodeLabel,
    "GRAPH_INVALID_NODE_LABEL",
)]
#[case(
    GraphError::NonContiguousLabels { position: 0, expected: 1, found: 2 },
    GraphErrorCode::NonContiguousLabels,
    "GRAPH_NON_CONTIGUOUS_LABELS",
)]
#[case(
    GraphError::UnknownEndpoint { label: 9 },
    GraphErrorCode::UnknownEndpoint,
    "GRAPH_UNKNOWN_ENDPOINT",
)]
#[case(GraphError::SelfLoop { label: 1 }, GraphErrorCode::SelfLoop, "GRAPH_SELF_LOOP")]
#[case(
    GraphError::NonCanonicalEdge { source_label: 2, destination: 1 },
    GraphErrorCode::NonCanonicalEdge,
    "GRAPH_NON_CANONICAL_EDGE",
)]
#[case(
    GraphError::DuplicateRelation { source_label: 1, destination: 2 },
    GraphErrorCode::DuplicateRelation,
    "GRAPH_DUPLICATE_RELATION",
)]
#[case(
    GraphError::WeightOutOfRange { weight: 9, min: 1, max: 6 },
    GraphErrorCode::WeightOutOfRange,
    "GRAPH_WEIGHT_OUT_OF_RANGE",
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] text: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), text);
    assert_eq!(error.code().to_string(), text);
}

#[rstest]
#[case(
    GeneratorError::NodeCountOutOfRange { got: 9, min: 4, max: 7 },
    GeneratorErrorCode::NodeCountOutOfRange,
    None,
)]
#[case(
    GeneratorError::EdgeCountOutOfRange { got: 2, node_count: 4, min: 4, max: 6 },
    GeneratorErrorCode::EdgeCountOutOfRange,
    None,
)]
#[case(
    GeneratorError::RelationsExhausted { placed: 6, requested: 7 },
    GeneratorErrorCode::RelationsExhausted,
    None,
)]
#[case(
    GeneratorError::from(GraphError::SelfLoop { label: 3 }),
    GeneratorErrorCode::Inconsistent,
    Some(GraphErrorCode::SelfLoop),
)]
fn returns_expected_generator_code(
    #[case] error: GeneratorError,
    #[case] expected: GeneratorErrorCode,
    #[case] graph_code: Option<GraphErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.graph_code(), graph_code);
}
