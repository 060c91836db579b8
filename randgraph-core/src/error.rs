//! Error types for the randgraph core library.
//!
//! Defines the structural errors raised when a [`crate::Graph`] violates its
//! invariants and the errors raised by the generator, each paired with a
//! stable machine-readable code.

use thiserror::Error;

/// Declares a stable error-code enum for an error type.
///
/// Each arm maps an error variant pattern to a code variant and its string
/// form. The macro generates the code enum, `as_str`, `Display`, and a
/// `code()` accessor on the error type.
#[doc(hidden)]
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A structural invariant of [`crate::Graph`] was violated.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A node label was not a positive decimal integer.
    #[error("node label `{label}` is not a positive integer")]
    InvalidNodeLabel {
        /// The offending label text.
        label: String,
    },
    /// Node labels did not run `1..=N` in insertion order.
    #[error("node at position {position} has label {found} but {expected} was expected")]
    NonContiguousLabels {
        /// Zero-based position of the offending node.
        position: usize,
        /// Label expected at that position.
        expected: usize,
        /// Label actually stored there.
        found: u32,
    },
    /// An edge referenced a node that is not part of the graph.
    #[error("edge endpoint {label} is not a node of the graph")]
    UnknownEndpoint {
        /// Label of the missing endpoint.
        label: u32,
    },
    /// An edge connected a node to itself.
    #[error("edge connects node {label} to itself")]
    SelfLoop {
        /// Label of the looping node.
        label: u32,
    },
    /// An edge recorded the larger label as its source.
    #[error("edge {source_label} -> {destination} is not in canonical orientation")]
    NonCanonicalEdge {
        /// Recorded source label.
        source_label: u32,
        /// Recorded destination label.
        destination: u32,
    },
    /// Two edges connected the same unordered pair.
    #[error("relation between {source_label} and {destination} appears more than once")]
    DuplicateRelation {
        /// Smaller label of the repeated pair.
        source_label: u32,
        /// Larger label of the repeated pair.
        destination: u32,
    },
    /// An edge weight fell outside the permitted range.
    #[error("edge weight {weight} is outside [{min}, {max}]")]
    WeightOutOfRange {
        /// The offending weight.
        weight: u32,
        /// Smallest permitted weight.
        min: u32,
        /// Largest permitted weight.
        max: u32,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A node label was not a positive decimal integer.
        InvalidNodeLabel => InvalidNodeLabel { .. } => "GRAPH_INVALID_NODE_LABEL",
        /// Node labels did not run `1..=N` in insertion order.
        NonContiguousLabels => NonContiguousLabels { .. } => "GRAPH_NON_CONTIGUOUS_LABELS",
        /// An edge referenced a node that is not part of the graph.
        UnknownEndpoint => UnknownEndpoint { .. } => "GRAPH_UNKNOWN_ENDPOINT",
        /// An edge connected a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge recorded the larger label as its source.
        NonCanonicalEdge => NonCanonicalEdge { .. } => "GRAPH_NON_CANONICAL_EDGE",
        /// Two edges connected the same unordered pair.
        DuplicateRelation => DuplicateRelation { .. } => "GRAPH_DUPLICATE_RELATION",
        /// An edge weight fell outside the permitted range.
        WeightOutOfRange => WeightOutOfRange { .. } => "GRAPH_WEIGHT_OUT_OF_RANGE",
    }
}

/// Error type produced by the random graph generator.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// Requested node count was outside the supported range.
    #[error("node count {got} is outside [{min}, {max}]")]
    NodeCountOutOfRange {
        /// The rejected node count.
        got: usize,
        /// Smallest supported node count.
        min: usize,
        /// Largest supported node count.
        max: usize,
    },
    /// Requested edge count was outside `[N, N(N-1)/2]`.
    #[error("edge count {got} is outside [{min}, {max}] for {node_count} nodes")]
    EdgeCountOutOfRange {
        /// The rejected edge count.
        got: usize,
        /// Node count the bounds were derived from.
        node_count: usize,
        /// Smallest permitted edge count.
        min: usize,
        /// Largest permitted edge count.
        max: usize,
    },
    /// No unused relation remained while edges were still requested.
    #[error("no unused relation left after {placed} of {requested} edges")]
    RelationsExhausted {
        /// Edges placed before the pool ran dry.
        placed: usize,
        /// Edges requested in total.
        requested: usize,
    },
    /// The generated graph failed its own consistency check.
    #[error("generated graph is inconsistent: {source}")]
    Inconsistent {
        /// The invariant the generated graph violated.
        #[from]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// Requested node count was outside the supported range.
        NodeCountOutOfRange => NodeCountOutOfRange { .. } => "GENERATOR_NODE_COUNT_OUT_OF_RANGE",
        /// Requested edge count was outside `[N, N(N-1)/2]`.
        EdgeCountOutOfRange => EdgeCountOutOfRange { .. } => "GENERATOR_EDGE_COUNT_OUT_OF_RANGE",
        /// No unused relation remained while edges were still requested.
        RelationsExhausted => RelationsExhausted { .. } => "GENERATOR_RELATIONS_EXHAUSTED",
        /// The generated graph failed its own consistency check.
        Inconsistent => Inconsistent { .. } => "GENERATOR_INCONSISTENT_GRAPH",
    }
}

impl GeneratorError {
    /// Retrieve the inner [`GraphErrorCode`] when the generated graph was
    /// rejected by its consistency check.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Inconsistent { source } => Some(source.code()),
            _ => None,
        }
    }
}
