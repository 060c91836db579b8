//! randgraph core library.
//!
//! Provides the [`Graph`] data model and the random generator that produces
//! small undirected weighted graphs. Rendering lives in a separate crate so
//! this one depends only on a randomness source.
//!
//! # Invariants
//!
//! Every [`Graph`] has nodes labelled `1..=N` in order, edges whose source
//! carries the smaller label, no self-loops, no repeated relation, and
//! weights in [`MIN_WEIGHT`]..=[`MAX_WEIGHT`]. Generated graphs additionally
//! have `N` in [`MIN_NODES`]..=[`MAX_NODES`] and `E` in `[N, N(N-1)/2]`.

mod error;
mod generator;
mod graph;

pub use crate::{
    error::{GeneratorError, GeneratorErrorCode, GraphError, GraphErrorCode},
    generator::{
        MAX_NODES, MIN_NODES, REJECTION_BUDGET_FACTOR, clock_seed, generate, generate_graph,
        generate_graph_with_counts,
    },
    graph::{Edge, Graph, MAX_WEIGHT, MIN_WEIGHT, Node},
};
