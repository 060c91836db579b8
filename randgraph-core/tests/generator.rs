//! Property and scenario tests for the random graph generator.

use std::collections::HashSet;

use proptest::{prelude::any, prop_assert, prop_assert_eq, proptest};
use rand::{SeedableRng, rngs::SmallRng};
use randgraph_core::{
    Graph, MAX_NODES, MAX_WEIGHT, MIN_NODES, MIN_WEIGHT, generate, generate_graph,
    generate_graph_with_counts,
};
use rstest::rstest;

fn relation_set(graph: &Graph) -> HashSet<(u32, u32)> {
    graph
        .edges()
        .iter()
        .map(|edge| (edge.source().label(), edge.destination().label()))
        .collect()
}

proptest! {
    #[test]
    fn node_count_stays_in_range(seed in any::<u64>()) {
        let graph = generate_graph(&mut SmallRng::seed_from_u64(seed))
            .expect("generation must succeed");
        prop_assert!((MIN_NODES..=MAX_NODES).contains(&graph.node_count()));
    }

    #[test]
    fn edge_count_stays_within_pair_bounds(seed in any::<u64>()) {
        let graph = generate_graph(&mut SmallRng::seed_from_u64(seed))
            .expect("generation must succeed");
        let n = graph.node_count();
        prop_assert!(graph.edge_count() >= n);
        prop_assert!(graph.edge_count() <= n * (n - 1) / 2);
    }

    #[test]
    fn relations_are_unique(seed in any::<u64>()) {
        let graph = generate_graph(&mut SmallRng::seed_from_u64(seed))
            .expect("generation must succeed");
        prop_assert_eq!(relation_set(&graph).len(), graph.edge_count());
    }

    #[test]
    fn edges_are_canonical_without_self_loops(seed in any::<u64>()) {
        let graph = generate_graph(&mut SmallRng::seed_from_u64(seed))
            .expect("generation must succeed");
        for edge in graph.edges() {
            prop_assert!(edge.source().label() < edge.destination().label());
        }
    }

    #[test]
    fn weights_stay_in_range(seed in any::<u64>()) {
        let graph = generate_graph(&mut SmallRng::seed_from_u64(seed))
            .expect("generation must succeed");
        for edge in graph.edges() {
            prop_assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&edge.weight()));
        }
    }

    #[test]
    fn labels_are_contiguous_from_one(seed in any::<u64>()) {
        let graph = generate_graph(&mut SmallRng::seed_from_u64(seed))
            .expect("generation must succeed");
        let labels: Vec<u32> = graph.nodes().iter().map(|node| node.label()).collect();
        let expected: Vec<u32> = (1..=u32::try_from(graph.node_count()).expect("small count"))
            .collect();
        prop_assert_eq!(labels, expected);
    }

    #[test]
    fn four_node_graphs_never_exceed_six_edges(seed in any::<u64>(), edges in 4_usize..=6) {
        let graph = generate_graph_with_counts(&mut SmallRng::seed_from_u64(seed), 4, edges)
            .expect("counts are valid");
        prop_assert_eq!(graph.edge_count(), edges);
        prop_assert_eq!(relation_set(&graph).len(), edges);
    }
}

#[rstest]
#[case(0)]
#[case(17)]
#[case(u64::MAX)]
fn complete_graph_on_seven_nodes_covers_every_pair(#[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let graph = generate_graph_with_counts(&mut rng, 7, 21).expect("counts are valid");
    let expected: HashSet<(u32, u32)> = (1..=7_u32)
        .flat_map(|low| ((low + 1)..=7).map(move |high| (low, high)))
        .collect();
    assert_eq!(relation_set(&graph), expected);
    assert_eq!(graph.edge_count(), 21);
}

#[test]
fn complete_graph_on_four_nodes_exhausts_all_pairs() {
    let mut rng = SmallRng::seed_from_u64(99);
    let graph = generate_graph_with_counts(&mut rng, 4, 6).expect("counts are valid");
    assert_eq!(relation_set(&graph).len(), 6);
}

#[test]
fn fixed_seed_is_reproducible() {
    let first = generate_graph(&mut SmallRng::seed_from_u64(5)).expect("generation succeeds");
    let second = generate_graph(&mut SmallRng::seed_from_u64(5)).expect("generation succeeds");
    assert_eq!(first, second);
}

#[test]
fn different_seeds_can_produce_different_graphs() {
    let graphs: HashSet<Vec<(u32, u32, u32)>> = (0..32_u64)
        .map(|seed| {
            let graph =
                generate_graph(&mut SmallRng::seed_from_u64(seed)).expect("generation succeeds");
            graph
                .edges()
                .iter()
                .map(|edge| (edge.source().label(), edge.destination().label(), edge.weight()))
                .collect()
        })
        .collect();
    assert!(graphs.len() > 1);

    let node_counts: HashSet<usize> = (0..64_u64)
        .map(|seed| {
            generate_graph(&mut SmallRng::seed_from_u64(seed))
                .expect("generation succeeds")
                .node_count()
        })
        .collect();
    assert!(node_counts.len() > 1);
}

#[test]
fn clock_seeded_generation_holds_invariants() {
    let graph = generate().expect("generation succeeds");
    let bounds = Graph::edge_count_bounds(graph.node_count());
    assert!(bounds.contains(&graph.edge_count()));
    let rebuilt = Graph::try_from_parts(graph.nodes().to_vec(), graph.edges().to_vec());
    assert_eq!(rebuilt, Ok(graph));
}
