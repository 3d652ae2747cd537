//! Unit tests for weighted graph storage and mutation.

use rstest::{fixture, rstest};

use crate::{GraphError, SearchStrategy};

use super::WeightedGraph;

#[fixture]
fn graph() -> WeightedGraph<i32> {
    WeightedGraph::new(5, -1).expect("five vertices is a valid graph")
}

#[test]
fn rejects_empty_graph() {
    let result = WeightedGraph::new(0, false);
    assert!(matches!(result, Err(GraphError::EmptyGraph)));
}

#[rstest]
#[case::overflowing_pairs(usize::MAX)]
#[case::oversized_buffer(1 << (usize::BITS / 2))]
fn rejects_vertex_counts_too_large_to_store(#[case] vertex_count: usize) {
    let err = WeightedGraph::new(vertex_count, -1_i64).expect_err("storage cannot fit");
    assert_eq!(err, GraphError::TooManyVertices { vertex_count });
    assert_eq!(err.code().as_str(), "GRAPH_TOO_MANY_VERTICES");
}

#[rstest]
fn fresh_graph_has_every_pair_disconnected(graph: WeightedGraph<i32>) {
    for a in 0..5 {
        for b in 0..5 {
            let expected = if a == b { 0 } else { -1 };
            assert_eq!(graph.weight(a, b), Ok(expected), "pair ({a}, {b})");
        }
    }
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn single_vertex_graph_is_valid() {
    let graph = WeightedGraph::new(1, u8::MAX).expect("one vertex is valid");
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.weight(0, 0), Ok(0));
    assert_eq!(graph.weight_row(0), Ok(vec![0]));
}

#[rstest]
#[case(0, 4, 9)]
#[case(4, 0, 9)]
#[case(2, 3, 0)]
#[case(1, 2, -7)]
fn set_weight_is_symmetric(
    mut graph: WeightedGraph<i32>,
    #[case] a: usize,
    #[case] b: usize,
    #[case] weight: i32,
) {
    graph.set_weight(a, b, weight).expect("distinct in-range endpoints");
    assert_eq!(graph.weight(a, b), Ok(weight));
    assert_eq!(graph.weight(b, a), Ok(weight));
}

#[rstest]
fn later_writes_replace_earlier_ones(mut graph: WeightedGraph<i32>) {
    graph.set_weight(1, 3, 4).expect("valid pair");
    graph.set_weight(3, 1, 6).expect("valid pair");
    assert_eq!(graph.weight(1, 3), Ok(6));
    assert_eq!(graph.edge_count(), 1);
}

#[rstest]
fn setting_the_sentinel_removes_the_edge(mut graph: WeightedGraph<i32>) {
    graph.set_weight(0, 1, 2).expect("valid pair");
    graph.set_weight(0, 1, -1).expect("valid pair");
    assert_eq!(graph.has_edge(0, 1), Ok(false));
    assert_eq!(graph.edge_count(), 0);
}

#[rstest]
fn set_weight_rejects_self_loops_for_every_vertex(mut graph: WeightedGraph<i32>) {
    for vertex in 0..graph.vertex_count() {
        assert_eq!(
            graph.set_weight(vertex, vertex, 3),
            Err(GraphError::SelfLoop { vertex })
        );
    }
}

#[rstest]
#[case(5, 0)]
#[case(0, 5)]
#[case(usize::MAX, 1)]
fn set_weight_rejects_out_of_range_vertices(
    mut graph: WeightedGraph<i32>,
    #[case] a: usize,
    #[case] b: usize,
) {
    let err = graph.set_weight(a, b, 1).expect_err("vertex out of range");
    assert!(matches!(
        err,
        GraphError::InvalidVertex {
            vertex_count: 5,
            ..
        }
    ));
}

#[rstest]
fn rejected_writes_leave_weights_and_cache_untouched(mut graph: WeightedGraph<i32>) {
    graph.set_weight(0, 1, 1).expect("valid pair");
    graph
        .is_connected(0, 1, SearchStrategy::SpanningForest)
        .expect("valid query");
    assert!(!graph.is_spanning_forest_dirty());

    let before = graph.clone();
    assert!(graph.set_weight(2, 2, 5).is_err());
    assert!(graph.set_weight(2, 9, 5).is_err());

    assert_eq!(graph, before);
    assert!(!graph.is_spanning_forest_dirty());
}

#[rstest]
fn weight_and_row_reject_out_of_range_vertices(graph: WeightedGraph<i32>) {
    assert_eq!(
        graph.weight(0, 7),
        Err(GraphError::InvalidVertex {
            vertex: 7,
            vertex_count: 5
        })
    );
    assert!(graph.weight_row(5).is_err());
    assert!(graph.row(5).is_err());
}

#[rstest]
fn weight_row_lists_weights_by_other_endpoint(mut graph: WeightedGraph<i32>) {
    graph.set_weight(2, 0, 8).expect("valid pair");
    graph.set_weight(2, 4, 3).expect("valid pair");
    assert_eq!(graph.weight_row(2), Ok(vec![8, -1, 0, -1, 3]));

    let row = graph.row(2).expect("valid vertex");
    assert_eq!(row.len(), 5);
}

#[rstest]
fn edges_lists_connected_pairs_in_order(mut graph: WeightedGraph<i32>) {
    graph.set_weight(3, 1, 2).expect("valid pair");
    graph.set_weight(4, 0, 6).expect("valid pair");
    graph.set_weight(0, 1, 0).expect("valid pair");
    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(edges, vec![(0, 1, 0), (0, 4, 6), (1, 3, 2)]);
}

#[rstest]
fn clones_do_not_share_storage(mut graph: WeightedGraph<i32>) {
    graph.set_weight(0, 1, 1).expect("valid pair");
    let mut copy = graph.clone();
    copy.set_weight(0, 1, 5).expect("valid pair");
    copy.set_weight(2, 3, 5).expect("valid pair");

    assert_eq!(graph.weight(0, 1), Ok(1));
    assert_eq!(graph.has_edge(2, 3), Ok(false));
    assert_ne!(graph, copy);
}

#[rstest]
fn clones_carry_the_spanning_forest_and_its_flag(mut graph: WeightedGraph<i32>) {
    graph.set_weight(0, 1, 1).expect("valid pair");
    graph.set_weight(1, 2, 1).expect("valid pair");
    let forest = graph.spanning_forest().clone();

    let mut clean = graph.clone();
    assert!(!clean.is_spanning_forest_dirty());
    assert_eq!(clean.spanning_forest(), &forest);

    graph.set_weight(3, 4, 1).expect("valid pair");
    let dirty = graph.clone();
    assert!(dirty.is_spanning_forest_dirty());
}

#[test]
fn boolean_graphs_use_false_as_zero() {
    let mut graph = WeightedGraph::new(3, false).expect("valid graph");
    graph.set_weight(0, 2, true).expect("valid pair");
    assert_eq!(graph.weight(1, 1), Ok(false));
    assert_eq!(graph.weight_row(0), Ok(vec![false, false, true]));
}
