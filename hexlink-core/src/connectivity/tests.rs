//! Unit tests for reachability queries.

use rstest::rstest;

use crate::{GraphError, WeightedGraph, test_utils::graph_from_edges};

use super::SearchStrategy;

const BOTH: [SearchStrategy; 2] = [SearchStrategy::Live, SearchStrategy::SpanningForest];

#[test]
fn path_through_middle_vertex_connects_its_ends() {
    let mut graph = graph_from_edges(4, 0_u32, &[(0, 1, 1), (1, 2, 1)]);

    assert_eq!(graph.is_connected(0, 2, SearchStrategy::Live), Ok(true));
    assert_eq!(graph.is_connected(0, 3, SearchStrategy::Live), Ok(false));
    assert_eq!(
        graph.is_connected(0, 3, SearchStrategy::SpanningForest),
        Ok(false)
    );
    assert_eq!(
        graph.is_connected(2, 0, SearchStrategy::SpanningForest),
        Ok(true)
    );
}

#[rstest]
#[case(SearchStrategy::Live)]
#[case(SearchStrategy::SpanningForest)]
fn every_vertex_reaches_itself(#[case] strategy: SearchStrategy) {
    let mut graph = WeightedGraph::new(6, false).expect("valid graph");
    for vertex in 0..6 {
        assert_eq!(graph.is_connected(vertex, vertex, strategy), Ok(true));
    }
}

#[rstest]
#[case(SearchStrategy::Live)]
#[case(SearchStrategy::SpanningForest)]
fn fresh_graph_connects_no_distinct_pair(#[case] strategy: SearchStrategy) {
    let mut graph = WeightedGraph::new(5, false).expect("valid graph");
    for a in 0..5 {
        for b in (0..5).filter(|&b| b != a) {
            assert_eq!(graph.is_connected(a, b, strategy), Ok(false), "({a}, {b})");
        }
    }
}

#[test]
fn zero_weight_edges_count_when_the_sentinel_differs() {
    let mut graph = graph_from_edges(3, -1_i64, &[(0, 1, 0), (1, 2, 0)]);
    for strategy in BOTH {
        assert_eq!(graph.is_connected(0, 2, strategy), Ok(true));
    }
}

#[test]
fn removing_a_bridge_disconnects_both_strategies() {
    let mut graph = graph_from_edges(5, 0_u8, &[(0, 1, 2), (1, 2, 2), (2, 3, 2), (3, 4, 2)]);
    assert_eq!(
        graph.is_connected(0, 4, SearchStrategy::SpanningForest),
        Ok(true)
    );

    graph.set_weight(2, 3, 0).expect("valid pair");
    for strategy in BOTH {
        assert_eq!(graph.is_connected(0, 4, strategy), Ok(false));
        assert_eq!(graph.is_connected(0, 2, strategy), Ok(true));
        assert_eq!(graph.is_connected(3, 4, strategy), Ok(true));
    }
}

#[test]
fn connectivity_is_transitive_across_joined_components() {
    let mut graph = graph_from_edges(6, false, &[(0, 1, true), (2, 3, true), (4, 5, true)]);
    assert_eq!(graph.reachable(0, 3), Ok(false));

    graph.set_weight(1, 2, true).expect("valid pair");
    for strategy in BOTH {
        assert_eq!(graph.is_connected(0, 2, strategy), Ok(true));
        assert_eq!(graph.is_connected(2, 3, strategy), Ok(true));
        assert_eq!(graph.is_connected(0, 3, strategy), Ok(true));
        assert_eq!(graph.is_connected(0, 5, strategy), Ok(false));
    }
}

#[test]
fn cycles_do_not_stall_the_search() {
    let mut graph = graph_from_edges(
        5,
        false,
        &[(0, 1, true), (1, 2, true), (2, 0, true), (2, 3, true)],
    );
    assert_eq!(graph.reachable(0, 3), Ok(true));
    assert_eq!(graph.reachable(0, 4), Ok(false));
    assert_eq!(
        graph.is_connected(1, 4, SearchStrategy::SpanningForest),
        Ok(false)
    );
}

#[rstest]
#[case(SearchStrategy::Live)]
#[case(SearchStrategy::SpanningForest)]
fn rejects_out_of_range_endpoints(#[case] strategy: SearchStrategy) {
    let mut graph = WeightedGraph::new(3, false).expect("valid graph");
    assert_eq!(
        graph.is_connected(0, 3, strategy),
        Err(GraphError::InvalidVertex {
            vertex: 3,
            vertex_count: 3
        })
    );
    assert_eq!(
        graph.is_connected(4, 4, strategy),
        Err(GraphError::InvalidVertex {
            vertex: 4,
            vertex_count: 3
        })
    );
}

#[test]
fn live_queries_leave_the_spanning_forest_alone() {
    let mut graph = graph_from_edges(3, false, &[(0, 1, true)]);
    graph
        .is_connected(0, 1, SearchStrategy::Live)
        .expect("valid query");
    assert!(graph.is_spanning_forest_dirty());
}

#[test]
fn cache_flag_maps_onto_strategies() {
    assert_eq!(SearchStrategy::from_cache_flag(false), SearchStrategy::Live);
    assert_eq!(
        SearchStrategy::from_cache_flag(true),
        SearchStrategy::SpanningForest
    );
}
