//! Shared test utilities for `hexlink-core`.

use hexlink_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{WeightedGraph, weight::Weight};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `HEXLINK_PBT_CASES` and
/// `HEXLINK_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph with the listed `(a, b, weight)` edges applied in order.
///
/// # Panics
/// Panics when the graph or any edge is invalid.
pub(crate) fn graph_from_edges<W: Weight>(
    vertex_count: usize,
    disconnected: W,
    edges: &[(usize, usize, W)],
) -> WeightedGraph<W> {
    let mut graph = WeightedGraph::new(vertex_count, disconnected).expect("valid vertex count");
    for &(a, b, weight) in edges {
        graph
            .set_weight(a, b, weight)
            .unwrap_or_else(|err| panic!("edge ({a}, {b}) rejected: {err}"));
    }
    graph
}
