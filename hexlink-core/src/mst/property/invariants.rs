//! Property runners for the spanning forest cache.
//!
//! - **Agreement**: every cached query matches the live search.
//! - **Freshness**: writes mark the cache dirty; cached queries between
//!   distinct vertices clean it.
//! - **Preservation**: the forest connects exactly the pairs the live graph
//!   connects.
//! - **Minimality**: the forest is acyclic with `n - c` edges.
//! - **Provenance**: every forest edge is a live edge of the same weight.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{SearchStrategy, WeightedGraph};

use super::types::{DISCONNECTED, GraphOp, OpsFixture};

/// Replays the fixture, checking agreement and freshness at every step and
/// the structural properties after the final step.
pub(super) fn run_cache_properties(fixture: &OpsFixture) -> TestCaseResult {
    let mut graph = WeightedGraph::new(fixture.vertex_count, DISCONNECTED)
        .map_err(|err| TestCaseError::fail(format!("graph construction failed: {err}")))?;

    for (step, op) in fixture.ops.iter().enumerate() {
        apply(&mut graph, *op, step, fixture)?;
    }
    validate_forest(&mut graph, fixture)
}

fn apply(
    graph: &mut WeightedGraph<u8>,
    op: GraphOp,
    step: usize,
    fixture: &OpsFixture,
) -> TestCaseResult {
    let context = || format!("step {step} {op:?} (profile={:?})", fixture.profile);
    match op {
        GraphOp::Connect { a, b, weight } => write(graph, a, b, weight, context),
        GraphOp::Disconnect { a, b } => write(graph, a, b, DISCONNECTED, context),
        GraphOp::Query { a, b } => {
            let live = graph
                .is_connected(a, b, SearchStrategy::Live)
                .map_err(|err| TestCaseError::fail(format!("{}: {err}", context())))?;
            let cached = graph
                .is_connected(a, b, SearchStrategy::SpanningForest)
                .map_err(|err| TestCaseError::fail(format!("{}: {err}", context())))?;
            if live != cached {
                return Err(TestCaseError::fail(format!(
                    "{}: live={live} cached={cached}",
                    context()
                )));
            }
            // Reflexive queries answer without touching the cache.
            if a != b && graph.is_spanning_forest_dirty() {
                return Err(TestCaseError::fail(format!(
                    "{}: cache still dirty after a cached query",
                    context()
                )));
            }
            Ok(())
        }
    }
}

fn write(
    graph: &mut WeightedGraph<u8>,
    a: usize,
    b: usize,
    weight: u8,
    context: impl Fn() -> String,
) -> TestCaseResult {
    graph
        .set_weight(a, b, weight)
        .map_err(|err| TestCaseError::fail(format!("{}: {err}", context())))?;
    if !graph.is_spanning_forest_dirty() {
        return Err(TestCaseError::fail(format!(
            "{}: write left the cache clean",
            context()
        )));
    }
    Ok(())
}

fn validate_forest(graph: &mut WeightedGraph<u8>, fixture: &OpsFixture) -> TestCaseResult {
    let vertex_count = fixture.vertex_count;
    let mut live_components = component_roots(vertex_count, graph.edges().map(|(a, b, _)| (a, b)));
    let live = graph.clone();
    let forest = graph.spanning_forest();

    for (a, b, weight) in forest.edges() {
        let live_weight = live.weight(a, b).map_err(|err| TestCaseError::fail(err.to_string()))?;
        if live_weight != weight {
            return Err(TestCaseError::fail(format!(
                "forest edge ({a}, {b}, {weight}) has live weight {live_weight}"
            )));
        }
    }

    let mut forest_sets = DisjointSets::new(vertex_count);
    for (a, b, _) in forest.edges() {
        if !forest_sets.union(a, b) {
            return Err(TestCaseError::fail(format!(
                "forest edge ({a}, {b}) closes a cycle (profile={:?})",
                fixture.profile
            )));
        }
    }

    let components = live_components.distinct();
    if forest.edge_count() != vertex_count - components {
        return Err(TestCaseError::fail(format!(
            "forest has {} edges, expected {} for {components} components",
            forest.edge_count(),
            vertex_count - components
        )));
    }

    for a in 0..vertex_count {
        for b in a + 1..vertex_count {
            let expected = live_components.find(a) == live_components.find(b);
            let actual = forest_sets.find(a) == forest_sets.find(b);
            if expected != actual {
                return Err(TestCaseError::fail(format!(
                    "pair ({a}, {b}): live connected={expected}, forest connected={actual}"
                )));
            }
        }
    }
    Ok(())
}

fn component_roots(vertex_count: usize, edges: impl Iterator<Item = (usize, usize)>) -> DisjointSets {
    let mut sets = DisjointSets::new(vertex_count);
    for (a, b) in edges {
        sets.union(a, b);
    }
    sets
}

/// Minimal oracle, kept separate from the implementation under test.
struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(vertex_count: usize) -> Self {
        Self {
            parent: (0..vertex_count).collect(),
        }
    }

    fn find(&mut self, node: usize) -> usize {
        let mut current = node;
        while self.parent[current] != current {
            current = self.parent[current];
        }
        current
    }

    fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }
        self.parent[right_root] = left_root;
        true
    }

    fn distinct(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(node, &parent)| node == parent)
            .count()
    }
}
