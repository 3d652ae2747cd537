//! Type definitions for spanning forest property tests.

use test_strategy::Arbitrary;

/// Sentinel used by every generated graph.
pub(super) const DISCONNECTED: u8 = u8::MAX;

/// Shapes the weights and edge density of a generated operation sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightProfile {
    /// Distinct-ish weights across the whole non-sentinel range.
    #[weight(3)]
    Uniform,
    /// Only two weight values, so most candidate edges tie.
    #[weight(3)]
    Tied,
    /// Disconnections outnumber connections, leaving many components.
    #[weight(2)]
    Sparse,
    /// Nearly every write adds an edge.
    #[weight(1)]
    Dense,
}

/// One step applied to the graph under test.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphOp {
    /// Writes a non-sentinel weight between two distinct vertices.
    Connect { a: usize, b: usize, weight: u8 },
    /// Writes the sentinel between two distinct vertices.
    Disconnect { a: usize, b: usize },
    /// Asks whether two vertices, possibly equal, are connected.
    Query { a: usize, b: usize },
}

/// Generated input for the cache properties.
#[derive(Clone, Debug)]
pub(super) struct OpsFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Operations applied in order.
    pub ops: Vec<GraphOp>,
    /// Profile the operations were drawn from.
    pub profile: WeightProfile,
}
