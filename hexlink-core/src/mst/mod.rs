//! Cached spanning forest used to speed up repeated connectivity queries.
//!
//! Reachability between two vertices does not change when a component's
//! internal edges are replaced by any spanning tree of that component. The
//! forest built here keeps at most `n - 1` edges, so a search over it touches
//! far fewer edges than one over a dense live graph.
//!
//! The cache is a memo, not an incrementally maintained structure: every
//! weight mutation marks it dirty and the next cached query rebuilds it from
//! scratch with Kruskal's algorithm.

mod union_find;

use std::cmp::Ordering;

use tracing::debug;

use crate::{
    graph::{WeightedGraph, storage::TriangularWeights},
    weight::Weight,
};

use self::union_find::UnionFind;

/// Lazily built spanning forest owned by a [`WeightedGraph`].
#[derive(Clone, Debug)]
pub(crate) struct SpanningCache<W> {
    forest: Option<Box<WeightedGraph<W>>>,
    dirty: bool,
}

impl<W> Default for SpanningCache<W> {
    fn default() -> Self {
        Self {
            forest: None,
            dirty: true,
        }
    }
}

impl<W: Weight> SpanningCache<W> {
    pub(crate) fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub(crate) const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the cached forest, rebuilding it first when stale.
    fn get_or_rebuild(
        &mut self,
        rebuild: impl FnOnce() -> WeightedGraph<W>,
    ) -> &WeightedGraph<W> {
        let forest = match self.forest.take() {
            Some(forest) if !self.dirty => {
                record_cache_hit();
                forest
            }
            _ => {
                record_rebuild();
                Box::new(rebuild())
            }
        };
        self.dirty = false;
        self.forest.insert(forest)
    }
}

impl<W: Weight> WeightedGraph<W> {
    /// Returns a spanning forest of this graph, rebuilding the cached copy if
    /// any weight changed since it was last built.
    ///
    /// The forest has the same vertex count and sentinel as the live graph
    /// and joins exactly the same pairs of vertices, using as few edges as
    /// possible. Its edges are chosen by ascending weight, so it is also a
    /// minimum spanning forest, although callers should rely only on the
    /// connectivity it preserves.
    ///
    /// # Examples
    /// ```
    /// use hexlink_core::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new(3, 0_u8)?;
    /// graph.set_weight(0, 1, 4)?;
    /// graph.set_weight(1, 2, 1)?;
    /// graph.set_weight(0, 2, 2)?;
    ///
    /// let forest = graph.spanning_forest();
    /// assert_eq!(forest.edge_count(), 2);
    /// assert!(!forest.has_edge(0, 1)?);
    /// # Ok::<(), hexlink_core::GraphError>(())
    /// ```
    pub fn spanning_forest(&mut self) -> &Self {
        let (live, disconnected, cache) = self.split_cache();
        cache.get_or_rebuild(|| build_spanning_forest(live, disconnected))
    }

    /// Returns `true` when the cached spanning forest must be rebuilt before
    /// it can be trusted.
    #[must_use]
    pub const fn is_spanning_forest_dirty(&self) -> bool {
        self.spanning.is_dirty()
    }

    /// Counts the connected components, isolated vertices included.
    pub fn component_count(&mut self) -> usize {
        let vertex_count = self.vertex_count();
        vertex_count - self.spanning_forest().edge_count()
    }
}

/// Builds a spanning forest of `graph` without touching its cache.
///
/// # Examples
/// ```
/// use hexlink_core::{WeightedGraph, kruskal_spanning_forest};
///
/// let mut graph = WeightedGraph::new(4, false)?;
/// graph.set_weight(0, 1, true)?;
/// graph.set_weight(1, 2, true)?;
/// graph.set_weight(2, 0, true)?;
///
/// let forest = kruskal_spanning_forest(&graph);
/// assert_eq!(forest.edge_count(), 2);
/// assert!(forest.reachable(0, 2)?);
/// assert!(!forest.reachable(0, 3)?);
/// # Ok::<(), hexlink_core::GraphError>(())
/// ```
#[must_use]
pub fn kruskal_spanning_forest<W: Weight>(graph: &WeightedGraph<W>) -> WeightedGraph<W> {
    build_spanning_forest(graph.storage(), graph.disconnected())
}

/// A live edge considered during a rebuild, in canonical `source < target`
/// form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct CandidateEdge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W: Weight> Ord for CandidateEdge<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl<W: Weight> PartialOrd for CandidateEdge<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn build_spanning_forest<W: Weight>(
    live: &TriangularWeights<W>,
    disconnected: W,
) -> WeightedGraph<W> {
    let vertex_count = live.vertex_count();
    let mut candidates: Vec<CandidateEdge<W>> = live
        .pairs()
        .filter(|&(_, _, weight)| weight != disconnected)
        .map(|(source, target, weight)| CandidateEdge {
            source,
            target,
            weight,
        })
        .collect();
    candidates.sort_unstable();

    let mut forest = WeightedGraph::disconnected_like(live, disconnected);
    let mut sets = UnionFind::new(vertex_count);
    let mut accepted = 0_usize;
    for edge in &candidates {
        if sets.components() <= 1 {
            break;
        }
        if sets.union(edge.source, edge.target) {
            forest.store(edge.source, edge.target, edge.weight);
            accepted += 1;
        }
    }

    debug!(
        vertex_count,
        candidates = candidates.len(),
        accepted,
        components = sets.components(),
        "spanning forest rebuilt"
    );
    forest
}

#[cfg(feature = "metrics")]
fn record_rebuild() {
    metrics::counter!("spanning_forest_rebuilds").increment(1);
}

#[cfg(not(feature = "metrics"))]
const fn record_rebuild() {}

#[cfg(feature = "metrics")]
fn record_cache_hit() {
    metrics::counter!("spanning_forest_cache_hits").increment(1);
}

#[cfg(not(feature = "metrics"))]
const fn record_cache_hit() {}

#[cfg(test)]
mod property;
