//! Undirected weighted graph over a fixed vertex set.
//!
//! Weights live in compact triangular storage, so the symmetric relation
//! `weight(a, b) == weight(b, a)` holds by construction.
//! Every graph owns a lazily built spanning forest used to answer repeated
//! connectivity queries cheaply; any call to [`WeightedGraph::set_weight`]
//! marks it stale.

pub(crate) mod storage;

use std::iter::FusedIterator;

use crate::{Result, error::GraphError, mst::SpanningCache, weight::Weight};

use self::storage::{TriangularWeights, canonical};

/// Undirected graph whose vertex pairs carry a weight of type `W`.
///
/// A per-graph `disconnected` sentinel marks pairs without an edge. Cloning
/// a graph deep-copies both its weights and its cached spanning forest.
///
/// # Examples
/// ```
/// use hexlink_core::{SearchStrategy, WeightedGraph};
///
/// let mut graph = WeightedGraph::new(4, -1_i32)?;
/// graph.set_weight(0, 1, 3)?;
/// graph.set_weight(2, 1, 5)?;
///
/// assert_eq!(graph.weight(1, 2)?, 5);
/// assert_eq!(graph.weight(3, 3)?, 0);
/// assert!(graph.is_connected(0, 2, SearchStrategy::SpanningForest)?);
/// assert!(!graph.is_connected(0, 3, SearchStrategy::Live)?);
/// # Ok::<(), hexlink_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct WeightedGraph<W> {
    weights: TriangularWeights<W>,
    disconnected: W,
    pub(crate) spanning: SpanningCache<W>,
}

impl<W: Weight> WeightedGraph<W> {
    /// Creates a graph of `vertex_count` vertices with every pair
    /// disconnected.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count` is zero and
    /// [`GraphError::TooManyVertices`] when the weight storage cannot be
    /// sized or allocated.
    pub fn new(vertex_count: usize, disconnected: W) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Self {
            weights: TriangularWeights::filled(vertex_count, disconnected)?,
            disconnected,
            spanning: SpanningCache::default(),
        })
    }

    /// Builds an edgeless graph over the same vertices as `weights`.
    pub(crate) fn disconnected_like(weights: &TriangularWeights<W>, disconnected: W) -> Self {
        Self {
            weights: weights.filled_like(disconnected),
            disconnected,
            spanning: SpanningCache::default(),
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.weights.vertex_count()
    }

    /// Returns the sentinel that marks a missing edge.
    #[must_use]
    pub const fn disconnected(&self) -> W {
        self.disconnected
    }

    /// Returns the weight between `a` and `b`.
    ///
    /// The weight between a vertex and itself is [`Weight::ZERO`]; a pair
    /// that was never set reports the disconnected sentinel.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if either endpoint is out of
    /// range.
    pub fn weight(&self, a: usize, b: usize) -> Result<W> {
        self.ensure_vertex(a)?;
        self.ensure_vertex(b)?;
        Ok(self.weight_unchecked(a, b))
    }

    /// Stores `weight` between `a` and `b` in both directions.
    ///
    /// Setting the disconnected sentinel removes the edge. The cached
    /// spanning forest is marked stale; a rejected call leaves both the
    /// weights and the cache untouched.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if either endpoint is out of
    /// range and [`GraphError::SelfLoop`] if `a == b`.
    pub fn set_weight(&mut self, a: usize, b: usize, weight: W) -> Result<()> {
        self.ensure_vertex(a)?;
        self.ensure_vertex(b)?;
        if a == b {
            return Err(GraphError::SelfLoop { vertex: a });
        }
        let (low, high) = canonical(a, b);
        self.store(low, high, weight);
        Ok(())
    }

    /// Returns the weights between `vertex` and every vertex, indexed by the
    /// other endpoint.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `vertex` is out of range.
    pub fn weight_row(&self, vertex: usize) -> Result<Vec<W>> {
        Ok(self.row(vertex)?.collect())
    }

    /// Iterates the weights between `vertex` and every vertex without
    /// allocating.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `vertex` is out of range.
    pub fn row(&self, vertex: usize) -> Result<Row<'_, W>> {
        self.ensure_vertex(vertex)?;
        Ok(self.row_unchecked(vertex))
    }

    /// Returns `true` when `a` and `b` are joined by a direct edge.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if either endpoint is out of
    /// range.
    pub fn has_edge(&self, a: usize, b: usize) -> Result<bool> {
        Ok(a != b && self.weight(a, b)? != self.disconnected)
    }

    /// Counts the pairs joined by an edge.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Iterates the edges as `(low, high, weight)` with `low < high`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        let disconnected = self.disconnected;
        self.weights
            .pairs()
            .filter(move |&(_, _, weight)| weight != disconnected)
    }

    pub(crate) fn ensure_vertex(&self, vertex: usize) -> Result<()> {
        let vertex_count = self.vertex_count();
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count,
            })
        }
    }

    pub(crate) fn weight_unchecked(&self, a: usize, b: usize) -> W {
        if a == b {
            return W::ZERO;
        }
        let (low, high) = canonical(a, b);
        self.weights.get(low, high)
    }

    pub(crate) fn row_unchecked(&self, vertex: usize) -> Row<'_, W> {
        Row {
            graph: self,
            vertex,
            next: 0,
        }
    }

    /// Writes a canonical pair and invalidates the spanning forest.
    pub(crate) fn store(&mut self, low: usize, high: usize, weight: W) {
        self.weights.set(low, high, weight);
        self.spanning.invalidate();
    }

    pub(crate) fn storage(&self) -> &TriangularWeights<W> {
        &self.weights
    }

    /// Borrows the live weights alongside the mutable spanning cache.
    pub(crate) fn split_cache(&mut self) -> (&TriangularWeights<W>, W, &mut SpanningCache<W>) {
        (&self.weights, self.disconnected, &mut self.spanning)
    }
}

/// Two graphs are equal when they have the same sentinel and the same
/// weights; cached spanning forests are not compared.
impl<W: Weight> PartialEq for WeightedGraph<W> {
    fn eq(&self, other: &Self) -> bool {
        self.disconnected == other.disconnected && self.weights == other.weights
    }
}

impl<W: Weight> Eq for WeightedGraph<W> {}

/// Iterator over one row of the weight matrix, created by
/// [`WeightedGraph::row`].
#[derive(Clone, Debug)]
pub struct Row<'g, W> {
    graph: &'g WeightedGraph<W>,
    vertex: usize,
    next: usize,
}

impl<W: Weight> Iterator for Row<'_, W> {
    type Item = W;

    fn next(&mut self) -> Option<W> {
        if self.next >= self.graph.vertex_count() {
            return None;
        }
        let weight = self.graph.weight_unchecked(self.vertex, self.next);
        self.next += 1;
        Some(weight)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.vertex_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<W: Weight> ExactSizeIterator for Row<'_, W> {}

impl<W: Weight> FusedIterator for Row<'_, W> {}

#[cfg(test)]
mod tests;
