//! Reachability queries over a [`WeightedGraph`].
//!
//! The search is a plain breadth-first traversal that expands one vertex's
//! full weight row at a time. It can run over the live weights or over the
//! graph's cached spanning forest; both give the same answer because the
//! forest preserves every component.

use std::collections::VecDeque;

use tracing::trace;

use crate::{Result, graph::WeightedGraph, weight::Weight};

/// Selects which weights a connectivity query searches.
///
/// # Examples
/// ```
/// use hexlink_core::SearchStrategy;
///
/// assert_eq!(SearchStrategy::from_cache_flag(true), SearchStrategy::SpanningForest);
/// assert_eq!(SearchStrategy::default(), SearchStrategy::Live);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SearchStrategy {
    /// Search the live weights directly.
    #[default]
    Live,
    /// Search the cached spanning forest, rebuilding it first if stale.
    ///
    /// Worth it when many queries arrive between mutations.
    SpanningForest,
}

impl SearchStrategy {
    /// Maps a "use the cache" flag onto a strategy.
    #[must_use]
    pub const fn from_cache_flag(use_cache: bool) -> Self {
        if use_cache {
            Self::SpanningForest
        } else {
            Self::Live
        }
    }
}

impl<W: Weight> WeightedGraph<W> {
    /// Returns `true` when a path of edges joins `a` and `b`.
    ///
    /// Every vertex reaches itself. With
    /// [`SearchStrategy::SpanningForest`] the cached forest is rebuilt first
    /// if any weight changed since the last cached query, which is why this
    /// takes `&mut self`; use [`WeightedGraph::reachable`] for a read-only
    /// live search.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] if either endpoint is out
    /// of range.
    pub fn is_connected(&mut self, a: usize, b: usize, strategy: SearchStrategy) -> Result<bool> {
        self.ensure_vertex(a)?;
        self.ensure_vertex(b)?;
        if a == b {
            return Ok(true);
        }
        let reached = match strategy {
            SearchStrategy::Live => breadth_first_reaches(self, a, b),
            SearchStrategy::SpanningForest => breadth_first_reaches(self.spanning_forest(), a, b),
        };
        trace!(a, b, ?strategy, reached, "connectivity query");
        Ok(reached)
    }

    /// Returns `true` when a path of live edges joins `a` and `b`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] if either endpoint is out
    /// of range.
    pub fn reachable(&self, a: usize, b: usize) -> Result<bool> {
        self.ensure_vertex(a)?;
        self.ensure_vertex(b)?;
        Ok(a == b || breadth_first_reaches(self, a, b))
    }
}

/// Visited set and pending frontier of one search.
struct SearchState {
    visited: Vec<bool>,
    frontier: VecDeque<usize>,
}

impl SearchState {
    fn new(vertex_count: usize, origin: usize) -> Self {
        let mut state = Self {
            visited: vec![false; vertex_count],
            frontier: VecDeque::new(),
        };
        state.visit(origin);
        state
    }

    /// Marks `vertex` as discovered, queueing it once.
    fn visit(&mut self, vertex: usize) -> bool {
        match self.visited.get_mut(vertex) {
            Some(seen) if !*seen => {
                *seen = true;
                self.frontier.push_back(vertex);
                true
            }
            _ => false,
        }
    }
}

/// Searches `graph` from `origin` and stops as soon as `target` is found.
///
/// Both endpoints must already be validated and distinct.
fn breadth_first_reaches<W: Weight>(graph: &WeightedGraph<W>, origin: usize, target: usize) -> bool {
    let disconnected = graph.disconnected();
    let mut state = SearchState::new(graph.vertex_count(), origin);
    while let Some(vertex) = state.frontier.pop_front() {
        for (neighbour, weight) in graph.row_unchecked(vertex).enumerate() {
            if weight == disconnected || neighbour == vertex {
                continue;
            }
            if neighbour == target {
                return true;
            }
            state.visit(neighbour);
        }
    }
    false
}

#[cfg(test)]
mod tests;
