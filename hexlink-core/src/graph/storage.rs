//! Upper-triangular weight storage.
//!
//! A symmetric `n × n` matrix without its diagonal holds `n·(n−1)/2` distinct
//! entries. They are laid out row by row over the pairs `(low, high)` with
//! `low < high`, so iterating the backing slice visits pairs in lexicographic
//! order.

use crate::error::GraphError;

/// Owned, fixed-length triangular weight buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TriangularWeights<W> {
    vertex_count: usize,
    cells: Box<[W]>,
}

impl<W: Copy> TriangularWeights<W> {
    /// Allocates storage for `vertex_count` vertices with every pair set to
    /// `value`.
    ///
    /// Fails with [`GraphError::TooManyVertices`] when the pair count
    /// overflows `usize` or the allocation is refused.
    pub(crate) fn filled(vertex_count: usize, value: W) -> Result<Self, GraphError> {
        let too_many = || GraphError::TooManyVertices { vertex_count };
        let len = pair_count(vertex_count).ok_or_else(too_many)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_many())?;
        cells.resize(len, value);
        Ok(Self {
            vertex_count,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Allocates storage of the same shape with every pair set to `value`.
    pub(crate) fn filled_like(&self, value: W) -> Self {
        Self {
            vertex_count: self.vertex_count,
            cells: vec![value; self.cells.len()].into_boxed_slice(),
        }
    }

    pub(crate) const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Reads the weight of the canonical pair `low < high`.
    pub(crate) fn get(&self, low: usize, high: usize) -> W {
        self.cells[self.index(low, high)]
    }

    /// Writes the weight of the canonical pair `low < high`.
    pub(crate) fn set(&mut self, low: usize, high: usize, weight: W) {
        let index = self.index(low, high);
        self.cells[index] = weight;
    }

    /// Iterates `(low, high, weight)` in storage order.
    pub(crate) fn pairs(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        let vertex_count = self.vertex_count;
        (0..vertex_count)
            .flat_map(move |low| (low + 1..vertex_count).map(move |high| (low, high)))
            .zip(self.cells.iter().copied())
            .map(|((low, high), weight)| (low, high, weight))
    }

    fn index(&self, low: usize, high: usize) -> usize {
        debug_assert!(low < high, "pair ({low}, {high}) is not canonical");
        debug_assert!(high < self.vertex_count, "vertex {high} out of range");
        // Rows before `low` hold (n-1) + (n-2) + ... + (n-low) cells.
        low * (2 * self.vertex_count - low - 1) / 2 + (high - low - 1)
    }
}

/// Number of unordered vertex pairs, and so the number of stored cells.
/// `None` when the product overflows.
pub(crate) const fn pair_count(vertex_count: usize) -> Option<usize> {
    match vertex_count.checked_mul(vertex_count.saturating_sub(1)) {
        Some(product) => Some(product / 2),
        None => None,
    }
}

/// Orders two distinct endpoints as `(low, high)`.
pub(crate) const fn canonical(left: usize, right: usize) -> (usize, usize) {
    if left <= right {
        (left, right)
    } else {
        (right, left)
    }
}
