//! Benchmark parameter types.

use std::fmt;

/// Parameters for a connectivity benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertices: usize,
    /// Fraction of vertex pairs joined by an edge.
    pub density: f64,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.vertices, self.density)
    }
}

/// Parameters for a board benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct BoardBenchParams {
    /// Columns and rows of the square board.
    pub size: usize,
}

impl fmt::Display for BoardBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.size)
    }
}
