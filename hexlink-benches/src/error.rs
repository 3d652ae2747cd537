//! Benchmark setup error type.

use hexlink_board::{BoardError, GameError};
use hexlink_core::{GenerateError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Random graph generation failed.
    #[error("graph generation failed: {0}")]
    Generate(#[from] GenerateError),
    /// A graph operation was rejected.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// The board could not be created.
    #[error("board setup failed: {0}")]
    Board(#[from] BoardError),
    /// A seeded game did not finish.
    #[error("game failed: {0}")]
    Game(#[from] GameError),
}
