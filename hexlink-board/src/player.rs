//! Move sources for the turn loop.

use rand::{Rng, seq::IteratorRandom};

use crate::{
    board::{Board, BoardCoord},
    error::PlayerError,
};

/// Chooses the next move for one seat.
///
/// Implementations should return an empty, on-board cell; the turn loop
/// surfaces anything else as a [`crate::BoardError`].
pub trait Player {
    /// Picks the cell to play on `board`.
    ///
    /// # Errors
    /// Returns [`PlayerError`] when no move can be produced.
    fn take_turn(&mut self, board: &Board) -> Result<BoardCoord, PlayerError>;
}

impl<P: Player + ?Sized> Player for &mut P {
    fn take_turn(&mut self, board: &Board) -> Result<BoardCoord, PlayerError> {
        (**self).take_turn(board)
    }
}

/// Plays a uniformly random empty cell.
///
/// # Examples
/// ```
/// use hexlink_board::{Board, Player, RandomPlayer};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let board = Board::new(4, 4)?;
/// let mut player = RandomPlayer::new(SmallRng::seed_from_u64(3));
/// let coord = player.take_turn(&board)?;
/// assert!(board.is_empty(coord));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct RandomPlayer<R> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    /// Creates a player drawing its moves from `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn take_turn(&mut self, board: &Board) -> Result<BoardCoord, PlayerError> {
        board
            .empty_cells()
            .choose(&mut self.rng)
            .ok_or(PlayerError::NoEmptyCells)
    }
}
