//! Alternating turn loop for two players.

use std::fmt;

use tracing::{debug, info, instrument};

use crate::{
    board::{Board, BoardCoord, Piece},
    error::GameError,
    player::Player,
};

/// Which of the two players is to move. Seat one always opens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Seat {
    /// Opens the game and plays [`Piece::Red`].
    One,
    /// Moves second and plays [`Piece::Black`].
    Two,
}

impl Seat {
    /// Returns the piece this seat places.
    #[must_use]
    pub const fn piece(self) -> Piece {
        match self {
            Self::One => Piece::Red,
            Self::Two => Piece::Black,
        }
    }

    /// Returns the seat that moves after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Returns `1` or `2`.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// What a single turn produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnOutcome {
    /// The piece was placed and the game continues.
    Placed {
        /// Seat that moved.
        seat: Seat,
        /// Cell that received the piece.
        coord: BoardCoord,
    },
    /// The piece joined the mover's borders.
    Won {
        /// Seat that moved and won.
        seat: Seat,
        /// Cell that completed the link.
        coord: BoardCoord,
    },
}

/// Summary of a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GameResult {
    /// Seat that joined its borders.
    pub winner: Seat,
    /// Pieces placed by both seats together.
    pub moves: usize,
}

/// Drives a [`Board`] through alternating turns.
///
/// # Examples
/// ```
/// use hexlink_board::{Board, Game, RandomPlayer, Seat};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut game = Game::new(Board::new(5, 5)?);
/// let mut one = RandomPlayer::new(SmallRng::seed_from_u64(1));
/// let mut two = RandomPlayer::new(SmallRng::seed_from_u64(2));
/// let result = game.play(&mut one, &mut two)?;
/// assert_eq!(game.winner(), Some(result.winner));
/// assert!(result.moves <= 25);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Seat,
    moves: usize,
    winner: Option<Seat>,
}

impl Game {
    /// Starts a game on `board` with seat one to move.
    #[must_use]
    pub const fn new(board: Board) -> Self {
        Self {
            board,
            to_move: Seat::One,
            moves: 0,
            winner: None,
        }
    }

    /// Returns the board in its current state.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seat whose turn is next.
    #[must_use]
    pub const fn to_move(&self) -> Seat {
        self.to_move
    }

    /// Returns the number of pieces placed so far.
    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Returns the winning seat once the game is decided.
    #[must_use]
    pub const fn winner(&self) -> Option<Seat> {
        self.winner
    }

    /// Asks `player` for a move on behalf of the seat to move and applies it.
    ///
    /// # Errors
    /// Returns [`GameError::Finished`] once a seat has won,
    /// [`GameError::NoWinner`] if the board is full, and otherwise whatever
    /// the player or the board reports for the chosen move. A rejected move
    /// does not pass the turn.
    pub fn play_turn(&mut self, player: &mut dyn Player) -> Result<TurnOutcome, GameError> {
        if let Some(winner) = self.winner {
            return Err(GameError::Finished { winner });
        }
        if self.board.is_full() {
            return Err(GameError::NoWinner { moves: self.moves });
        }

        let seat = self.to_move;
        let piece = seat.piece();
        let coord = player.take_turn(&self.board)?;
        self.board.place(piece, coord)?;
        self.moves += 1;

        if self.board.is_winner(piece)? {
            self.winner = Some(seat);
            info!(%seat, moves = self.moves, "game won");
            return Ok(TurnOutcome::Won { seat, coord });
        }
        debug!(%seat, %coord, moves = self.moves, "turn played");
        self.to_move = seat.next();
        Ok(TurnOutcome::Placed { seat, coord })
    }

    /// Alternates `one` and `two` until a seat wins.
    ///
    /// # Errors
    /// Propagates the first error raised by [`Game::play_turn`].
    #[instrument(
        name = "board.play",
        err,
        skip(self, one, two),
        fields(width = self.board.width(), height = self.board.height()),
    )]
    pub fn play(
        &mut self,
        one: &mut dyn Player,
        two: &mut dyn Player,
    ) -> Result<GameResult, GameError> {
        loop {
            let player: &mut dyn Player = match self.to_move {
                Seat::One => &mut *one,
                Seat::Two => &mut *two,
            };
            if let TurnOutcome::Won { seat, .. } = self.play_turn(player)? {
                return Ok(GameResult {
                    winner: seat,
                    moves: self.moves,
                });
            }
        }
    }
}
