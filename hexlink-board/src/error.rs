//! Error types for the Hex board, players and turn loop.

use std::{fmt, io};

use hexlink_core::{GraphError, GraphErrorCode};
use thiserror::Error;

use crate::{board::BoardCoord, game::Seat};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building or mutating a [`crate::Board`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BoardError {
    /// Both board dimensions must be at least one.
    #[error("board dimensions must both be at least 1 (got {width}x{height})")]
    InvalidDimensions {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// The cell count, with the two border anchors, overflows `usize`.
    #[error("board of {width}x{height} cells is too large")]
    TooLarge {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// The coordinate lies outside the board.
    #[error("{coord} is not on the board")]
    OffBoard {
        /// The rejected coordinate.
        coord: BoardCoord,
    },
    /// The cell already holds a piece.
    #[error("{coord} is already occupied")]
    Occupied {
        /// The rejected coordinate.
        coord: BoardCoord,
    },
    /// A connectivity graph rejected an update.
    #[error(transparent)]
    Graph {
        /// The underlying graph error.
        #[from]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`BoardError`] variants.
    enum BoardErrorCode for BoardError {
        /// Both board dimensions must be at least one.
        InvalidDimensions => InvalidDimensions { .. } => "BOARD_INVALID_DIMENSIONS",
        /// The cell count overflows `usize`.
        TooLarge => TooLarge { .. } => "BOARD_TOO_LARGE",
        /// The coordinate lies outside the board.
        OffBoard => OffBoard { .. } => "BOARD_OFF_BOARD",
        /// The cell already holds a piece.
        Occupied => Occupied { .. } => "BOARD_OCCUPIED",
        /// A connectivity graph rejected an update.
        Graph => Graph { .. } => "BOARD_GRAPH",
    }
}

impl BoardError {
    /// Retrieve the inner [`GraphErrorCode`] when a connectivity graph
    /// rejected the update.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { source } => Some(source.code()),
            _ => None,
        }
    }
}

/// An error produced while a [`crate::Player`] chooses a move.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Every cell is occupied, so no move exists.
    #[error("no empty cells remain")]
    NoEmptyCells,
    /// The move source ended before a move was read.
    #[error("input closed before a move was entered")]
    InputClosed,
    /// Reading the move or writing the prompt failed.
    #[error("player input failed: {source}")]
    Io {
        /// Underlying I/O failure.
        #[from]
        source: io::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`PlayerError`] variants.
    enum PlayerErrorCode for PlayerError {
        /// Every cell is occupied.
        NoEmptyCells => NoEmptyCells => "PLAYER_NO_EMPTY_CELLS",
        /// The move source ended.
        InputClosed => InputClosed => "PLAYER_INPUT_CLOSED",
        /// Reading or prompting failed.
        Io => Io { .. } => "PLAYER_IO",
    }
}

/// An error produced by the [`crate::Game`] turn loop.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GameError {
    /// The chosen move was rejected by the board.
    #[error(transparent)]
    Board {
        /// The board error raised by the move.
        #[from]
        source: BoardError,
    },
    /// The player could not produce a move.
    #[error(transparent)]
    Player {
        /// The player error raised while choosing the move.
        #[from]
        source: PlayerError,
    },
    /// A turn was requested after the game was decided.
    #[error("the game is already won by {winner}")]
    Finished {
        /// Seat that won the game.
        winner: Seat,
    },
    /// The board filled up without either player joining their borders.
    #[error("the board filled after {moves} moves without a winner")]
    NoWinner {
        /// Number of pieces placed.
        moves: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GameError`] variants.
    enum GameErrorCode for GameError {
        /// The chosen move was rejected by the board.
        Board => Board { .. } => "GAME_BOARD",
        /// The player could not produce a move.
        Player => Player { .. } => "GAME_PLAYER",
        /// A turn was requested after the game was decided.
        Finished => Finished { .. } => "GAME_FINISHED",
        /// The board filled without a winner.
        NoWinner => NoWinner { .. } => "GAME_NO_WINNER",
    }
}
