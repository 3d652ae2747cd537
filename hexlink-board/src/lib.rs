//! Hex board built on the hexlink graph engine.
//!
//! Each player owns a boolean [`hexlink_core::WeightedGraph`] whose vertices
//! are the board cells plus two anchors standing for the borders that player
//! must join. Placing a piece links it to same-coloured neighbours and, on a
//! border cell, to the matching anchor; a player has won once the anchors are
//! connected.

mod board;
mod error;
mod game;
mod player;

pub use crate::{
    board::{Board, BoardCoord, Piece},
    error::{
        BoardError, BoardErrorCode, GameError, GameErrorCode, PlayerError, PlayerErrorCode,
    },
    game::{Game, GameResult, Seat, TurnOutcome},
    player::{Player, RandomPlayer},
};
