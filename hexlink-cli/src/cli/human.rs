//! Interactive move source reading `row col` pairs from a terminal.

use std::io::{BufRead, Write};

use hexlink_board::{Board, BoardCoord, Player, PlayerError};

const PROMPT: &str = "\nEnter your move (Row Col): ";
const OFF_BOARD: &str = "Not on the board! Try again...";
const OCCUPIED: &str = "Already occupied! Try again...";
const UNPARSEABLE: &str = "Invalid coordinate! Try again...";

/// Shows the board, then prompts on `output` until `input` yields an empty
/// on-board cell.
///
/// Moves are typed as 1-based `row col`. Rejected entries print a hint and
/// prompt again; the end of `input` surfaces as
/// [`PlayerError::InputClosed`].
///
/// # Examples
/// ```
/// use hexlink_board::{Board, BoardCoord, Player};
/// use hexlink_cli::cli::HumanPlayer;
///
/// let board = Board::new(3, 3)?;
/// let mut output = Vec::new();
/// let mut player = HumanPlayer::new("0 1\n2 3\n".as_bytes(), &mut output);
/// assert_eq!(player.take_turn(&board)?, BoardCoord::new(2, 1));
/// assert!(String::from_utf8(output)?.contains("Not on the board!"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a player reading moves from `input` and prompting on `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn take_turn(&mut self, board: &Board) -> Result<BoardCoord, PlayerError> {
        write!(self.output, "{board}")?;
        let mut line = String::new();
        loop {
            self.output.write_all(PROMPT.as_bytes())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayerError::InputClosed);
            }
            let hint = match parse_move(&line) {
                MoveEntry::Unparseable => UNPARSEABLE,
                MoveEntry::OffBoard => OFF_BOARD,
                MoveEntry::Cell(coord) if !board.is_valid(coord) => OFF_BOARD,
                MoveEntry::Cell(coord) if !board.is_empty(coord) => OCCUPIED,
                MoveEntry::Cell(coord) => return Ok(coord),
            };
            self.output.write_all(hint.as_bytes())?;
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum MoveEntry {
    Cell(BoardCoord),
    /// Well-formed numbers that cannot name a cell, such as `0` or `-3`.
    OffBoard,
    Unparseable,
}

/// Parses a 1-based `row col` entry.
pub(super) fn parse_move(line: &str) -> MoveEntry {
    let mut tokens = line.split_whitespace();
    let (Some(row), Some(col), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return MoveEntry::Unparseable;
    };
    let (Ok(row), Ok(col)) = (row.parse::<i64>(), col.parse::<i64>()) else {
        return MoveEntry::Unparseable;
    };
    match (to_index(row), to_index(col)) {
        (Some(row), Some(col)) => MoveEntry::Cell(BoardCoord::new(col, row)),
        _ => MoveEntry::OffBoard,
    }
}

fn to_index(one_based: i64) -> Option<usize> {
    usize::try_from(one_based.checked_sub(1)?).ok()
}
