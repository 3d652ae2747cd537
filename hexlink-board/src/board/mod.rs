//! Board cells, pieces and the per-player connectivity graphs.

mod render;

use std::fmt;

use hexlink_core::{SearchStrategy, WeightedGraph};
use tracing::debug;

use crate::error::BoardError;

/// Offsets `(dcol, drow)` of the six cells touching a hex cell.
const HEX_NEIGHBOURS: [(isize, isize); 6] = [(0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1)];

/// A player's stone.
///
/// # Examples
/// ```
/// use hexlink_board::Piece;
///
/// assert_eq!(Piece::Red.opponent(), Piece::Black);
/// assert_eq!(Piece::Black.to_string(), "X");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Piece {
    /// Joins the left and right columns. Rendered as `O`.
    Red,
    /// Joins the top and bottom rows. Rendered as `X`.
    Black,
}

impl Piece {
    /// Returns the other player's piece.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    /// Returns the character used when drawing the board.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'O',
            Self::Black => 'X',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Zero-based cell coordinate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BoardCoord {
    /// Column, counted from the left.
    pub col: usize,
    /// Row, counted from the top.
    pub row: usize,
}

impl BoardCoord {
    /// Creates a coordinate from a column and a row.
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    fn offset(self, (dcol, drow): (isize, isize)) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add_signed(dcol)?,
            row: self.row.checked_add_signed(drow)?,
        })
    }
}

/// Rendered with 1-based numbers, matching what players type.
impl fmt::Display for BoardCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} col {}", self.row + 1, self.col + 1)
    }
}

/// One player's connectivity graph with its two border anchors.
#[derive(Clone, Debug)]
struct Links {
    graph: WeightedGraph<bool>,
    start: usize,
    end: usize,
}

impl Links {
    /// Links `cell_count` cells plus the two anchors; the caller has
    /// checked that `cell_count + 2` fits.
    fn new(cell_count: usize) -> Result<Self, BoardError> {
        Ok(Self {
            graph: WeightedGraph::new(cell_count + 2, false)?,
            start: cell_count,
            end: cell_count + 1,
        })
    }

    fn connects_borders(&mut self) -> Result<bool, BoardError> {
        Ok(self
            .graph
            .is_connected(self.start, self.end, SearchStrategy::SpanningForest)?)
    }
}

/// A rectangular Hex board of `width` columns and `height` rows.
///
/// # Examples
/// ```
/// use hexlink_board::{Board, BoardCoord, Piece};
///
/// let mut board = Board::new(3, 3)?;
/// for col in 0..3 {
///     assert!(!board.is_winner(Piece::Red)?);
///     board.place(Piece::Red, BoardCoord::new(col, 1))?;
/// }
/// assert!(board.is_winner(Piece::Red)?);
/// assert!(!board.is_winner(Piece::Black)?);
/// # Ok::<(), hexlink_board::BoardError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Box<[Option<Piece>]>,
    red: Links,
    black: Links,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    /// Returns [`BoardError::InvalidDimensions`] when either dimension is
    /// zero, [`BoardError::TooLarge`] when the cell count overflows `usize`,
    /// and [`BoardError::Graph`] when the link graphs cannot be allocated.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let cell_count = width
            .checked_mul(height)
            .filter(|cells| cells.checked_add(2).is_some())
            .ok_or(BoardError::TooLarge { width, height })?;
        // The link graphs dwarf the cell array, so allocate them first.
        let red = Links::new(cell_count)?;
        let black = Links::new(cell_count)?;
        Ok(Self {
            width,
            height,
            cells: vec![None; cell_count].into_boxed_slice(),
            red,
            black,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` when `coord` lies on the board.
    #[must_use]
    pub const fn is_valid(&self, coord: BoardCoord) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    /// Returns `true` when `coord` lies on the board and holds no piece.
    #[must_use]
    pub fn is_empty(&self, coord: BoardCoord) -> bool {
        self.is_valid(coord) && self.piece_at(coord).is_none()
    }

    /// Returns the piece at `coord`, or `None` for an empty or off-board
    /// cell.
    #[must_use]
    pub fn piece_at(&self, coord: BoardCoord) -> Option<Piece> {
        if !self.is_valid(coord) {
            return None;
        }
        self.cells[self.cell_index(coord)]
    }

    /// Iterates the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = BoardCoord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| BoardCoord::new(index % self.width, index / self.width))
    }

    /// Returns `true` once every cell holds a piece.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Places `piece` at `coord` and links it into its owner's graph.
    ///
    /// # Errors
    /// Returns [`BoardError::OffBoard`] or [`BoardError::Occupied`] and
    /// leaves the board unchanged when the cell cannot take a piece.
    pub fn place(&mut self, piece: Piece, coord: BoardCoord) -> Result<(), BoardError> {
        if !self.is_valid(coord) {
            return Err(BoardError::OffBoard { coord });
        }
        let index = self.cell_index(coord);
        if self.cells[index].is_some() {
            return Err(BoardError::Occupied { coord });
        }
        self.cells[index] = Some(piece);

        let neighbours: Vec<usize> = HEX_NEIGHBOURS
            .iter()
            .filter_map(|&delta| coord.offset(delta))
            .filter(|&next| self.piece_at(next) == Some(piece))
            .map(|next| self.cell_index(next))
            .collect();
        let (touches_start, touches_end) = match piece {
            Piece::Red => (coord.col == 0, coord.col + 1 == self.width),
            Piece::Black => (coord.row == 0, coord.row + 1 == self.height),
        };

        let links = self.links_mut(piece);
        for &neighbour in &neighbours {
            links.graph.set_weight(index, neighbour, true)?;
        }
        if touches_start {
            links.graph.set_weight(links.start, index, true)?;
        }
        if touches_end {
            links.graph.set_weight(links.end, index, true)?;
        }

        debug!(
            %piece,
            col = coord.col,
            row = coord.row,
            links = neighbours.len(),
            touches_start,
            touches_end,
            "piece placed"
        );
        Ok(())
    }

    /// Returns `true` once `piece` joins its two borders.
    ///
    /// Uses the cached spanning forest, so repeated checks between
    /// placements are cheap.
    ///
    /// # Errors
    /// Returns [`BoardError::Graph`] if the connectivity query is rejected.
    pub fn is_winner(&mut self, piece: Piece) -> Result<bool, BoardError> {
        self.links_mut(piece).connects_borders()
    }

    const fn cell_index(&self, coord: BoardCoord) -> usize {
        coord.row * self.width + coord.col
    }

    fn links_mut(&mut self, piece: Piece) -> &mut Links {
        match piece {
            Piece::Red => &mut self.red,
            Piece::Black => &mut self.black,
        }
    }
}
