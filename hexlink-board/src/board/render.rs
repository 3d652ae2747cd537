//! Slanted ASCII rendering of a [`Board`].
//!
//! Each row is shifted two columns right of the one above so the hex
//! adjacency reads naturally:
//!
//! ```text
//! 1: . - . - .
//!     \ / \ / \
//!   2: . - O - .
//!       \ / \ / \
//!     3: X - . - .
//!         1   2   3
//! ```

use std::fmt;

use super::{Board, BoardCoord};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let indent = row * 2 + 3;
            let label = format!("{}: ", row + 1);
            let cells: Vec<String> = (0..self.width)
                .map(|col| {
                    self.piece_at(BoardCoord::new(col, row))
                        .map_or_else(|| ".".to_owned(), |piece| piece.to_string())
                })
                .collect();
            writeln!(
                f,
                "{:pad$}{label}{}",
                "",
                cells.join(" - "),
                pad = indent.saturating_sub(label.len())
            )?;

            if row + 1 < self.height {
                let connectors = " \\ /".repeat(self.width - 1);
                writeln!(f, "{:indent$}{connectors} \\", "")?;
            } else {
                let numbers: Vec<String> = (1..=self.width).map(|col| col.to_string()).collect();
                writeln!(f, "{:indent$} {}", "", numbers.join("   "))?;
            }
        }
        Ok(())
    }
}
