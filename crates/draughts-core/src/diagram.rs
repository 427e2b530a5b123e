//! Textual board diagrams: eight rows of `w`, `b` and `.`, row 0 first.
//!
//! Positions in tests and debug output are written this way.

use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::error::DiagramError;
use crate::square::Square;

/// Diagram of the opening layout.
pub const STARTING_DIAGRAM: &str = "\
.b.b.b.b
b.b.b.b.
.b.b.b.b
........
........
w.w.w.w.
.w.w.w.w
w.w.w.w.";

impl FromStr for Board {
    type Err = DiagramError;

    /// Rows are separated by whitespace or `/`.
    fn from_str(diagram: &str) -> Result<Board, DiagramError> {
        let rows: Vec<&str> = diagram
            .split(|c: char| c.is_whitespace() || c == '/')
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(DiagramError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let length = text.chars().count();
            if length != 8 {
                return Err(DiagramError::BadRowLength { row, length });
            }
            for (col, c) in text.chars().enumerate() {
                let cell =
                    Cell::from_diagram_char(c).ok_or(DiagramError::InvalidCellChar { character: c })?;
                if let Some(sq) = Square::new(col as i8, row as i8) {
                    board.set_cell(sq, cell);
                }
            }
        }
        Ok(board)
    }
}

impl Board {
    /// Serialize to the diagram format accepted by [`Board::from_str`],
    /// rows joined by `/`.
    pub fn diagram(&self) -> String {
        let mut out = String::with_capacity(71);
        for sq in Square::all() {
            if sq.x() == 0 && sq.y() > 0 {
                out.push('/');
            }
            out.push(self.cell(sq).diagram_char());
        }
        out
    }
}
