//! The draughts board: which cells hold a white piece, a black piece, or nothing.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::cell::Cell;
use crate::color::Color;
use crate::piece_index::PieceIndex;
use crate::square::Square;

/// An 8x8 board of [`Cell`]s, stored as one bitboard per color.
///
/// The board performs no legality checks of its own; callers validate moves
/// through [`crate::rules`] before mutating it.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    /// Occupancy for each side, indexed by [`Color::index()`].
    sides: [Bitboard; Color::COUNT],
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            sides: [Bitboard::EMPTY; Color::COUNT],
        }
    }

    /// Return the standard opening layout.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        board.initialize();
        board
    }

    /// Reset every cell, then place White on the three rows nearest row 7
    /// and Black on the three rows nearest row 0.
    pub fn initialize(&mut self) {
        self.sides = [Bitboard::WHITE_START, Bitboard::BLACK_START];
    }

    /// Return the state of the given cell.
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        if self.sides[Color::White.index()].contains(sq) {
            Cell::White
        } else if self.sides[Color::Black.index()].contains(sq) {
            Cell::Black
        } else {
            Cell::Empty
        }
    }

    /// Bounds-checked read by raw coordinates. `None` when off the board.
    #[inline]
    pub fn piece_at(&self, x: i8, y: i8) -> Option<Cell> {
        Square::new(x, y).map(|sq| self.cell(sq))
    }

    /// Return the bitboard for the given side.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    /// Return the occupied squares bitboard.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[Color::White.index()] | self.sides[Color::Black.index()]
    }

    /// Set `sq` to `cell`, replacing whatever was there.
    pub fn set_cell(&mut self, sq: Square, cell: Cell) {
        for side in &mut self.sides {
            *side = side.without(sq);
        }
        if let Some(color) = cell.color() {
            self.sides[color.index()] = self.sides[color.index()].with(sq);
        }
    }

    /// Copy the cell at `from` onto `to` and clear `from`.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let cell = self.cell(from);
        self.set_cell(to, cell);
        self.set_cell(from, Cell::Empty);
    }

    /// Clear the given cell, e.g. the square of a jumped piece.
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) {
        self.set_cell(sq, Cell::Empty);
    }

    /// Recompute the per-color list of occupied squares.
    #[inline]
    pub fn piece_index(&self) -> PieceIndex {
        PieceIndex::recompute(self)
    }

    /// Number of pieces of `color` on the board.
    #[inline]
    pub fn count_pieces(&self, color: Color) -> u32 {
        self.sides[color.index()].count()
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.diagram())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid with indices.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        writeln!(f, "   0 1 2 3 4 5 6 7")?;
        for y in 0i8..8 {
            write!(f, "{y}  ")?;
            for x in 0i8..8 {
                let c = board.piece_at(x, y).unwrap_or_default().diagram_char();
                if x < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            if y < 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
