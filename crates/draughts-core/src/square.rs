//! Board squares addressed by `(column, row)`.

use std::fmt;

/// A square on the 8x8 board, encoded as `row * 8 + column`.
///
/// Row 0 is the top edge of the internal frame, so index order is the
/// row-major scan order used everywhere pieces are enumerated.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Create a square from a column and row, returning `None` if either
    /// lies outside `0..8`.
    #[inline]
    pub const fn new(x: i8, y: i8) -> Option<Square> {
        if x >= 0 && x < 8 && y >= 0 && y < 8 {
            Some(Square((y as u8) * 8 + x as u8))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index without bounds checking.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Column, 0..7.
    #[inline]
    pub const fn x(self) -> i8 {
        (self.0 % 8) as i8
    }

    /// Row, 0..7.
    #[inline]
    pub const fn y(self) -> i8 {
        (self.0 / 8) as i8
    }

    /// The square `dx` columns and `dy` rows away, if it is on the board.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        Square::new(self.x() + dx, self.y() + dy)
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x(), self.y())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}
