//! The state of a single board cell.

use std::fmt;

use crate::color::Color;

/// What occupies a cell: nothing, or a piece of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
}

impl Cell {
    /// The cell holding a piece of `color`.
    #[inline]
    pub const fn of(color: Color) -> Cell {
        match color {
            Color::White => Cell::White,
            Color::Black => Cell::Black,
        }
    }

    /// Color of the occupying piece, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(Color::White),
            Cell::Black => Some(Color::Black),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Diagram character: `w`, `b` or `.`.
    pub const fn diagram_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::White => 'w',
            Cell::Black => 'b',
        }
    }

    /// Parse a diagram character.
    pub const fn from_diagram_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'w' => Some(Cell::White),
            'b' => Some(Cell::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagram_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;
    use crate::color::Color;

    #[test]
    fn of_and_color_agree() {
        for color in Color::ALL {
            assert_eq!(Cell::of(color).color(), Some(color));
        }
        assert_eq!(Cell::Empty.color(), None);
        assert_eq!(Cell::default(), Cell::Empty);
    }

    #[test]
    fn diagram_chars_roundtrip() {
        for cell in [Cell::Empty, Cell::White, Cell::Black] {
            assert_eq!(Cell::from_diagram_char(cell.diagram_char()), Some(cell));
        }
        assert_eq!(Cell::from_diagram_char('x'), None);
    }
}
