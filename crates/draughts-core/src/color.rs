//! Piece colors and their fixed direction of travel.

use std::fmt;

/// A draughts piece color: White or Black.
///
/// White moves first and advances toward row 0; Black advances toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of one forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The farthest row this color travels toward. A piece standing on it
    /// has no forward step left.
    #[inline]
    pub const fn far_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Return `true` if a piece of this color on `row` is too close to the
    /// far edge to land a capture (needs two rows of room).
    #[inline]
    pub const fn cannot_capture_from(self, row: i8) -> bool {
        match self {
            Color::White => row <= 1,
            Color::Black => row >= 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn index_values() {
        assert_eq!(Color::White.index(), 0);
        assert_eq!(Color::Black.index(), 1);
    }

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
        assert_eq!(Color::White.flip().flip(), Color::White);
    }

    #[test]
    fn forward_directions_are_opposite() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.far_row(), 0);
        assert_eq!(Color::Black.far_row(), 7);
    }

    #[test]
    fn capture_room() {
        assert!(Color::White.cannot_capture_from(0));
        assert!(Color::White.cannot_capture_from(1));
        assert!(!Color::White.cannot_capture_from(2));
        assert!(Color::Black.cannot_capture_from(6));
        assert!(Color::Black.cannot_capture_from(7));
        assert!(!Color::Black.cannot_capture_from(5));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "white");
        assert_eq!(format!("{}", Color::Black), "black");
    }
}
