//! Draughts move representation.

use std::fmt;

use crate::square::Square;

/// The shape of a move, judged from its coordinates alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// One diagonal square.
    Step,
    /// Two diagonal squares, over a jumped piece.
    Capture,
    /// Anything else; never legal.
    Other,
}

/// A move `(x0, y0) -> (x1, y1)`.
///
/// Coordinates are kept as raw signed values so that out-of-range tuples
/// can be represented and rejected by the rules instead of at construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub x0: i8,
    pub y0: i8,
    pub x1: i8,
    pub y1: i8,
}

impl Move {
    pub const fn new(x0: i8, y0: i8, x1: i8, y1: i8) -> Move {
        Move { x0, y0, x1, y1 }
    }

    /// Build a move between two on-board squares.
    pub const fn between(from: Square, to: Square) -> Move {
        Move::new(from.x(), from.y(), to.x(), to.y())
    }

    /// Source square, if on the board.
    #[inline]
    pub const fn source(self) -> Option<Square> {
        Square::new(self.x0, self.y0)
    }

    /// Destination square, if on the board.
    #[inline]
    pub const fn dest(self) -> Option<Square> {
        Square::new(self.x1, self.y1)
    }

    /// Map every coordinate `v` to `7 - v`, switching between the log's
    /// frame and the board's frame. Applying it twice is the identity.
    #[inline]
    pub const fn flipped(self) -> Move {
        Move::new(
            7i8.wrapping_sub(self.x0),
            7i8.wrapping_sub(self.y0),
            7i8.wrapping_sub(self.x1),
            7i8.wrapping_sub(self.y1),
        )
    }

    /// Classify by diagonal distance.
    pub const fn kind(self) -> MoveKind {
        let dx = (self.x1 as i16 - self.x0 as i16).abs();
        let dy = (self.y1 as i16 - self.y0 as i16).abs();
        match (dx, dy) {
            (1, 1) => MoveKind::Step,
            (2, 2) => MoveKind::Capture,
            _ => MoveKind::Other,
        }
    }

    /// The square jumped over by a capture.
    pub const fn jumped(self) -> Option<Square> {
        match self.kind() {
            MoveKind::Capture => Square::new(
                ((self.x0 as i16 + self.x1 as i16) / 2) as i8,
                ((self.y0 as i16 + self.y1 as i16) / 2) as i8,
            ),
            _ => None,
        }
    }
}

impl From<[i8; 4]> for Move {
    fn from([x0, y0, x1, y1]: [i8; 4]) -> Move {
        Move::new(x0, y0, x1, y1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x0, self.y0, self.x1, self.y1)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

/// Capacity of a [`MoveList`]. Twelve pieces with two captures each is the
/// most a color can ever be offered.
const MOVE_LIST_CAPACITY: usize = 32;

/// Stack-allocated buffer of moves.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MOVE_LIST_CAPACITY],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub const fn new() -> MoveList {
        MoveList {
            moves: [Move::new(0, 0, 0, 0); MOVE_LIST_CAPACITY],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < MOVE_LIST_CAPACITY);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Append every move of `other`.
    pub fn extend_from(&mut self, other: &MoveList) {
        for &mv in other {
            self.push(mv);
        }
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return `true` if `mv` is in the list.
    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
