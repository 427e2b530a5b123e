//! Final classification of a replayed game.

use std::fmt;

use draughts_core::rules::moves_available;
use draughts_core::{Board, Color};

use crate::error::IllegalMove;

/// The single result reported for a move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A move broke the rules; nothing after it was replayed.
    Illegal(IllegalMove),
    /// The log ended while the next player still had a plain step.
    Incomplete,
    /// The game is stuck and this color has more pieces.
    Winner(Color),
    /// The game is stuck with equal piece counts.
    Tie,
}

/// Classify the position left after every move was accepted.
///
/// # Decision rules
///
/// * **Incomplete**: `to_move` has any plain step available. Captures are
///   not considered, so a position with only a capture left is scored.
/// * **Winner**: otherwise, the color with more pieces.
/// * **Tie**: otherwise.
pub fn classify(board: &Board, to_move: Color) -> Verdict {
    if moves_available(to_move, board) {
        return Verdict::Incomplete;
    }

    let white = board.count_pieces(Color::White);
    let black = board.count_pieces(Color::Black);
    match white.cmp(&black) {
        std::cmp::Ordering::Greater => Verdict::Winner(Color::White),
        std::cmp::Ordering::Less => Verdict::Winner(Color::Black),
        std::cmp::Ordering::Equal => Verdict::Tie,
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Illegal(illegal) => write!(f, "{illegal}"),
            Verdict::Incomplete => write!(f, "incomplete game"),
            Verdict::Winner(Color::White) => write!(f, "first"),
            Verdict::Winner(Color::Black) => write!(f, "second"),
            Verdict::Tie => write!(f, "tie"),
        }
    }
}
