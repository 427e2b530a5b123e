//! Capture enumeration and the mandatory-capture rule.

use tracing::trace;

use crate::board::Board;
use crate::cell::Cell;
use crate::checker_move::{Move, MoveList};
use crate::color::Color;
use crate::piece_index::PieceIndex;
use crate::square::Square;

/// Column deltas probed for a capture, left before right.
const SIDES: [i8; 2] = [-1, 1];

/// Captures immediately available to the piece of `color` on `sq`.
///
/// A capture jumps forward-diagonally over an adjacent piece of the other
/// color onto the empty square directly behind it. There are no backward
/// captures, so the result holds at most two moves, left first.
pub fn capture_options(sq: Square, color: Color, board: &Board) -> MoveList {
    let mut list = MoveList::new();
    if color.cannot_capture_from(sq.y()) {
        return list;
    }

    let forward = color.forward();
    let enemy = Cell::of(color.flip());
    for dx in SIDES {
        let (Some(jumped), Some(landing)) = (sq.offset(dx, forward), sq.offset(2 * dx, 2 * forward))
        else {
            continue;
        };
        if board.cell(jumped) == enemy && board.cell(landing).is_empty() {
            list.push(Move::between(sq, landing));
        }
    }
    list
}

/// Every capture available to `color` anywhere on the board, in piece-index
/// order. A non-empty result means a plain step is illegal this turn.
pub fn forced_moves(color: Color, board: &Board) -> MoveList {
    let index = PieceIndex::recompute(board);
    let mut list = MoveList::new();
    for &sq in index.squares(color) {
        list.extend_from(&capture_options(sq, color, board));
    }
    if !list.is_empty() {
        trace!(%color, captures = ?list, "capture is mandatory");
    }
    list
}
