//! Plain-step availability, used to tell a finished game from a cut-off log.

use crate::board::Board;
use crate::color::Color;

/// Return `true` if any piece of `color` has an empty forward-diagonal
/// neighbor. Captures are not considered.
pub fn moves_available(color: Color, board: &Board) -> bool {
    let forward = color.forward();
    board
        .side(color)
        .filter(|sq| sq.y() != color.far_row())
        .any(|sq| {
            [-1, 1].into_iter().any(|dx| {
                sq.offset(dx, forward)
                    .is_some_and(|target| board.cell(target).is_empty())
            })
        })
}

#[cfg(test)]
mod tests {
    use super::moves_available;
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::color::Color;
    use crate::square::Square;

    fn sq(x: i8, y: i8) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn both_sides_can_move_from_the_opening() {
        let board = Board::starting_position();
        assert!(moves_available(Color::White, &board));
        assert!(moves_available(Color::Black, &board));
    }

    #[test]
    fn piece_on_far_row_is_stuck() {
        let mut board = Board::empty();
        board.set_cell(sq(3, 0), Cell::White);
        assert!(!moves_available(Color::White, &board));
        board.set_cell(sq(4, 7), Cell::Black);
        assert!(!moves_available(Color::Black, &board));
    }

    #[test]
    fn blocked_piece_has_no_step() {
        let mut board = Board::empty();
        board.set_cell(sq(0, 4), Cell::White);
        board.set_cell(sq(1, 3), Cell::Black);
        assert!(!moves_available(Color::White, &board));
        // The black blocker itself can still step forward.
        assert!(moves_available(Color::Black, &board));
    }

    #[test]
    fn captures_do_not_count_as_steps() {
        // White on (2,4) is blocked on both diagonals but could capture left.
        let mut board = Board::empty();
        board.set_cell(sq(2, 4), Cell::White);
        board.set_cell(sq(1, 3), Cell::Black);
        board.set_cell(sq(3, 3), Cell::Black);
        board.set_cell(sq(4, 2), Cell::Black);
        assert!(!moves_available(Color::White, &board));
    }

    #[test]
    fn no_pieces_no_moves() {
        assert!(!moves_available(Color::White, &Board::empty()));
    }
}
