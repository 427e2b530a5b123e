//! Non-capturing step legality.

use crate::board::Board;
use crate::cell::Cell;
use crate::checker_move::Move;
use crate::color::Color;

/// Return `true` if `mv` is a legal plain step for `color`.
///
/// All of the following must hold:
/// * every coordinate is on the board,
/// * the move advances exactly one row forward for `color`,
/// * it shifts exactly one column left or right,
/// * the source holds a piece of `color`,
/// * the destination is empty.
///
/// Captures are never validated here; a two-row jump is rejected.
pub fn is_legal_step(mv: Move, color: Color, board: &Board) -> bool {
    let (Some(from), Some(to)) = (mv.source(), mv.dest()) else {
        return false;
    };

    if mv.y1 != mv.y0 + color.forward() {
        return false;
    }

    if mv.x1 != mv.x0 - 1 && mv.x1 != mv.x0 + 1 {
        return false;
    }

    board.cell(from) == Cell::of(color) && board.cell(to).is_empty()
}

#[cfg(test)]
mod tests {
    use super::is_legal_step;
    use crate::board::Board;
    use crate::checker_move::Move;
    use crate::color::Color;

    #[test]
    fn opening_steps() {
        let board = Board::starting_position();
        assert!(is_legal_step(Move::new(0, 5, 1, 4), Color::White, &board));
        assert!(is_legal_step(Move::new(2, 5, 1, 4), Color::White, &board));
        assert!(is_legal_step(Move::new(1, 2, 0, 3), Color::Black, &board));
        assert!(is_legal_step(Move::new(7, 2, 6, 3), Color::Black, &board));
    }

    #[test]
    fn wrong_color_at_source() {
        let board = Board::starting_position();
        assert!(!is_legal_step(Move::new(0, 5, 1, 4), Color::Black, &board));
        assert!(!is_legal_step(Move::new(1, 4, 0, 3), Color::White, &board));
    }

    #[test]
    fn occupied_destination() {
        let board = Board::starting_position();
        assert!(!is_legal_step(Move::new(0, 7, 1, 6), Color::White, &board));
    }

    #[test]
    fn two_row_jump() {
        let board = Board::starting_position();
        assert!(!is_legal_step(Move::new(0, 5, 2, 3), Color::White, &board));
    }

    #[test]
    fn sideways_and_straight_moves() {
        let board = Board::starting_position();
        assert!(!is_legal_step(Move::new(0, 5, 1, 5), Color::White, &board));
        assert!(!is_legal_step(Move::new(0, 5, 0, 4), Color::White, &board));
    }

    #[test]
    fn backward_step() {
        let mut board = Board::empty();
        board.set_cell(crate::square::Square::new(3, 4).unwrap(), crate::cell::Cell::White);
        assert!(is_legal_step(Move::new(3, 4, 2, 3), Color::White, &board));
        assert!(!is_legal_step(Move::new(3, 4, 2, 5), Color::White, &board));
    }

    #[test]
    fn off_board_never_faults() {
        let board = Board::starting_position();
        assert!(!is_legal_step(Move::new(0, 5, -1, 4), Color::White, &board));
        assert!(!is_legal_step(Move::new(8, 5, 7, 4), Color::White, &board));
        assert!(!is_legal_step(Move::new(i8::MIN, i8::MIN, i8::MAX, i8::MAX), Color::Black, &board));
        assert!(!is_legal_step(Move::new(i8::MAX, i8::MAX, i8::MIN, i8::MIN), Color::White, &board));
    }
}
