//! Per-color list of occupied squares, derived from a [`Board`].

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Squares holding a piece of each color, in row-major order.
///
/// Always rebuilt from scratch with [`PieceIndex::recompute`]; the order is
/// what makes forced-capture enumeration deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PieceIndex {
    squares: [Vec<Square>; Color::COUNT],
}

impl PieceIndex {
    /// Scan the whole board and collect every piece position per color.
    pub fn recompute(board: &Board) -> PieceIndex {
        PieceIndex {
            squares: Color::ALL.map(|color| board.side(color).collect()),
        }
    }

    /// Squares of `color`, ascending by row then column.
    #[inline]
    pub fn squares(&self, color: Color) -> &[Square] {
        &self.squares[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::PieceIndex;
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::color::Color;
    use crate::square::Square;

    fn sq(x: i8, y: i8) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn starting_index_matches_cells() {
        let board = Board::starting_position();
        let index = PieceIndex::recompute(&board);
        for color in Color::ALL {
            let squares = index.squares(color);
            assert_eq!(squares.len(), 12);
            for &s in squares {
                assert_eq!(board.cell(s), Cell::of(color));
            }
        }
    }

    #[test]
    fn order_is_row_major() {
        let board = Board::starting_position();
        let index = board.piece_index();
        let black = index.squares(Color::Black);
        assert_eq!(&black[..5], &[sq(1, 0), sq(3, 0), sq(5, 0), sq(7, 0), sq(0, 1)]);
        assert!(black.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn recompute_reflects_mutation() {
        let mut board = Board::starting_position();
        board.move_piece(sq(0, 5), sq(1, 4));
        let index = board.piece_index();
        let white = index.squares(Color::White);
        assert_eq!(white[0], sq(1, 4));
        assert!(!white.contains(&sq(0, 5)));
    }
}
