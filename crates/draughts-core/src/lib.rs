//! Core draughts types: board representation and move-legality rules.

mod bitboard;
mod board;
mod cell;
mod checker_move;
mod color;
mod diagram;
mod error;
mod piece_index;
pub mod rules;
mod square;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use cell::Cell;
pub use checker_move::{Move, MoveKind, MoveList};
pub use color::Color;
pub use diagram::STARTING_DIAGRAM;
pub use error::DiagramError;
pub use piece_index::PieceIndex;
pub use square::Square;
