//! Turn-by-turn replay of a move log.
//!
//! Each recorded move is checked against the rules in priority order:
//!
//! 1. **Chain continuation**: the piece that just captured must capture
//!    again if it can, and the turn does not pass.
//! 2. **Mandatory capture**: if the side to move has any capture, the move
//!    must be one of them.
//! 3. **Free step**: otherwise the move must be a legal plain step.
//!
//! The first move that fails stops the replay.

use tracing::{debug, warn};

use draughts_core::rules::{capture_options, forced_moves, is_legal_step};
use draughts_core::{Board, Color, Move, Square};

use crate::error::IllegalMove;
use crate::outcome::{Verdict, classify};

/// Whether the previous move left a capture chain open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No pending chain.
    #[default]
    Free,
    /// The piece now on this square just captured and may have to go on.
    Chaining(Square),
}

/// How an accepted move was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A plain step; the turn passes.
    Step,
    /// A capture under the mandatory-capture rule; the turn passes.
    Capture,
    /// A further capture by the chaining piece; the turn stays.
    ChainCapture,
}

/// Everything the replay carries from one move to the next.
///
/// `GameState` is `Copy`; [`GameState::apply`] consumes one state and
/// returns the next, leaving the caller's copy untouched on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    /// The side whose move is validated next, outside a capture chain.
    to_move: Color,
    phase: Phase,
    /// Number of moves accepted so far.
    line: usize,
}

impl GameState {
    /// The opening layout with White to move.
    pub fn new() -> GameState {
        GameState::from_position(Board::starting_position(), Color::White)
    }

    /// Start from an arbitrary position.
    pub fn from_position(board: Board, to_move: Color) -> GameState {
        GameState {
            board,
            to_move,
            phase: Phase::Free,
            line: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move next. During an open chain the capturing side is the
    /// opposite color, since the turn already passed when the chain began.
    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of moves accepted so far.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Validate `mv` (internal frame) and return the resulting state.
    pub fn apply(self, mv: Move) -> Result<GameState, IllegalMove> {
        self.apply_traced(mv).map(|(next, _)| next)
    }

    /// Like [`GameState::apply`], also reporting how the move was classified.
    pub fn apply_traced(self, mv: Move) -> Result<(GameState, Transition), IllegalMove> {
        let line = self.line + 1;
        let illegal = IllegalMove {
            line,
            mv: mv.flipped(),
        };
        let mut next = self;
        next.line = line;

        if let Phase::Chaining(origin) = self.phase {
            let options = capture_options(origin, self.to_move.flip(), &self.board);
            if !options.is_empty() {
                if !options.contains(mv) {
                    return Err(illegal);
                }
                next.capture(mv);
                return Ok((next, Transition::ChainCapture));
            }
        }

        let forced = forced_moves(self.to_move, &self.board);
        let transition = if !forced.is_empty() {
            if !forced.contains(mv) {
                return Err(illegal);
            }
            next.capture(mv);
            Transition::Capture
        } else {
            if !is_legal_step(mv, self.to_move, &self.board) {
                return Err(illegal);
            }
            next.relocate(mv);
            next.phase = Phase::Free;
            Transition::Step
        };
        next.to_move = self.to_move.flip();
        Ok((next, transition))
    }

    /// Classify the position as it stands.
    pub fn outcome(&self) -> Verdict {
        classify(&self.board, self.to_move)
    }

    /// Apply a validated capture and follow the capturing piece.
    fn capture(&mut self, mv: Move) {
        if let Some(landing) = self.relocate(mv) {
            self.phase = Phase::Chaining(landing);
        }
    }

    /// Move the piece and remove a jumped piece, if any. Returns the landing square.
    fn relocate(&mut self, mv: Move) -> Option<Square> {
        let (from, to) = (mv.source()?, mv.dest()?);
        self.board.move_piece(from, to);
        if let Some(jumped) = mv.jumped() {
            self.board.remove_piece(jumped);
        }
        Some(to)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of replaying a whole log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replay {
    pub verdict: Verdict,
    /// State after the last accepted move.
    pub state: GameState,
}

/// Replay `moves` (internal frame) from the opening layout.
///
/// `observe` sees the board before each move is validated and once more
/// after the replay stops, so a fully legal log of `n` moves yields `n + 1`
/// observations.
pub fn replay<I, F>(moves: I, observe: F) -> Replay
where
    I: IntoIterator<Item = Move>,
    F: FnMut(&Board),
{
    replay_from(GameState::new(), moves, observe)
}

/// Replay `moves` starting from `state`.
pub fn replay_from<I, F>(mut state: GameState, moves: I, mut observe: F) -> Replay
where
    I: IntoIterator<Item = Move>,
    F: FnMut(&Board),
{
    for mv in moves {
        observe(state.board());
        match state.apply_traced(mv) {
            Ok((next, transition)) => {
                debug!(line = next.line(), mv = %mv.flipped(), ?transition, "move accepted");
                state = next;
            }
            Err(illegal) => {
                warn!(line = illegal.line, mv = %illegal.mv, to_move = %state.to_move(), "illegal move");
                observe(state.board());
                return Replay {
                    verdict: Verdict::Illegal(illegal),
                    state,
                };
            }
        }
    }

    observe(state.board());
    Replay {
        verdict: state.outcome(),
        state,
    }
}
