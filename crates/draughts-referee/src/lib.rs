//! Move-log replay and outcome classification for draughts.

pub mod error;
pub mod outcome;
pub mod replay;

pub use error::IllegalMove;
pub use outcome::{Verdict, classify};
pub use replay::{GameState, Phase, Replay, Transition, replay, replay_from};
