//! Move legality: plain steps, mandatory captures, and step availability.

mod capture;
mod mobility;
mod step;

pub use capture::{capture_options, forced_moves};
pub use mobility::moves_available;
pub use step::is_legal_step;
