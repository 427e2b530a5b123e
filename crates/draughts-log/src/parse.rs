//! Move-log parsing.
//!
//! A log holds one move per line: four comma-separated integers
//! `x0,y0,x1,y1`, with `(0,0)` at the corner opposite the board's internal
//! origin. Parsed moves are flipped into the board frame.
//!
//! Values off the board are kept as long as they survive the flip, so the
//! referee reports them as illegal moves in their written form.

use std::io::BufRead;
use std::ops::RangeInclusive;

use draughts_core::Move;
use tracing::debug;

use crate::error::LogError;

/// Coordinates `v` for which both `v` and `7 - v` fit in an `i8`.
const REPRESENTABLE: RangeInclusive<i64> = -120..=127;

/// Parse one log line (1-indexed `line`) into a board-frame move.
pub fn parse_line(line: usize, text: &str) -> Result<Move, LogError> {
    let tokens: Vec<&str> = text.trim().split(',').map(str::trim).collect();
    if tokens.len() != 4 {
        return Err(LogError::WrongTokenCount {
            line,
            found: tokens.len(),
        });
    }

    let mut coords = [0i8; 4];
    for (slot, token) in coords.iter_mut().zip(&tokens) {
        let value: i64 = token.parse().map_err(|_| LogError::InvalidNumber {
            line,
            token: token.to_string(),
        })?;
        if !REPRESENTABLE.contains(&value) {
            return Err(LogError::CoordinateOutOfRange { line, value });
        }
        *slot = value as i8;
    }

    Ok(Move::from(coords).flipped())
}

/// Parse every line of a log. Line numbers are counted from 1.
pub fn parse_log<R: BufRead>(reader: R) -> Result<Vec<Move>, LogError> {
    let mut moves = Vec::new();
    for (index, text) in reader.lines().enumerate() {
        let text = text?;
        moves.push(parse_line(index + 1, &text)?);
    }
    debug!(count = moves.len(), "move log parsed");
    Ok(moves)
}
