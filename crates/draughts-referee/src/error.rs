//! The one error a replay can surface.

use draughts_core::Move;

/// A recorded move that breaks the rules. Replay stops here.
///
/// `mv` is in the log's original frame, exactly as it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("line {line} illegal move: {mv}")]
pub struct IllegalMove {
    /// 1-indexed line of the offending move.
    pub line: usize,
    /// The move as it appeared in the log.
    pub mv: Move,
}

#[cfg(test)]
mod tests {
    use super::IllegalMove;
    use draughts_core::Move;

    #[test]
    fn display_matches_report_format() {
        let err = IllegalMove {
            line: 1,
            mv: Move::new(0, 7, 2, 5),
        };
        assert_eq!(format!("{err}"), "line 1 illegal move: 0,7,2,5");
    }
}
