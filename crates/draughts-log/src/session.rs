//! One referee run: load a log, replay it, report the verdict.

use std::fs::File;
use std::io::{self, BufReader, Write};

use tracing::{info, warn};

use draughts_core::Move;
use draughts_referee::{Verdict, replay};

use crate::config::Config;
use crate::error::LogError;
use crate::parse::parse_log;

/// Drives a single game from file to report line.
pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Read the configured log, replay it, and write the report to `out`.
    /// Board drawings, when enabled, go to `draw_out`.
    pub fn run<W: Write, D: Write>(&self, out: &mut W, draw_out: &mut D) -> Result<Verdict, LogError> {
        info!(path = %self.config.log_path.display(), draw = self.config.draw, "referee session starting");
        let file = File::open(&self.config.log_path)?;
        let moves = parse_log(BufReader::new(file))?;
        self.judge(moves, out, draw_out)
    }

    /// Replay already-parsed board-frame moves and write the report.
    pub fn judge<W: Write, D: Write>(
        &self,
        moves: Vec<Move>,
        out: &mut W,
        draw_out: &mut D,
    ) -> Result<Verdict, LogError> {
        let total = moves.len();
        let mut draw_error: Option<io::Error> = None;
        let result = replay(moves, |board| {
            if !self.config.draw || draw_error.is_some() {
                return;
            }
            if let Err(err) = writeln!(draw_out, "{}\n", board.pretty()) {
                warn!(%err, "failed to draw board");
                draw_error = Some(err);
            }
        });
        if let Some(err) = draw_error {
            return Err(err.into());
        }

        report(&result.verdict, out)?;
        info!(moves = total, accepted = result.state.line(), verdict = %result.verdict, "referee session finished");
        Ok(result.verdict)
    }
}

/// Write the single report line for `verdict`.
pub fn report<W: Write>(verdict: &Verdict, out: &mut W) -> io::Result<()> {
    writeln!(out, "{verdict}")?;
    out.flush()
}
