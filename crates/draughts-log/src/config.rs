//! Command-line configuration.

use std::path::PathBuf;

use crate::error::LogError;

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
Usage: draughts --name <file> [--draw <0|1>]

Replays a draughts move log and prints one line: the first illegal move,
\"incomplete game\", \"first\", \"second\" or \"tie\".

Options:
  --name <file>   move log, one `x0,y0,x1,y1` move per line
  --draw <int>    non-zero prints the board before every move
  -h, --help      show this message";

/// Settings for one referee session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Path of the move log.
    pub log_path: PathBuf,
    /// Print the board before each move and after the last one.
    pub draw: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Replay a log.
    Run(Config),
    /// Print usage and exit.
    Help,
}

/// Parse command-line arguments, excluding the program name.
///
/// Supports `--name <file>`, `--name=<file>`, a bare positional path,
/// `--draw <int>`, `--draw=<int>` and `-h`/`--help`.
pub fn parse_args<I, S>(args: I) -> Result<Invocation, LogError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut log_path: Option<PathBuf> = None;
    let mut draw = false;

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "-h" | "--help" => return Ok(Invocation::Help),
            "--name" => {
                let value = inline
                    .or_else(|| args.next())
                    .ok_or_else(|| LogError::MissingValue { flag: flag.clone() })?;
                log_path = Some(PathBuf::from(value));
            }
            "--draw" => {
                let value = inline
                    .or_else(|| args.next())
                    .ok_or_else(|| LogError::MissingValue { flag: flag.clone() })?;
                let n: i64 = value
                    .parse()
                    .map_err(|_| LogError::InvalidDrawFlag { value: value.clone() })?;
                draw = n != 0;
            }
            _ if !flag.starts_with('-') && log_path.is_none() => {
                log_path = Some(PathBuf::from(arg));
            }
            _ => return Err(LogError::UnknownArgument { arg }),
        }
    }

    let log_path = log_path.ok_or(LogError::MissingLogPath)?;
    Ok(Invocation::Run(Config { log_path, draw }))
}
