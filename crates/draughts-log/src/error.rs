//! Move-log and command-line errors.

/// Errors raised while reading a move log or the command line.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// A line does not hold exactly four comma-separated values.
    #[error("line {line}: expected 4 comma-separated coordinates, found {found}")]
    WrongTokenCount {
        /// 1-indexed line number.
        line: usize,
        /// Number of tokens found.
        found: usize,
    },

    /// A token is not an integer.
    #[error("line {line}: invalid coordinate \"{token}\"")]
    InvalidNumber {
        /// 1-indexed line number.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    /// A coordinate too large to flip into the board frame.
    #[error("line {line}: coordinate {value} is out of range")]
    CoordinateOutOfRange {
        /// 1-indexed line number.
        line: usize,
        /// The offending value.
        value: i64,
    },

    /// A flag expecting a value was last on the command line.
    #[error("missing value for {flag}")]
    MissingValue {
        /// The flag, e.g. `--name`.
        flag: String,
    },

    /// An argument that is not understood.
    #[error("unknown argument: {arg}")]
    UnknownArgument {
        /// The argument as given.
        arg: String,
    },

    /// `--draw` was given something other than an integer.
    #[error("invalid --draw value: {value}")]
    InvalidDrawFlag {
        /// The value as given.
        value: String,
    },

    /// No move log was named.
    #[error("no move log given (use --name <file>)")]
    MissingLogPath,

    /// An I/O error occurred while reading the log or writing the report.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
