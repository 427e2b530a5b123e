//! Move-log input, command-line handling, and the referee session driver.

pub mod config;
pub mod error;
pub mod parse;
pub mod session;

pub use config::{Config, Invocation, USAGE, parse_args};
pub use error::LogError;
pub use parse::{parse_line, parse_log};
pub use session::{Session, report};
