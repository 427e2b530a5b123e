use std::io;

use anyhow::{Context, Result};
use tracing::info;

use draughts_log::{Invocation, Session, USAGE, parse_args};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report line.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("draughts starting");

    let config = match parse_args(std::env::args().skip(1))? {
        Invocation::Run(config) => config,
        Invocation::Help => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let path = config.log_path.clone();
    Session::new(config)
        .run(&mut io::stdout().lock(), &mut io::stderr().lock())
        .with_context(|| format!("failed to referee {}", path.display()))?;
    Ok(())
}
