use std::io;

use anyhow::{Context, Result};
use tilemove_core::STARTING_PLACEMENT;
use tilemove_select::Session;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!(placement = STARTING_PLACEMENT, "tilemove starting");

    let mut session = Session::new();
    session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("session ended with an I/O error")?;
    Ok(())
}
