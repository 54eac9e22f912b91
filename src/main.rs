use std::io;

use anyhow::Result;
use tracing::info;

use tapchess_core::STARTING_FEN;
use tapchess_play::Session;

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!(fen = STARTING_FEN, "tapchess starting");

    let mut session = Session::new();
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
