//! Gridmark - terminal front end.

use anyhow::Result;
use clap::Parser;
use gridmark::{Cli, Command, Session, replay};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the game.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play { board } => {
            let config = board.resolve()?;
            info!(?config, "Starting interactive session");
            let mut session = Session::new(&config);
            session.run(io::stdin().lock(), io::stdout().lock())
        }
        Command::Replay { moves, json, board } => {
            let config = board.resolve()?;
            let report = replay(&config, &moves);
            let mut out = io::stdout().lock();
            if json {
                writeln!(out, "{}", report.to_json()?)?;
            } else {
                writeln!(out, "{}", report.to_text(&config))?;
            }
            Ok(())
        }
    }
}
