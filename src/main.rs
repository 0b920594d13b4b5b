//! Tictactoe Timeline - Unified CLI
//!
//! Interactive play and scripted replays of a time-travelling tic-tac-toe game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use tictactoe_timeline::{
    Command as GameCommand, Config, GameState, HELP, Position, Session, SessionInput,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { descending } => run_play(config.with_descending(descending)),
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => run_replay(
            config.with_descending(descending).with_json(json),
            &moves,
            jump,
        ),
    }
}

/// Reads the config file, falling back to defaults when it does not exist.
fn load_config(path: &std::path::Path) -> Result<Config> {
    if path.exists() {
        Ok(Config::from_file(path)?)
    } else {
        Ok(Config::default())
    }
}

/// Prints a game view as text or JSON.
fn print_view(out: &mut impl Write, game: &GameState, json: bool) -> Result<()> {
    let view = game.view();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
    } else {
        write!(out, "{}", view.render())?;
    }
    Ok(())
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: Config) -> Result<()> {
    info!("Starting interactive session");

    let mut session = Session::new(config.display_order());
    let stdin = std::io::stdin();
    let mut out = std::io::stdout().lock();

    writeln!(out, "{}", HELP)?;
    print_view(&mut out, session.game(), *config.json())?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        match SessionInput::parse(&line) {
            Ok(SessionInput::Quit) => break,
            Ok(SessionInput::Help) => writeln!(out, "{}", HELP)?,
            Ok(SessionInput::Show) => print_view(&mut out, session.game(), *config.json())?,
            Ok(SessionInput::Command(command)) => match session.execute(command) {
                Ok(None) => print_view(&mut out, session.game(), *config.json())?,
                Ok(Some(reason)) => writeln!(out, "{}", reason)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Err(e) => writeln!(out, "{}", e)?,
        }
        out.flush()?;
    }

    info!("Session finished");
    Ok(())
}

/// Play the given cells, optionally jump, and print the view
#[instrument(skip(config))]
fn run_replay(config: Config, cells: &[usize], jump: Option<usize>) -> Result<()> {
    let mut session = Session::new(config.display_order());

    for &cell in cells {
        let pos = Position::from_index(cell)
            .with_context(|| format!("Cell {} is outside the board (0-8)", cell))?;
        if let Some(reason) = session.execute(GameCommand::ApplyMove(pos))? {
            warn!(cell, %reason, "Skipping illegal move");
        }
    }

    if let Some(step) = jump {
        session.execute(GameCommand::JumpTo(step))?;
    }

    let mut out = std::io::stdout().lock();
    print_view(&mut out, session.game(), *config.json())
}
