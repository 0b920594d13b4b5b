//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with full move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used if the file is absent)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play {
        /// Show the newest move first
        #[arg(long)]
        descending: bool,
    },

    /// Play a fixed list of cells and print the resulting view
    Replay {
        /// Cells to play in order, comma separated (e.g. 0,4,1,3,2)
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Step to view after playing the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Show the newest move first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
