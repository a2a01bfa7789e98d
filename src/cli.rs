//! Command-line interface for tictactoe_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal (you are X and move first)
    Play {
        /// Path to a TOML config file
        #[arg(long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Print game snapshots as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the opponent's best move for a board, O to move
    Suggest {
        /// Nine cells row by row: X, O and . for empty (e.g. "XX.OO....")
        board: String,

        /// Print the ranked moves as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the outcome of a board
    Outcome {
        /// Nine cells row by row: X, O and . for empty
        board: String,
    },
}
