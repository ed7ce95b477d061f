//! Command-line interface for strictly_oracle.

use clap::{Args, Parser, Subcommand};
use oracle_engine::{Player, SearchDepth};
use std::path::PathBuf;

/// Strictly Oracle - tic-tac-toe with a perfect-play move advisor
#[derive(Parser, Debug)]
#[command(name = "strictly_oracle")]
#[command(about = "Tic-tac-toe with minimax move hints", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal with hints for the predicted player
    Play {
        /// Engine options
        #[command(flatten)]
        engine: EngineArgs,

        /// File receiving log output while the terminal UI is active
        #[arg(long, default_value = "strictly_oracle.log")]
        log_file: PathBuf,
    },

    /// Replay moves headlessly and print the suggested reply
    Suggest {
        /// Engine options
        #[command(flatten)]
        engine: EngineArgs,

        /// Moves in play order, e.g. "0,0 1,1 1,0" (row,col; X first)
        #[arg(long, value_delimiter = ' ', value_parser = parse_cell)]
        moves: Vec<(usize, usize)>,
    },

    /// Build the full game tree and print its statistics
    Analyze {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by commands that run the turn engine.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Player who receives hints (overrides the config file)
    #[arg(long)]
    pub predict: Option<Player>,

    /// Search depth: "full" or a ply count (overrides the config file)
    #[arg(long)]
    pub depth: Option<SearchDepth>,
}

/// Parses a `row,col` pair.
pub fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("Invalid move '{}': expected row,col", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row in '{}'", s))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("Invalid column in '{}'", s))?;
    Ok((row, col))
}
