//! Strictly Oracle - Unified CLI
//!
//! Terminal tic-tac-toe with minimax hints, plus headless analysis commands.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use strictly_oracle::{Cli, Command, EngineArgs, OracleConfig, commands, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { engine, log_file } => run_play(engine, &log_file),
        Command::Suggest { engine, moves } => {
            init_stderr_logging();
            let config = load_config(&engine)?;
            print!("{}", commands::suggest(&config, &moves)?);
            Ok(())
        }
        Command::Analyze { json } => {
            init_stderr_logging();
            let analysis = commands::analyze();
            println!("{}", commands::render_analysis(&analysis, json)?.trim_end());
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Run the terminal game with logs redirected to a file.
fn run_play(engine: EngineArgs, log_file: &Path) -> Result<()> {
    // Logging to the terminal would corrupt the alternate screen
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    let config = load_config(&engine)?;
    tui::run_tui(&config)
}

/// Loads the config file if given, then applies command-line overrides.
#[instrument(skip_all, fields(config_path = ?args.config))]
fn load_config(args: &EngineArgs) -> Result<OracleConfig> {
    let config = match &args.config {
        Some(path) => OracleConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => OracleConfig::default(),
    };
    let config = config.with_overrides(args.predict, args.depth);
    info!(
        predicted_player = %config.predicted_player(),
        search_depth = %config.search_depth(),
        "Configuration resolved"
    );
    Ok(config)
}
