//! Strictly Oracle library - tic-tac-toe with a perfect-play advisor
//!
//! Wraps the [`oracle_engine`] turn engine in a command-line application.
//!
//! # Architecture
//!
//! - **Config**: TOML startup configuration with CLI overrides
//! - **Commands**: headless `suggest` and `analyze`
//! - **TUI**: ratatui front end ticking the engine once per frame
//!
//! # Example
//!
//! ```
//! use strictly_oracle::{OracleConfig, commands};
//!
//! let report = commands::suggest(&OracleConfig::default(), &[(0, 0)]).unwrap();
//! assert!(report.contains("Suggested: Center"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;

pub mod commands;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command, EngineArgs, parse_cell};

// Crate-level exports - Configuration
pub use config::{ConfigError, OracleConfig};

// Crate-level exports - Engine types used by the front end
pub use oracle_engine::{EngineConfig, Player, SearchDepth};
