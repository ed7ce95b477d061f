//! Advisor configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use oracle_engine::{EngineConfig, Player, SearchDepth};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Startup configuration of the advisor.
///
/// Every field is optional in the file; missing fields take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Player whose optimal moves are suggested.
    #[serde(default = "default_predicted_player")]
    predicted_player: Player,

    /// Look-ahead of the hint search (`"full"` or `{ plies = N }`).
    #[serde(default)]
    search_depth: SearchDepth,

    /// Frames per second of the terminal front end.
    #[serde(default = "default_fps")]
    fps: u32,
}

#[instrument]
fn default_predicted_player() -> Player {
    Player::O
}

#[instrument]
fn default_fps() -> u32 {
    30
}

impl OracleConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            predicted_player = %config.predicted_player,
            search_depth = %config.search_depth,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces fields with command-line values where given.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        predicted_player: Option<Player>,
        search_depth: Option<SearchDepth>,
    ) -> Self {
        if let Some(player) = predicted_player {
            self.predicted_player = player;
        }
        if let Some(depth) = search_depth {
            self.search_depth = depth;
        }
        self
    }

    /// Engine parameters derived from this configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(self.predicted_player, self.search_depth)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::new("fps must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            predicted_player: default_predicted_player(),
            search_depth: SearchDepth::Full,
            fps: default_fps(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
