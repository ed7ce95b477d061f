//! Startup configuration of the turn engine.

use crate::types::{Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How many plies the hint search looks ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    /// Search until every line of play is decided.
    #[default]
    Full,
    /// Search at most this many plies.
    Plies(usize),
}

impl SearchDepth {
    /// Remaining depth to search from `position`.
    pub fn plies_for(self, position: &Position) -> usize {
        let empty = position.empty_count();
        match self {
            SearchDepth::Full => empty,
            SearchDepth::Plies(plies) => plies.min(empty),
        }
    }
}

impl FromStr for SearchDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("full") {
            return Ok(SearchDepth::Full);
        }
        s.parse::<usize>()
            .map(SearchDepth::Plies)
            .map_err(|_| format!("Invalid search depth '{}': expected 'full' or a ply count", s))
    }
}

impl std::fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchDepth::Full => write!(f, "full"),
            SearchDepth::Plies(plies) => write!(f, "{}", plies),
        }
    }
}

/// Engine parameters fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Player whose best move is suggested on each of their turns.
    #[serde(default = "default_predicted_player")]
    predicted_player: Player,

    /// Look-ahead of the hint search.
    #[serde(default)]
    search_depth: SearchDepth,
}

fn default_predicted_player() -> Player {
    Player::O
}

impl EngineConfig {
    /// Creates a new engine configuration.
    pub fn new(predicted_player: Player, search_depth: SearchDepth) -> Self {
        Self {
            predicted_player,
            search_depth,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(default_predicted_player(), SearchDepth::Full)
    }
}
