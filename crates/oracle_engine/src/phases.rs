//! Engine phases and terminal outcomes.

use crate::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Phase of the turn engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineState {
    /// Waiting for the active player's cell selection.
    AwaitingMove,
    /// A line was completed or the board filled up. Inputs are dropped.
    GameOver,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Converts a decided status into an outcome.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Won(player) => Some(Outcome::Winner(player)),
            GameStatus::Draw => Some(Outcome::Draw),
            GameStatus::Undecided => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(Outcome::from_status(GameStatus::Undecided), None);

        let won = Outcome::from_status(GameStatus::Won(Player::O)).unwrap();
        assert_eq!(won.winner(), Some(Player::O));
        assert!(!won.is_draw());

        let draw = Outcome::from_status(GameStatus::Draw).unwrap();
        assert_eq!(draw.winner(), None);
        assert!(draw.is_draw());
        assert_eq!(draw.to_string(), "Draw");
    }
}
