//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Position`]. They are total over every
//! combination of square values, reachable or not.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::types::{GameStatus, Position};
use tracing::instrument;

/// Classifies a position as won, drawn or undecided.
///
/// Lines are checked before fullness, so a full board with a completed
/// line is a win, never a draw.
#[instrument(level = "trace")]
pub fn classify(position: &Position) -> GameStatus {
    if let Some(winner) = check_winner(position) {
        return GameStatus::Won(winner);
    }
    if is_full(position) {
        return GameStatus::Draw;
    }
    GameStatus::Undecided
}
