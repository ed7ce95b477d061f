//! Draw detection logic for tic-tac-toe.

use crate::types::{Position, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(position: &Position) -> bool {
    position.squares().iter().all(|s| *s != Square::Empty)
}
