//! Error types for move handling.

use crate::action::Move;
use crate::types::{Cell, Player};
use derive_more::{Display, Error};

/// The tree cursor was asked to follow a move the current node has no
/// child for.
///
/// Only an internal bug can produce this: the engine advances the cursor
/// with moves it has already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cursor desync: no child for {} below node with {} empty cells", attempted, empty_cells)]
pub struct CursorDesync {
    /// Move that had no matching child.
    pub attempted: Move,
    /// Empty cells in the node the cursor was on.
    pub empty_cells: usize,
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({}, {}) is outside the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a real mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Cell),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Live board and precomputed tree disagree.
    #[display("{}", _0)]
    CursorDesync(CursorDesync),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

impl MoveError {
    /// True for errors that indicate a broken engine rather than bad input.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MoveError::CursorDesync(_) | MoveError::InvariantViolation(_)
        )
    }
}

impl From<CursorDesync> for MoveError {
    fn from(err: CursorDesync) -> Self {
        MoveError::CursorDesync(err)
    }
}
