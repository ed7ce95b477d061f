//! First-class invariants of the turn engine.
//!
//! Checked after every accepted move in debug builds. A violation means
//! the engine itself is broken, never that the input was bad.

use crate::engine::TurnEngine;
use crate::phases::EngineState;
use crate::types::{Player, Square, Tile};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the cursor's node holds exactly the marks on the live board.
pub struct CursorInSync;

impl Invariant<TurnEngine<'_>> for CursorInSync {
    fn holds(engine: &TurnEngine<'_>) -> bool {
        let node = engine.node();
        if *node.position() != engine.board().position() {
            return false;
        }
        // Once the game is over the snapshot keeps the last mover.
        engine.state() == EngineState::GameOver || *node.to_move() == engine.active_player()
    }

    fn description() -> &'static str {
        "Tree cursor matches the live board"
    }
}

/// Invariant: every snapshot adds exactly one mark to its predecessor and
/// never removes or changes one.
pub struct MonotonicSnapshots;

impl Invariant<TurnEngine<'_>> for MonotonicSnapshots {
    fn holds(engine: &TurnEngine<'_>) -> bool {
        let snapshots = engine.snapshots();
        if snapshots.len() != engine.accepted_moves().len() + 1 {
            return false;
        }

        snapshots.windows(2).zip(engine.accepted_moves()).all(|(pair, mv)| {
            let before = pair[0].board().position();
            let after = pair[1].board().position();
            before
                .squares()
                .iter()
                .zip(after.squares())
                .enumerate()
                .all(|(index, (old, new))| {
                    if index == mv.cell.to_index() {
                        *old == Square::Empty && *new == Square::Occupied(mv.player)
                    } else {
                        old == new
                    }
                })
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark"
    }
}

/// Invariant: X moves first, players alternate, mark counts stay balanced,
/// and at most one hint is shown.
pub struct AlternatingTurn;

impl Invariant<TurnEngine<'_>> for AlternatingTurn {
    fn holds(engine: &TurnEngine<'_>) -> bool {
        let moves = engine.accepted_moves();
        if let Some(first) = moves.first()
            && first.player != Player::X
        {
            return false;
        }
        if moves.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let position = engine.board().position();
        let (xs, os) = (position.count(Player::X), position.count(Player::O));
        if xs != os && xs != os + 1 {
            return false;
        }

        let hints = engine
            .board()
            .tiles()
            .iter()
            .filter(|tile| **tile == Tile::Hint)
            .count();
        if hints > 1 {
            return false;
        }

        let expected = match (engine.state(), moves.last()) {
            (EngineState::GameOver, Some(last)) => last.player,
            (_, Some(last)) => last.player.opponent(),
            (_, None) => Player::X,
        };
        engine.active_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (CursorInSync, MonotonicSnapshots, AlternatingTurn);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::tree::GameTree;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let tree = GameTree::full();
        let engine = TurnEngine::new(&tree, EngineConfig::default());
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_game() {
        let tree = GameTree::full();
        let mut engine = TurnEngine::new(&tree, EngineConfig::default());
        for (row, col) in [(0, 0), (1, 1), (2, 2), (0, 2), (2, 0), (1, 0), (2, 1)] {
            engine.apply_move(row, col).unwrap();
            assert!(EngineInvariants::check_all(&engine).is_ok());
        }
        assert!(!engine.is_alive());
    }

    #[test]
    fn test_violation_carries_description() {
        let violation = InvariantViolation::new(CursorInSync::description());
        assert_eq!(violation.description, "Tree cursor matches the live board");
    }
}
