//! Exhaustive minimax over the precomputed tree.
//!
//! Values are always from X's point of view: `+1` X wins with best play,
//! `-1` O wins, `0` draw or not yet determined. X maximizes and O
//! minimizes regardless of which side asks for advice.
//!
//! Ties go to the first child in cell order: a later child must be
//! strictly better to replace the current best.

use crate::action::Move;
use crate::tree::TreeNode;
use crate::types::{Cell, GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Value of a position won by X.
pub const X_WINS: i8 = 1;
/// Value of a drawn or undetermined position.
pub const DRAWN: i8 = 0;
/// Value of a position won by O.
pub const O_WINS: i8 = -1;

/// Result of evaluating a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Evaluation {
    /// Perfect-play value in {-1, 0, +1}.
    value: i8,
    /// Move to play from the evaluated node. At terminal or depth-limited
    /// nodes this is the move that led there.
    recommended: Option<Move>,
}

impl Evaluation {
    fn new(value: i8, recommended: Option<Move>) -> Self {
        Self { value, recommended }
    }

    /// Cell of the recommended move.
    pub fn recommended_cell(&self) -> Option<Cell> {
        self.recommended.map(|mv| mv.cell)
    }
}

/// Scores `node` for `player` searching at most `remaining_depth` plies.
#[instrument(skip(node), fields(empty_cells = node.position().empty_count()))]
pub fn evaluate(node: &TreeNode, player: Player, remaining_depth: usize) -> Evaluation {
    let evaluation = search(node, player, remaining_depth);
    debug!(
        value = evaluation.value,
        recommended = ?evaluation.recommended,
        "Minimax evaluation complete"
    );
    evaluation
}

fn search(node: &TreeNode, player: Player, remaining_depth: usize) -> Evaluation {
    let arrived_by = *node.last_move();
    match node.status() {
        GameStatus::Won(Player::X) => return Evaluation::new(X_WINS, arrived_by),
        GameStatus::Won(Player::O) => return Evaluation::new(O_WINS, arrived_by),
        GameStatus::Draw => return Evaluation::new(DRAWN, arrived_by),
        GameStatus::Undecided => {}
    }
    // A childless undecided node only exists below a truncated build.
    if remaining_depth == 0 || node.is_leaf() {
        return Evaluation::new(DRAWN, arrived_by);
    }

    let mut best_move = None;
    // Sentinels sit outside the value range so the first child always wins.
    let mut best_value = match player {
        Player::X => O_WINS - 1,
        Player::O => X_WINS + 1,
    };

    for child in node.children() {
        let value = search(child, player.opponent(), remaining_depth - 1).value;
        let improves = match player {
            Player::X => value > best_value,
            Player::O => value < best_value,
        };
        if improves {
            best_value = value;
            best_move = *child.last_move();
        }
    }

    Evaluation::new(best_value, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::GameTree;
    use crate::types::Position;

    fn tree_from(moves: &[(Player, Cell)]) -> GameTree {
        let mut pos = Position::empty();
        for (player, cell) in moves {
            pos = pos.with_mark(*cell, *player);
        }
        let last = moves.last().map(|(p, c)| Move::new(*p, *c));
        let plies = pos.empty_count();
        GameTree::build(pos, last, plies)
    }

    #[test]
    fn test_empty_board_is_draw() {
        let tree = GameTree::full();
        let eval = evaluate(tree.root(), Player::X, 9);
        assert_eq!(*eval.value(), DRAWN);
        // Every opening draws, so the first cell is kept.
        assert_eq!(eval.recommended_cell(), Some(Cell::TopLeft));
    }

    #[test]
    fn test_o_blocks_column() {
        // X _ _ / X O _ / _ _ _ with O to move: only (2,0) stops X.
        let tree = tree_from(&[
            (Player::X, Cell::TopLeft),
            (Player::O, Cell::Center),
            (Player::X, Cell::MiddleLeft),
        ]);
        let eval = evaluate(tree.root(), Player::O, 6);
        assert_eq!(eval.recommended_cell(), Some(Cell::BottomLeft));
    }

    #[test]
    fn test_x_takes_immediate_win() {
        // X X _ / O O _ / _ _ _ with X to move.
        let tree = tree_from(&[
            (Player::X, Cell::TopLeft),
            (Player::O, Cell::MiddleLeft),
            (Player::X, Cell::TopCenter),
            (Player::O, Cell::Center),
        ]);
        let eval = evaluate(tree.root(), Player::X, 5);
        assert_eq!(*eval.value(), X_WINS);
        assert_eq!(eval.recommended_cell(), Some(Cell::TopRight));
    }

    #[test]
    fn test_first_winning_cell_is_kept() {
        // X _ X / O O _ / O _ X with X to move: two ways to win.
        let tree = tree_from(&[
            (Player::X, Cell::TopLeft),
            (Player::O, Cell::Center),
            (Player::X, Cell::BottomRight),
            (Player::O, Cell::BottomLeft),
            (Player::X, Cell::TopRight),
            (Player::O, Cell::MiddleLeft),
        ]);
        let eval = evaluate(tree.root(), Player::X, 3);
        assert_eq!(*eval.value(), X_WINS);
        assert_eq!(eval.recommended_cell(), Some(Cell::TopCenter));
    }

    #[test]
    fn test_terminal_node_returns_arriving_move() {
        let tree = tree_from(&[
            (Player::X, Cell::TopLeft),
            (Player::O, Cell::MiddleLeft),
            (Player::X, Cell::TopCenter),
            (Player::O, Cell::Center),
            (Player::X, Cell::TopRight),
        ]);
        let eval = evaluate(tree.root(), Player::O, 4);
        assert_eq!(*eval.value(), X_WINS);
        assert_eq!(
            *eval.recommended(),
            Some(Move::new(Player::X, Cell::TopRight))
        );
    }

    #[test]
    fn test_depth_zero_is_neutral() {
        let tree = GameTree::full();
        let eval = evaluate(tree.root(), Player::X, 0);
        assert_eq!(eval, Evaluation::new(DRAWN, None));
    }

    #[test]
    fn test_truncated_tree_scores_cut_leaves_as_zero() {
        let tree = GameTree::build(Position::empty(), None, 2);
        let eval = evaluate(tree.root(), Player::X, 9);
        assert_eq!(*eval.value(), DRAWN);
        assert_eq!(eval.recommended_cell(), Some(Cell::TopLeft));
    }
}
