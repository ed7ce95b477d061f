//! Precomputed game tree.
//!
//! The tree is built once, eagerly, before play starts and is never mutated
//! afterwards. Each node owns its children outright; transpositions are not
//! merged, so the same position can appear under several branches.

use crate::action::Move;
use crate::rules::classify;
use crate::types::{GameStatus, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A position in the game tree together with how it was reached.
#[derive(Debug, Clone, Getters)]
pub struct TreeNode {
    /// Board content at this node.
    position: Position,
    /// Move that produced this node from its parent (`None` at a root
    /// with no recorded predecessor).
    last_move: Option<Move>,
    /// Player whose turn it is at this node.
    to_move: Player,
    /// Terminal classification of `position`.
    status: GameStatus,
    /// One child per empty cell, in ascending cell order. Empty when
    /// `status` is decided or the ply budget ran out.
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Recursively builds the subtree rooted at `position`.
    ///
    /// `to_move` is the player who places the next mark; it alternates on
    /// every level below.
    fn build(position: Position, last_move: Option<Move>, to_move: Player, budget: usize) -> Self {
        let status = classify(&position);
        let children = if status.is_decided() || budget == 0 {
            Vec::new()
        } else {
            position
                .empty_cells()
                .map(|cell| {
                    let mv = Move::new(to_move, cell);
                    TreeNode::build(
                        position.with_mark(cell, to_move),
                        Some(mv),
                        to_move.opponent(),
                        budget - 1,
                    )
                })
                .collect()
        };

        Self {
            position,
            last_move,
            to_move,
            status,
            children,
        }
    }

    /// Finds the child reached by `mv`.
    pub fn child(&self, mv: Move) -> Option<&TreeNode> {
        self.children.iter().find(|child| child.last_move == Some(mv))
    }

    /// True when the node has no continuations.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn accumulate(&self, depth: usize, stats: &mut TreeStats) {
        stats.nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);
        if !self.is_leaf() {
            for child in &self.children {
                child.accumulate(depth + 1, stats);
            }
            return;
        }
        match self.status {
            GameStatus::Won(Player::X) => stats.x_wins += 1,
            GameStatus::Won(Player::O) => stats.o_wins += 1,
            GameStatus::Draw => stats.draws += 1,
            GameStatus::Undecided => stats.undecided_leaves += 1,
        }
    }
}

/// Size and leaf breakdown of a built tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total nodes, root included.
    pub nodes: usize,
    /// Leaves where X completed a line.
    pub x_wins: usize,
    /// Leaves where O completed a line.
    pub o_wins: usize,
    /// Full-board leaves with no line.
    pub draws: usize,
    /// Leaves cut off by the ply budget before a decision.
    pub undecided_leaves: usize,
    /// Deepest level below the root.
    pub max_depth: usize,
}

impl TreeStats {
    /// Total leaf count.
    pub fn leaves(&self) -> usize {
        self.x_wins + self.o_wins + self.draws + self.undecided_leaves
    }
}

/// Owner of the root node of a precomputed tree.
#[derive(Debug, Clone)]
pub struct GameTree {
    root: TreeNode,
}

impl GameTree {
    /// Builds every continuation of `root_position` up to `max_plies` plies.
    ///
    /// The first mover is the opponent of `root_move`'s player, or X when
    /// there is no root move.
    #[instrument(skip(root_position))]
    pub fn build(root_position: Position, root_move: Option<Move>, max_plies: usize) -> Self {
        let to_move = root_move.map_or(Player::X, |mv| mv.player.opponent());
        let root = TreeNode::build(root_position, root_move, to_move, max_plies);
        debug!(children = root.children.len(), "Game tree built");
        Self { root }
    }

    /// Builds the exhaustive tree from the empty board.
    ///
    /// The ply budget equals the number of empty cells, so every path ends
    /// in a win or a draw.
    #[instrument]
    pub fn full() -> Self {
        let empty = Position::empty();
        let plies = empty.empty_count();
        Self::build(empty, None, plies)
    }

    /// The root node.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Walks the whole tree and counts nodes and leaves.
    #[instrument(skip(self))]
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.root.accumulate(0, &mut stats);
        stats
    }
}
