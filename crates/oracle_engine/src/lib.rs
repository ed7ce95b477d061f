//! Perfect-information move advisor for tic-tac-toe.
//!
//! The engine precomputes every continuation of the game once, then tracks
//! a live game against that tree and suggests the minimax-optimal move to a
//! designated player on each of their turns.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw classification of a [`Position`]
//! - **Tree**: eager enumeration of all continuations ([`GameTree`])
//! - **Minimax**: exhaustive evaluation with first-best tie-breaking
//! - **Cursor**: the tree node matching the live board ([`TreeCursor`])
//! - **Engine**: FIFO input handling, snapshots and hints ([`TurnEngine`])
//!
//! # Example
//!
//! ```
//! use oracle_engine::{Cell, EngineConfig, GameTree, Player, SearchDepth, TurnEngine};
//!
//! let tree = GameTree::full();
//! let mut engine = TurnEngine::new(&tree, EngineConfig::new(Player::O, SearchDepth::Full));
//! engine.enqueue(0, 0);
//! engine.tick().unwrap();
//! assert_eq!(engine.board().hint(), Some(Cell::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod cursor;
mod engine;
mod error;
mod invariants;
mod phases;
mod tree;
mod types;

pub mod minimax;
pub mod rules;

pub use action::Move;
pub use config::{EngineConfig, SearchDepth};
pub use cursor::TreeCursor;
pub use engine::{GameState, Tick, Transition, TurnEngine};
pub use error::{CursorDesync, MoveError};
pub use invariants::{
    AlternatingTurn, CursorInSync, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicSnapshots,
};
pub use minimax::Evaluation;
pub use phases::{EngineState, Outcome};
pub use tree::{GameTree, TreeNode, TreeStats};
pub use types::{
    Board, CELL_COUNT, Cell, GRID_SIZE, GameStatus, Mark, Player, Position, Square, Tile,
};
