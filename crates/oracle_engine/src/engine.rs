//! Turn engine: the authoritative state machine of a live game.
//!
//! The engine consumes cell selections in arrival order, validates them
//! against the latest snapshot, appends a new snapshot per accepted move,
//! keeps the tree cursor in step and, on the predicted player's turns,
//! annotates the new snapshot with the recommended cell.

use crate::action::Move;
use crate::config::EngineConfig;
use crate::cursor::TreeCursor;
use crate::error::MoveError;
use crate::minimax::{Evaluation, evaluate};
use crate::phases::{EngineState, Outcome};
use crate::rules::classify;
use crate::tree::{GameTree, TreeNode};
use crate::types::{Board, Cell, GameStatus, Player};
use derive_getters::Getters;
use std::collections::VecDeque;
use tracing::{debug, info, instrument, warn};

/// One published state of the game. Never modified once appended.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameState {
    /// Board including any hint.
    board: Board,
    /// Player to move (the last mover once the game is over).
    active: Player,
}

impl GameState {
    fn initial() -> Self {
        Self {
            board: Board::new(),
            active: Player::X,
        }
    }
}

/// Result of a successful `apply_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move accepted, game continues. Carries the hinted cell if one was
    /// shown for the new active player.
    Continued {
        /// Cell annotated as the suggestion.
        hint: Option<Cell>,
    },
    /// Move accepted and it ended the game.
    Finished(Outcome),
    /// Game already over, the call had no effect.
    Dropped,
}

/// Result of one engine tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// No queued input.
    Idle,
    /// The oldest queued input was applied.
    Applied(Transition),
    /// The oldest queued input was invalid and discarded.
    Rejected(MoveError),
}

/// State machine driving a single game over a prebuilt tree.
#[derive(Debug, Clone)]
pub struct TurnEngine<'t> {
    config: EngineConfig,
    cursor: TreeCursor<'t>,
    snapshots: Vec<GameState>,
    moves: Vec<Move>,
    state: EngineState,
    status: GameStatus,
    inputs: VecDeque<(usize, usize)>,
}

impl<'t> TurnEngine<'t> {
    /// Starts a game at the root of `tree`.
    ///
    /// The tree must be rooted at the empty board with X to move. When X is
    /// the predicted player the opening hint is shown straight away.
    #[instrument(skip(tree))]
    pub fn new(tree: &'t GameTree, config: EngineConfig) -> Self {
        let mut engine = Self {
            config,
            cursor: TreeCursor::new(tree),
            snapshots: Vec::new(),
            moves: Vec::new(),
            state: EngineState::AwaitingMove,
            status: GameStatus::Undecided,
            inputs: VecDeque::new(),
        };

        let mut initial = GameState::initial();
        if initial.active == *config.predicted_player() {
            engine.place_hint(&mut initial.board);
        }
        engine.snapshots.push(initial);
        engine
    }

    /// Rebuilds a game by applying `moves` in order.
    ///
    /// # Errors
    ///
    /// Fails on the first move that is illegal, out of turn, or played
    /// after the game ended.
    #[instrument(skip(tree, moves), fields(moves = moves.len()))]
    pub fn replay(
        tree: &'t GameTree,
        config: EngineConfig,
        moves: &[Move],
    ) -> Result<Self, MoveError> {
        let mut engine = Self::new(tree, config);
        for mv in moves {
            if engine.state == EngineState::GameOver {
                return Err(MoveError::GameOver);
            }
            if mv.player != engine.active_player() {
                return Err(MoveError::WrongPlayer(mv.player));
            }
            engine.apply_move(mv.cell.row(), mv.cell.col())?;
        }
        Ok(engine)
    }

    /// Queues a cell selection. Selections are applied first in, first out.
    ///
    /// Selections arriving after the game ended are dropped.
    pub fn enqueue(&mut self, row: usize, col: usize) {
        if self.state == EngineState::GameOver {
            debug!(row, col, "Game over, dropping input");
            return;
        }
        self.inputs.push_back((row, col));
    }

    /// Number of selections waiting to be applied.
    pub fn queued(&self) -> usize {
        self.inputs.len()
    }

    /// Applies at most one queued selection.
    ///
    /// Invalid selections are reported as [`Tick::Rejected`] and leave the
    /// game unchanged.
    ///
    /// # Errors
    ///
    /// Only fatal errors ([`MoveError::is_fatal`]) are returned.
    pub fn tick(&mut self) -> Result<Tick, MoveError> {
        let Some((row, col)) = self.inputs.pop_front() else {
            return Ok(Tick::Idle);
        };

        match self.apply_move(row, col) {
            Ok(transition) => Ok(Tick::Applied(transition)),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                warn!(row, col, error = %err, "Rejected input");
                Ok(Tick::Rejected(err))
            }
        }
    }

    /// Places the active player's mark at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] / [`MoveError::SquareOccupied`] when the
    ///   cell cannot take a mark. Nothing changes.
    /// - [`MoveError::CursorDesync`] / [`MoveError::InvariantViolation`]
    ///   when the engine is broken. These are fatal.
    #[instrument(skip(self), fields(player = ?self.active_player()))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Transition, MoveError> {
        if self.state == EngineState::GameOver {
            debug!("Game over, ignoring move");
            return Ok(Transition::Dropped);
        }

        let cell = Cell::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        let current = self.current();
        if current.board.is_marked(cell) {
            return Err(MoveError::SquareOccupied(cell));
        }

        let player = current.active;
        let mv = Move::new(player, cell);
        let mut board = current.board.clone();
        board.clear_hints();
        board.place(cell, player);

        self.cursor.advance(mv)?;
        self.moves.push(mv);
        self.status = classify(&board.position());
        info!(%mv, status = ?self.status, "Move accepted");

        if let Some(outcome) = Outcome::from_status(self.status) {
            self.state = EngineState::GameOver;
            self.snapshots.push(GameState {
                board,
                active: player,
            });
            let dropped = self.inputs.len();
            self.inputs.clear();
            info!(%outcome, dropped, "Game over");
            self.check_invariants()?;
            return Ok(Transition::Finished(outcome));
        }

        let next = player.opponent();
        let hint = if next == *self.config.predicted_player() {
            self.place_hint(&mut board)
        } else {
            None
        };
        self.snapshots.push(GameState {
            board,
            active: next,
        });
        self.check_invariants()?;

        Ok(Transition::Continued { hint })
    }

    /// Cell the predicted player should play next, if it is their turn.
    ///
    /// Returns `None` when the game is over, it is the other player's turn,
    /// or the recommendation is not an empty cell.
    pub fn suggest(&self) -> Option<Cell> {
        if self.state == EngineState::GameOver
            || self.active_player() != *self.config.predicted_player()
        {
            return None;
        }
        let cell = self.recommend().recommended_cell()?;
        (!self.board().is_marked(cell)).then_some(cell)
    }

    /// Full minimax evaluation of the live position for the predicted player.
    pub fn recommend(&self) -> Evaluation {
        let node = self.cursor.current();
        let depth = self.config.search_depth().plies_for(node.position());
        evaluate(node, *self.config.predicted_player(), depth)
    }

    /// Marks the recommended cell on `board`, which must reflect the
    /// cursor's node. Occupied recommendations are discarded.
    fn place_hint(&self, board: &mut Board) -> Option<Cell> {
        let cell = self.recommend().recommended_cell()?;
        if board.mark_hint(cell) {
            debug!(%cell, "Hint placed");
            Some(cell)
        } else {
            warn!(%cell, "Recommended cell is occupied, hint discarded");
            None
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), MoveError> {
        use crate::invariants::{EngineInvariants, InvariantSet};

        EngineInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }

    #[cfg(not(debug_assertions))]
    fn check_invariants(&self) -> Result<(), MoveError> {
        Ok(())
    }

    /// Latest snapshot.
    pub fn current(&self) -> &GameState {
        // The initial snapshot is pushed in `new`.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Latest board, as the renderer should show it.
    pub fn board(&self) -> &Board {
        &self.current().board
    }

    /// Player to move.
    pub fn active_player(&self) -> Player {
        self.current().active
    }

    /// Phase of the state machine.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Classification of the live position.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::from_status(self.status)
    }

    /// False once the game is over.
    pub fn is_alive(&self) -> bool {
        self.state == EngineState::AwaitingMove
    }

    /// All snapshots, initial state first.
    pub fn snapshots(&self) -> &[GameState] {
        &self.snapshots
    }

    /// Accepted moves in the order they were applied.
    pub fn accepted_moves(&self) -> &[Move] {
        &self.moves
    }

    /// Tree node matching the live board.
    pub fn node(&self) -> &'t TreeNode {
        self.cursor.current()
    }

    /// Configuration the engine was started with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
