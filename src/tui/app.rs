//! Application state and logic.

use super::input::{cell_at, cell_from_digit, move_cursor};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use oracle_engine::{
    CELL_COUNT, Cell, EngineConfig, GameTree, MoveError, Outcome, Tick, Transition, TurnEngine,
};
use ratatui::layout::Rect;
use tracing::{debug, info};

/// Main application state.
pub struct App<'t> {
    tree: &'t GameTree,
    config: EngineConfig,
    engine: TurnEngine<'t>,
    cursor: Cell,
    status_message: String,
    cell_areas: [Rect; CELL_COUNT],
    should_quit: bool,
}

impl<'t> App<'t> {
    /// Creates a new application playing over `tree`.
    pub fn new(tree: &'t GameTree, config: EngineConfig) -> Self {
        let mut app = Self {
            tree,
            config,
            engine: TurnEngine::new(tree, config),
            cursor: Cell::Center,
            status_message: String::new(),
            cell_areas: [Rect::default(); CELL_COUNT],
            should_quit: false,
        };
        app.status_message = app.turn_message();
        app
    }

    /// The running game.
    pub fn engine(&self) -> &TurnEngine<'t> {
        &self.engine
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Screen area of each cell from the last frame.
    pub fn cell_areas(&self) -> &[Rect; CELL_COUNT] {
        &self.cell_areas
    }

    /// Records where each cell was drawn, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; CELL_COUNT]) {
        self.cell_areas = areas;
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c) => {
                if let Some(cell) = cell_from_digit(c) {
                    self.cursor = cell;
                    self.select(cell);
                }
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    /// Handles a mouse event. Only left-button releases select a cell.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Up(MouseButton::Left) {
            return;
        }
        if let Some(cell) = cell_at(&self.cell_areas, mouse.column, mouse.row) {
            debug!(%cell, "Click on cell");
            self.cursor = cell;
            self.select(cell);
        }
    }

    fn select(&mut self, cell: Cell) {
        self.engine.enqueue(cell.row(), cell.col());
    }

    /// Advances the game by one queued selection.
    ///
    /// # Errors
    ///
    /// Returns fatal engine errors; rejected selections only update the
    /// status line.
    pub fn on_frame(&mut self) -> Result<(), MoveError> {
        match self.engine.tick()? {
            Tick::Idle => {}
            Tick::Rejected(err) => {
                self.status_message = format!("{}. {}", err, self.turn_message());
            }
            Tick::Applied(Transition::Finished(outcome)) => {
                self.status_message = game_over_message(outcome);
            }
            Tick::Applied(Transition::Continued { .. }) => {
                self.status_message = self.turn_message();
            }
            Tick::Applied(Transition::Dropped) => {}
        }
        Ok(())
    }

    /// Restarts the game over the same tree.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine = TurnEngine::new(self.tree, self.config);
        self.cursor = Cell::Center;
        self.status_message = self.turn_message();
    }

    fn turn_message(&self) -> String {
        let player = self.engine.active_player();
        match self.engine.board().hint() {
            Some(cell) => format!("{} to move. Hint: {}", player, cell.label()),
            None => format!("{} to move", player),
        }
    }
}

fn game_over_message(outcome: Outcome) -> String {
    match outcome {
        Outcome::Winner(player) => {
            format!("{} wins! Press 'r' to restart or 'q' to quit.", player)
        }
        Outcome::Draw => "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string(),
    }
}
