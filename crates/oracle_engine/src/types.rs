//! Core domain types for the advisory engine.

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const GRID_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Player in the game.
///
/// `X` holds the first mark and always moves first; `O` holds the second.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (Mark1, goes first, maximizes).
    X,
    /// Player O (Mark2, goes second, minimizes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Alias used when talking about placed symbols rather than participants.
pub type Mark = Player;

/// One cell of a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A cell on the 3x3 board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cell {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Cell {
    /// All 9 cells in ascending index order.
    pub const ALL: [Cell; CELL_COUNT] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Creates a cell from its linear board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a cell from grid coordinates, `None` when out of bounds.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Self::from_index(row * GRID_SIZE + col)
    }

    /// Converts the cell to its linear board index (row * 3 + col).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this cell (0-2).
    pub fn row(self) -> usize {
        self.to_index() / GRID_SIZE
    }

    /// Column of this cell (0-2).
    pub fn col(self) -> usize {
        self.to_index() % GRID_SIZE
    }

    /// Get label for this cell (for display).
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// The nine-cell content of the board, independent of hint annotations.
///
/// A pure value: deriving a new position never touches the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Position {
    /// Creates an empty position.
    pub fn empty() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Creates a position from raw squares.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns a new position with `player`'s mark placed at `cell`.
    pub fn with_mark(&self, cell: Cell, player: Player) -> Self {
        let mut squares = self.squares;
        squares[cell.to_index()] = Square::Occupied(player);
        Self { squares }
    }

    /// Empty cells in ascending index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL.into_iter().filter(|cell| self.is_empty(*cell))
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

/// Display value of a live board cell.
///
/// Exactly one of these four values is exposed per cell to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Nothing placed, no suggestion.
    Empty,
    /// A real mark.
    Marked(Player),
    /// Transient suggestion for the predicted player's next move.
    Hint,
}

/// Live 3x3 board as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Tiles in row-major order (0-8).
    tiles: [Tile; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            tiles: [Tile::Empty; CELL_COUNT],
        }
    }

    /// Gets the tile at the given cell.
    pub fn get(&self, cell: Cell) -> Tile {
        self.tiles[cell.to_index()]
    }

    /// Gets the tile at grid coordinates.
    pub fn at(&self, row: usize, col: usize) -> Option<Tile> {
        Cell::from_row_col(row, col).map(|cell| self.get(cell))
    }

    /// True when the cell holds a real mark (hints do not count).
    pub fn is_marked(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Tile::Marked(_))
    }

    /// Returns all tiles as a slice.
    pub fn tiles(&self) -> &[Tile; CELL_COUNT] {
        &self.tiles
    }

    /// The cell currently carrying a hint, if any.
    pub fn hint(&self) -> Option<Cell> {
        Cell::ALL.into_iter().find(|cell| self.get(*cell) == Tile::Hint)
    }

    /// Projects the board onto a [`Position`], treating hints as empty.
    pub fn position(&self) -> Position {
        let mut squares = [Square::Empty; CELL_COUNT];
        for (square, tile) in squares.iter_mut().zip(self.tiles.iter()) {
            if let Tile::Marked(player) = tile {
                *square = Square::Occupied(*player);
            }
        }
        Position::from_squares(squares)
    }

    pub(crate) fn place(&mut self, cell: Cell, player: Player) {
        self.tiles[cell.to_index()] = Tile::Marked(player);
    }

    pub(crate) fn clear_hints(&mut self) {
        for tile in self.tiles.iter_mut() {
            if *tile == Tile::Hint {
                *tile = Tile::Empty;
            }
        }
    }

    /// Marks `cell` as the hint. Returns false (and changes nothing) when
    /// the cell is not empty.
    pub(crate) fn mark_hint(&mut self, cell: Cell) -> bool {
        if self.get(cell) != Tile::Empty {
            return false;
        }
        self.tiles[cell.to_index()] = Tile::Hint;
        true
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number, the hint shows `*`.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let pos = row * GRID_SIZE + col;
                let symbol = match self.tiles[pos] {
                    Tile::Empty => (pos + 1).to_string(),
                    Tile::Marked(Player::X) => "X".to_string(),
                    Tile::Marked(Player::O) => "O".to_string(),
                    Tile::Hint => "*".to_string(),
                };
                result.push_str(&symbol);
                if col < GRID_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < GRID_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of classifying a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No completed line and at least one empty cell.
    Undecided,
    /// A player completed a line.
    Won(Player),
    /// Board full with no completed line.
    Draw,
}

impl GameStatus {
    /// True for wins and draws.
    pub fn is_decided(self) -> bool {
        !matches!(self, GameStatus::Undecided)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_coordinates() {
        assert_eq!(Cell::from_row_col(0, 0), Some(Cell::TopLeft));
        assert_eq!(Cell::from_row_col(2, 0), Some(Cell::BottomLeft));
        assert_eq!(Cell::from_row_col(1, 2), Some(Cell::MiddleRight));
        assert_eq!(Cell::from_row_col(3, 0), None);
        assert_eq!(Cell::from_row_col(0, 3), None);
        assert_eq!(Cell::BottomCenter.row(), 2);
        assert_eq!(Cell::BottomCenter.col(), 1);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let empty = Position::empty();
        let next = empty.with_mark(Cell::Center, Player::X);
        assert!(empty.is_empty(Cell::Center));
        assert_eq!(next.get(Cell::Center), Square::Occupied(Player::X));
        assert_eq!(next.empty_count(), 8);
    }

    #[test]
    fn test_empty_cells_ascending() {
        let pos = Position::empty()
            .with_mark(Cell::TopLeft, Player::X)
            .with_mark(Cell::Center, Player::O);
        let cells: Vec<_> = pos.empty_cells().map(Cell::to_index).collect();
        assert_eq!(cells, vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_board_position_ignores_hint() {
        let mut board = Board::new();
        board.place(Cell::TopLeft, Player::X);
        assert!(board.mark_hint(Cell::Center));
        assert!(!board.mark_hint(Cell::TopLeft));

        let pos = board.position();
        assert_eq!(pos.get(Cell::TopLeft), Square::Occupied(Player::X));
        assert!(pos.is_empty(Cell::Center));
        assert_eq!(board.hint(), Some(Cell::Center));

        board.clear_hints();
        assert_eq!(board.hint(), None);
        assert_eq!(board.get(Cell::TopLeft), Tile::Marked(Player::X));
    }

    #[test]
    fn test_player_parses_from_str() {
        assert_eq!("X".parse::<Player>().ok(), Some(Player::X));
        assert_eq!("o".parse::<Player>().ok(), Some(Player::O));
        assert!("Z".parse::<Player>().is_err());
        assert_eq!(Player::O.to_string(), "O");
    }
}
