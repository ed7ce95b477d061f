//! Win detection logic for tic-tac-toe.

use crate::types::{Cell, Player, Position, Square};

/// The eight winning lines, in checking order: rows, columns, diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first completed line in [`LINES`] order.
/// Unreachable positions with two completed lines of different marks
/// still get an answer.
pub fn check_winner(position: &Position) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = position.get(a);
        if sq != Square::Empty && sq == position.get(b) && sq == position.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Position::empty()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let pos = Position::empty()
            .with_mark(Cell::TopLeft, Player::X)
            .with_mark(Cell::TopCenter, Player::X)
            .with_mark(Cell::TopRight, Player::X);
        assert_eq!(check_winner(&pos), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let pos = Position::empty()
            .with_mark(Cell::TopCenter, Player::O)
            .with_mark(Cell::Center, Player::O)
            .with_mark(Cell::BottomCenter, Player::O);
        assert_eq!(check_winner(&pos), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let pos = Position::empty()
            .with_mark(Cell::TopRight, Player::O)
            .with_mark(Cell::Center, Player::O)
            .with_mark(Cell::BottomLeft, Player::O);
        assert_eq!(check_winner(&pos), Some(Player::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let pos = Position::empty()
            .with_mark(Cell::TopLeft, Player::X)
            .with_mark(Cell::TopCenter, Player::O)
            .with_mark(Cell::TopRight, Player::X);
        assert_eq!(check_winner(&pos), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Unreachable: X owns the middle row and O the bottom row.
        let pos = Position::empty()
            .with_mark(Cell::MiddleLeft, Player::X)
            .with_mark(Cell::Center, Player::X)
            .with_mark(Cell::MiddleRight, Player::X)
            .with_mark(Cell::BottomLeft, Player::O)
            .with_mark(Cell::BottomCenter, Player::O)
            .with_mark(Cell::BottomRight, Player::O);
        assert_eq!(check_winner(&pos), Some(Player::X));
    }
}
