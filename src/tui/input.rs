//! Translation of keys and clicks into board cells.

use crossterm::event::KeyCode;
use oracle_engine::{CELL_COUNT, Cell, GRID_SIZE};
use ratatui::layout::{Position, Rect};

/// Moves the keyboard cursor one cell in the arrow's direction.
///
/// The cursor stops at the board edge.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (row, col) = (cursor.row(), cursor.col());
    let last = GRID_SIZE - 1;

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(last), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(last)),
        _ => (row, col),
    };
    Cell::from_row_col(row, col).unwrap_or(cursor)
}

/// Cell for a 1-based keypad digit, matching the numbers shown on empty
/// cells.
pub fn cell_from_digit(digit: char) -> Option<Cell> {
    let number = digit.to_digit(10)? as usize;
    number.checked_sub(1).and_then(Cell::from_index)
}

/// Cell whose rendered area contains the terminal coordinate.
pub fn cell_at(areas: &[Rect; CELL_COUNT], column: u16, row: u16) -> Option<Cell> {
    let point = Position::new(column, row);
    areas
        .iter()
        .position(|area| area.contains(point))
        .and_then(Cell::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Cell::TopLeft, KeyCode::Up), Cell::TopLeft);
        assert_eq!(move_cursor(Cell::TopLeft, KeyCode::Left), Cell::TopLeft);
        assert_eq!(move_cursor(Cell::BottomRight, KeyCode::Down), Cell::BottomRight);
        assert_eq!(move_cursor(Cell::BottomRight, KeyCode::Right), Cell::BottomRight);
    }

    #[test]
    fn test_move_cursor_steps() {
        assert_eq!(move_cursor(Cell::Center, KeyCode::Up), Cell::TopCenter);
        assert_eq!(move_cursor(Cell::Center, KeyCode::Down), Cell::BottomCenter);
        assert_eq!(move_cursor(Cell::Center, KeyCode::Left), Cell::MiddleLeft);
        assert_eq!(move_cursor(Cell::Center, KeyCode::Right), Cell::MiddleRight);
        assert_eq!(move_cursor(Cell::Center, KeyCode::Enter), Cell::Center);
    }

    #[test]
    fn test_cell_from_digit() {
        assert_eq!(cell_from_digit('1'), Some(Cell::TopLeft));
        assert_eq!(cell_from_digit('5'), Some(Cell::Center));
        assert_eq!(cell_from_digit('9'), Some(Cell::BottomRight));
        assert_eq!(cell_from_digit('0'), None);
        assert_eq!(cell_from_digit('x'), None);
    }

    #[test]
    fn test_cell_at_hits_rendered_area() {
        let mut areas = [Rect::default(); CELL_COUNT];
        for (index, area) in areas.iter_mut().enumerate() {
            let (row, col) = ((index / GRID_SIZE) as u16, (index % GRID_SIZE) as u16);
            *area = Rect::new(col * 10, row * 4, 9, 3);
        }

        assert_eq!(cell_at(&areas, 0, 0), Some(Cell::TopLeft));
        assert_eq!(cell_at(&areas, 14, 5), Some(Cell::Center));
        assert_eq!(cell_at(&areas, 28, 10), Some(Cell::BottomRight));
        // Gap between columns.
        assert_eq!(cell_at(&areas, 9, 0), None);
        assert_eq!(cell_at(&areas, 200, 200), None);
    }
}
