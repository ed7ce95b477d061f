//! Rendering of the board, hint and status line.

use super::app::App;
use oracle_engine::{CELL_COUNT, Cell, GRID_SIZE, Player, Tile};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Draws one frame and records the cell areas on `app` for mouse input.
pub fn draw(frame: &mut Frame, app: &mut App<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Oracle - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let areas = draw_board(frame, chunks[1], app);
    app.set_cell_areas(areas);

    let status_style = if app.engine().is_alive() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("click / 1-9 / arrows+enter/space: play   r: restart   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App<'_>) -> [Rect; CELL_COUNT] {
    let width = CELL_WIDTH * GRID_SIZE as u16 + (GRID_SIZE as u16 - 1);
    let height = CELL_HEIGHT * GRID_SIZE as u16 + (GRID_SIZE as u16 - 1);
    let board_area = center_rect(area, width, height);

    let mut areas = [Rect::default(); CELL_COUNT];
    for cell in Cell::ALL {
        let (row, col) = (cell.row() as u16, cell.col() as u16);
        let rect = Rect::new(
            board_area.x + col * (CELL_WIDTH + 1),
            board_area.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area);
        draw_cell(frame, rect, app, cell);
        areas[cell.to_index()] = rect;
    }
    areas
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App<'_>, cell: Cell) {
    let tile = app.engine().board().get(cell);
    let (symbol, color) = tile_glyph(tile);

    let mut block_style = Style::default().fg(color);
    let mut text_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if tile == Tile::Hint {
        block_style = block_style.bg(Color::Green);
        // Dark glyph so the marker reads against the green fill.
        text_style = text_style.fg(Color::Black).bg(Color::Green);
    }
    if cell == app.cursor() && app.engine().is_alive() {
        block_style = block_style.add_modifier(Modifier::REVERSED);
    }

    let text = Line::from(Span::styled(symbol, text_style));
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(block_style));
    frame.render_widget(paragraph, area);
}

fn tile_glyph(tile: Tile) -> (&'static str, Color) {
    match tile {
        Tile::Empty => (" ", Color::White),
        Tile::Marked(Player::X) => ("X", Color::Red),
        Tile::Marked(Player::O) => ("O", Color::Blue),
        Tile::Hint => ("?", Color::Green),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
