//! Terminal UI for Strictly Oracle

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::OracleConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use oracle_engine::GameTree;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

/// Run the terminal game until the user quits.
///
/// The game tree is built once up front and shared by every restart.
#[instrument(skip(config), fields(predicted = %config.predicted_player(), fps = config.fps()))]
pub fn run_tui(config: &OracleConfig) -> Result<()> {
    info!("Starting Strictly Oracle TUI");

    let started = Instant::now();
    let tree = GameTree::full();
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Game tree ready"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&tree, config.engine_config());
    let frame = Duration::from_secs(1) / (*config.fps()).max(1);
    let res = run_app(&mut terminal, &mut app, frame);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Frame loop: draw, gather input until the frame deadline, then apply at
/// most one queued selection.
fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App<'_>, frame: Duration) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let deadline = Instant::now() + frame;
        terminal.draw(|f| ui::draw(f, app))?;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == event::KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
            if app.should_quit() {
                return Ok(());
            }
        }

        app.on_frame().context("Turn engine failed")?;
    }
}
