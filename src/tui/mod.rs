//! Terminal front end: mouse-driven play in the terminal.

mod app;
mod ui;

pub use app::App;

use crate::config::Settings;
use crate::session::Match;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Log file used while the terminal is in raw mode.
pub const LOG_FILE: &str = "pointer_tictactoe.log";

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(settings: &Settings) -> Result<()> {
    // Log to a file so tracing output does not corrupt the screen
    let log_file = std::fs::File::create(LOG_FILE).context("Failed to create log file")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let game = Match::from_settings(settings)?;
    let mut app = App::new(game);
    let max_width = u16::try_from(*settings.width()).unwrap_or(u16::MAX);
    let max_height = u16::try_from(*settings.height()).unwrap_or(u16::MAX);

    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app, max_width, max_height);

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
    info!("Terminal UI closed");
    res
}

/// Draws, then drains input events one at a time in arrival order.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    max_width: u16,
    max_height: u16,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app, max_width, max_height))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("User quit");
                    app.quit();
                }
                KeyCode::Char('r') => app.restart(),
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Up(MouseButton::Left) => {
                if let Some(report) = app.handle_release(mouse.column, mouse.row) {
                    debug!(?report, "Release handled");
                }
            }
            _ => {}
        }
    }
    Ok(())
}
