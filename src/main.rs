//! menu-board - restaurant menu manager
//!
//! A terminal app for maintaining a small in-memory restaurant menu:
//! add dishes, remove them by name, see per-course average prices,
//! and sort the list by course or price. Nothing is persisted; the
//! menu lives and dies with the process.

use anyhow::{Context, Result};
use crossterm::event;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod domain;
mod input;
mod ui;

use app::AppController;
use config::Settings;
use input::KeyPress;

/// Log file written next to the binary when RUST_LOG is set
const LOG_FILE: &str = "menu-board.log";

fn main() -> Result<()> {
    init_tracing()?;

    let settings = Settings::load().context("failed to load settings")?;
    debug!(?settings, "starting");
    let mut controller = AppController::new(settings);

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut controller);
    ratatui::restore();
    result
}

/// Synchronous draw/poll loop
///
/// Redraws every tick so time-based presentation (the list highlight)
/// advances even without input; each key press is handled to
/// completion before the next frame.
fn run(terminal: &mut ratatui::DefaultTerminal, app: &mut AppController) -> Result<()> {
    let tick_rate = app.settings().tick_rate();

    while app.is_running() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(tick_rate)? {
            let event = event::read()?;
            if let Some(key) = KeyPress::from_event(&event) {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}

/// Sets up file-based logging, gated on RUST_LOG
///
/// The terminal belongs to the TUI, so log lines go to a file instead
/// of stderr. With RUST_LOG unset, logging stays off entirely.
fn init_tracing() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
        .with_context(|| format!("failed to open log file {LOG_FILE}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
