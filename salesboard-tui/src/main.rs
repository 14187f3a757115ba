//! SalesBoard TUI — four-panel sales performance dashboard.
//!
//! Panels:
//! 1. Overview — KPI summary, country bar chart, product contribution, monthly trend
//! 2. Filters — reporting period, country and product multiselects
//! 3. Table — filtered transaction detail with scrolling
//! 4. Help — keyboard shortcuts
//!
//! Every filter change re-runs the core pipeline synchronously; there are no
//! background tasks.

mod app;
mod config;
mod input;
mod persistence;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::AppState;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let cfg = config::resolve()?;
    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("salesboard")
        .join("state.json");

    // A failed load is fatal: there is no partial dashboard.
    let mut app = AppState::new(cfg, state_path)
        .context("failed to load the sales dataset; the dashboard cannot start")?;

    let restored = persistence::load(&app.state_path);
    persistence::apply(&mut app, restored);

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    if let Err(e) = persistence::save(&app.state_path, &persistence::extract(&app)) {
        eprintln!("warning: failed to persist dashboard state: {e:#}");
    }

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    while app.running {
        // Recompute the pipeline for this frame; the view borrows the dataset.
        let view = app.view();
        terminal.draw(|f| ui::draw(f, app, &view))?;
        drop(view);

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }
    }
    Ok(())
}
