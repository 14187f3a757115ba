//! Top-level UI layout — active panel plus a one-line status bar.

pub mod filter_panel;
pub mod help_panel;
pub mod overview;
pub mod status_bar;
pub mod table_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use salesboard_core::report::DashboardView;

use crate::app::{AppState, Panel};
use crate::theme;

/// Draw the entire UI for one frame.
pub fn draw(f: &mut Frame, app: &AppState, view: &DashboardView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    draw_panel(f, chunks[0], app, view);
    status_bar::render(f, chunks[1], app, view);
}

fn draw_panel(f: &mut Frame, area: Rect, app: &AppState, view: &DashboardView) {
    let panel = app.active_panel;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::header());

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Overview => overview::render(f, inner, view),
        Panel::Filters => filter_panel::render(f, inner, app),
        Panel::Table => table_panel::render(f, inner, app, view),
        Panel::Help => help_panel::render(f, inner),
    }
}
