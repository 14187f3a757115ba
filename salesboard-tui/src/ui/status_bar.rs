//! Bottom status bar — panel hints, dataset facts, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use salesboard_core::format;
use salesboard_core::report::DashboardView;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, view: &DashboardView) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " 1:Overview 2:Filters 3:Table 4:Help",
        theme::muted(),
    ));
    spans.push(Span::raw(" | "));

    spans.push(Span::styled(
        format!(
            "{}/{} rows",
            format::thousands(view.filtered.len() as i64),
            format::thousands(app.dataset.len() as i64)
        ),
        theme::accent(),
    ));
    if app.dataset.dropped_rows() > 0 {
        spans.push(Span::styled(
            format!(" ({} dropped)", app.dataset.dropped_rows()),
            theme::warning(),
        ));
    }
    spans.push(Span::styled(
        format!(" #{}", app.fingerprint),
        theme::muted(),
    ));

    if let Some((msg, level)) = &app.status {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
