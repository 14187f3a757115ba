//! Help panel — keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), theme::accent()),
            Span::styled(desc, theme::text()),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Global", theme::header())),
        entry("q", "quit"),
        entry("1-4", "jump to panel"),
        entry("Tab/S-Tab", "next / previous panel"),
        entry("e", "export filtered report as CSV"),
        entry("r", "reset filters to the full dataset"),
        entry("R", "reload the source file"),
        Line::from(""),
        Line::from(Span::styled("Filters panel", theme::header())),
        entry("←/→", "switch section"),
        entry("↑/↓", "move cursor / switch date bound"),
        entry("Space", "toggle selection"),
        entry("h/l", "shift focused date by one day"),
        entry("H/L", "shift focused date by one month"),
        Line::from(""),
        Line::from(Span::styled("Table panel", theme::header())),
        entry("↑/↓ j/k", "scroll one row"),
        entry("PgUp/PgDn", "scroll a page"),
        entry("Home", "back to the top"),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
