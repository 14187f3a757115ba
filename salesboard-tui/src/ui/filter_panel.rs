//! Filters panel — reporting period plus country/product multiselects.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, DateField, FilterSection};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_dates(f, columns[0], app);
    render_selection(
        f,
        columns[1],
        "Countries",
        &app.countries,
        &app.criteria.countries,
        app.country_cursor,
        app.filter_section == FilterSection::Countries,
    );
    render_selection(
        f,
        columns[2],
        "Products",
        &app.products,
        &app.criteria.products,
        app.product_cursor,
        app.filter_section == FilterSection::Products,
    );
}

fn render_dates(f: &mut Frame, area: Rect, app: &AppState) {
    let active = app.filter_section == FilterSection::Dates;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(" Reporting Period ");

    let field_line = |label: &str, value: chrono::NaiveDate, focused: bool| {
        let style = if focused && active {
            theme::selected()
        } else {
            theme::text()
        };
        Line::from(vec![
            Span::styled(format!("{label:<7}"), theme::muted()),
            Span::styled(value.format("%Y-%m-%d").to_string(), style),
        ])
    };

    let mut lines = vec![
        field_line("Start", app.criteria.start, app.date_field == DateField::Start),
        field_line("End", app.criteria.end, app.date_field == DateField::End),
        Line::from(""),
        Line::from(Span::styled("[↑/↓] switch bound", theme::muted())),
        Line::from(Span::styled("[h/l] ±1 day  [H/L] ±1 month", theme::muted())),
        Line::from(Span::styled("[r] reset all filters", theme::muted())),
    ];
    if let Some((min, max)) = app.dataset.date_span() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("data: {min} → {max}"),
            theme::muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_selection(
    f: &mut Frame,
    area: Rect,
    label: &str,
    options: &[String],
    selected: &std::collections::BTreeSet<String>,
    cursor: usize,
    active: bool,
) {
    let count = if selected.is_empty() {
        "all".to_string()
    } else {
        format!("{} selected", selected.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(format!(" {label} ({count}) "));

    // Keep the cursor visible in tall lists.
    let visible = area.height.saturating_sub(2) as usize;
    let skip = cursor.saturating_sub(visible.saturating_sub(1));

    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible.max(1))
        .map(|(i, name)| {
            let check = if selected.contains(name) { "[x]" } else { "[ ]" };
            let style = if active && i == cursor {
                theme::selected()
            } else if selected.contains(name) {
                theme::accent()
            } else {
                theme::text()
            };
            Line::from(Span::styled(format!("{check} {name}"), style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
