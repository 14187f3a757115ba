//! Table panel — the filtered transaction detail, scrollable.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use salesboard_core::report::DashboardView;

use crate::app::AppState;
use crate::theme;

const COLUMNS: [&str; 7] = [
    "Date",
    "Country",
    "Product",
    "Units",
    "Unit Price",
    "Total Sale",
    "Net",
];

pub fn render(f: &mut Frame, area: Rect, app: &AppState, view: &DashboardView) {
    let total = view.filtered.len();
    let visible = area.height.saturating_sub(3) as usize;
    let offset = app.table_offset.min(total.saturating_sub(1));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(
            " Transactions ({total} rows, from {}) ",
            offset.saturating_add(1).min(total.max(1))
        ));

    let header = Row::new(
        COLUMNS
            .iter()
            .map(|h| Cell::from(*h).style(theme::header())),
    )
    .height(1);

    let rows = view
        .filtered
        .iter()
        .skip(offset)
        .take(visible.max(1))
        .map(|r| {
            Row::new(vec![
                Cell::from(r.date.format("%Y-%m-%d").to_string()),
                Cell::from(r.country.clone()),
                Cell::from(r.product.clone()),
                Cell::from(format!("{:.0}", r.units_sold)),
                Cell::from(format!("{:.2}", r.unit_price)),
                Cell::from(format!("{:.2}", r.total_sale)),
                Cell::from(format!("{:.2}", r.sales_after_discount))
                    .style(theme::positive().add_modifier(Modifier::BOLD)),
            ])
            .style(theme::text())
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(8),
            Constraint::Min(10),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(2);

    f.render_widget(table, area);
}
