//! Overview panel — KPI summary row, country bar chart, product
//! contribution, and the monthly net revenue trend.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, BarChart, Block, Borders, Chart, Dataset as ChartData, GraphType, Paragraph};
use ratatui::Frame;

use salesboard_core::format;
use salesboard_core::report::DashboardView;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, view: &DashboardView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Percentage(50),
            Constraint::Min(8),
        ])
        .split(area);

    render_kpis(f, rows[0], view);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    render_country_chart(f, charts[0], view);
    render_product_contribution(f, charts[1], view);

    render_monthly_trend(f, rows[2], view);
}

/// Three executive metrics: gross revenue, net revenue, units sold.
fn render_kpis(f: &mut Frame, area: Rect, view: &DashboardView) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let summary = &view.summary;
    let kpis = [
        ("Gross Revenue", format::currency(summary.gross_revenue)),
        ("Net Revenue", format::currency(summary.net_revenue)),
        ("Units Sold", format::units(summary.total_units)),
    ];

    for (card, (label, value)) in cards.iter().zip(kpis) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted())
            .title(format!(" {label} "));
        let text = Paragraph::new(Line::from(Span::styled(
            value,
            theme::positive().add_modifier(Modifier::BOLD),
        )))
        .block(block)
        .centered();
        f.render_widget(text, *card);
    }
}

/// Net revenue by country as a bar chart.
fn render_country_chart(f: &mut Frame, area: Rect, view: &DashboardView) {
    let data: Vec<(&str, u64)> = view
        .summary
        .by_country
        .iter()
        .map(|(country, net)| (country.as_str(), net.max(0.0).round() as u64))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Net Revenue by Country ");

    if data.is_empty() {
        f.render_widget(empty_notice(block), area);
        return;
    }

    let bar_width = ((area.width.saturating_sub(2)) / (data.len() as u16).max(1))
        .saturating_sub(1)
        .clamp(3, 12);
    let chart = BarChart::default()
        .block(block)
        .data(&data)
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(theme::accent())
        .value_style(theme::text().add_modifier(Modifier::BOLD))
        .label_style(theme::muted());
    f.render_widget(chart, area);
}

/// Product share of net revenue — amount, percentage, and a proportional bar.
fn render_product_contribution(f: &mut Frame, area: Rect, view: &DashboardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Product Contribution ");

    let summary = &view.summary;
    if summary.by_product.is_empty() {
        f.render_widget(empty_notice(block), area);
        return;
    }

    let total: f64 = summary.net_revenue.max(f64::MIN_POSITIVE);
    let name_width = summary
        .by_product
        .keys()
        .map(|p| p.len())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = Vec::new();
    for (product, net) in &summary.by_product {
        let share = (net / total).clamp(0.0, 1.0);
        let bar_cells = (share * 24.0).round() as usize;
        lines.push(Line::from(vec![
            Span::styled(format!("{product:<name_width$}  "), theme::text()),
            Span::styled(format!("{:>10}  ", format::currency(*net)), theme::positive()),
            Span::styled(format!("{:>5.1}%  ", share * 100.0), theme::muted()),
            Span::styled("█".repeat(bar_cells), theme::neutral()),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Monthly net revenue line chart.
fn render_monthly_trend(f: &mut Frame, area: Rect, view: &DashboardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Monthly Net Revenue Trend ");

    let by_month = &view.summary.by_month;
    if by_month.is_empty() {
        f.render_widget(empty_notice(block), area);
        return;
    }

    let points: Vec<(f64, f64)> = by_month
        .values()
        .enumerate()
        .map(|(i, net)| (i as f64, *net))
        .collect();
    let max_y = points.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max);
    let months: Vec<&String> = by_month.keys().collect();

    let x_labels: Vec<Line> = if months.len() == 1 {
        vec![Line::from(months[0].as_str())]
    } else {
        vec![
            Line::from(months[0].as_str()),
            Line::from(months[months.len() - 1].as_str()),
        ]
    };
    let y_labels = vec![
        Line::from("$0"),
        Line::from(format::currency(max_y / 2.0)),
        Line::from(format::currency(max_y)),
    ];

    let datasets = vec![ChartData::default()
        .name("net revenue")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme::accent())
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, (points.len().saturating_sub(1)).max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, (max_y * 1.1).max(1.0)])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

fn empty_notice(block: Block) -> Paragraph {
    Paragraph::new(Line::from(Span::styled(
        "no records match the current filters",
        theme::muted(),
    )))
    .block(block)
    .centered()
}
