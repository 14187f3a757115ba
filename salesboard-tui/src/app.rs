//! Application state — single owner, main-thread only.
//!
//! Filter criteria live here; every mutation is followed by a fresh
//! `report::render` on the next frame. The dataset itself is immutable and
//! comes out of the process-scoped cache.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Months;
use serde::{Deserialize, Serialize};

use salesboard_core::report::{self, DashboardView};
use salesboard_core::{Dataset, DatasetCache, FilterCriteria};

use crate::config::DashboardConfig;

/// Which panel is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    #[default]
    Overview,
    Filters,
    Table,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Overview => 0,
            Panel::Filters => 1,
            Panel::Table => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Overview),
            1 => Some(Panel::Filters),
            2 => Some(Panel::Table),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Overview => "Overview",
            Panel::Filters => "Filters",
            Panel::Table => "Table",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 4).unwrap_or_default()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 3) % 4).unwrap_or_default()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which column of the filter panel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSection {
    Dates,
    Countries,
    Products,
}

/// Which bound of the reporting period is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

pub struct AppState {
    cache: DatasetCache,
    pub data_path: PathBuf,
    pub export_path: PathBuf,
    pub state_path: PathBuf,

    pub dataset: Arc<Dataset>,
    pub criteria: FilterCriteria,
    /// Short dataset fingerprint for the status bar (computed once per load).
    pub fingerprint: String,
    /// Distinct filter options, refreshed on (re)load.
    pub countries: Vec<String>,
    pub products: Vec<String>,

    pub active_panel: Panel,
    pub filter_section: FilterSection,
    pub date_field: DateField,
    pub country_cursor: usize,
    pub product_cursor: usize,
    pub table_offset: usize,

    pub running: bool,
    pub status: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(cfg: DashboardConfig, state_path: PathBuf) -> Result<Self> {
        let cache = DatasetCache::new();
        let dataset = cache
            .load(&cfg.data_path)
            .with_context(|| format!("loading {}", cfg.data_path.display()))?;

        let criteria = FilterCriteria::full_span(&dataset);
        let fingerprint = short_fingerprint(&dataset);
        let countries = dataset.countries();
        let products = dataset.products();

        Ok(Self {
            cache,
            data_path: cfg.data_path,
            export_path: cfg.export_path,
            state_path,
            dataset,
            criteria,
            fingerprint,
            countries,
            products,
            active_panel: Panel::Overview,
            filter_section: FilterSection::Dates,
            date_field: DateField::Start,
            country_cursor: 0,
            product_cursor: 0,
            table_offset: 0,
            running: true,
            status: None,
        })
    }

    /// Run the pure pipeline against the current criteria.
    pub fn view(&self) -> DashboardView<'_> {
        report::render(&self.dataset, &self.criteria)
    }

    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status = Some((message.into(), level));
    }

    /// Toggle the country under the cursor in/out of the selection.
    pub fn toggle_country(&mut self) {
        if let Some(name) = self.countries.get(self.country_cursor).cloned() {
            if !self.criteria.countries.remove(&name) {
                self.criteria.countries.insert(name);
            }
            self.table_offset = 0;
        }
    }

    /// Toggle the product under the cursor in/out of the selection.
    pub fn toggle_product(&mut self) {
        if let Some(name) = self.products.get(self.product_cursor).cloned() {
            if !self.criteria.products.remove(&name) {
                self.criteria.products.insert(name);
            }
            self.table_offset = 0;
        }
    }

    /// Reset to the default criteria: full span, no restrictions.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::full_span(&self.dataset);
        self.table_offset = 0;
        self.set_status("Filters reset", StatusLevel::Info);
    }

    /// Shift the focused date bound by whole days and/or calendar months,
    /// dragging the other bound along if the range would invert.
    pub fn shift_date(&mut self, days: i64, months: i32) {
        let field = match self.date_field {
            DateField::Start => &mut self.criteria.start,
            DateField::End => &mut self.criteria.end,
        };

        let mut shifted = *field + chrono::Duration::days(days);
        if months != 0 {
            let step = Months::new(months.unsigned_abs());
            shifted = if months > 0 {
                shifted.checked_add_months(step).unwrap_or(shifted)
            } else {
                shifted.checked_sub_months(step).unwrap_or(shifted)
            };
        }
        *field = shifted;

        if self.criteria.start > self.criteria.end {
            match self.date_field {
                DateField::Start => self.criteria.end = self.criteria.start,
                DateField::End => self.criteria.start = self.criteria.end,
            }
        }
        self.table_offset = 0;
    }

    pub fn move_cursor(&mut self, delta: isize) {
        match self.filter_section {
            FilterSection::Dates => {
                self.date_field = match self.date_field {
                    DateField::Start => DateField::End,
                    DateField::End => DateField::Start,
                };
            }
            FilterSection::Countries => {
                self.country_cursor = step(self.country_cursor, delta, self.countries.len());
            }
            FilterSection::Products => {
                self.product_cursor = step(self.product_cursor, delta, self.products.len());
            }
        }
    }

    pub fn scroll_table(&mut self, delta: isize) {
        let rows = self.view().filtered.len();
        self.table_offset = step(self.table_offset, delta, rows);
    }

    /// Export the current filtered view to the configured path.
    pub fn export(&mut self) {
        let (rows, result) = {
            let view = self.view();
            let rows = view.filtered.len();
            (
                rows,
                salesboard_core::export::write_csv(&view.filtered, &self.export_path),
            )
        };
        match result {
            Ok(()) => {
                let msg = format!("Exported {rows} rows to {}", self.export_path.display());
                self.set_status(msg, StatusLevel::Info);
            }
            Err(e) => self.set_status(format!("Export failed: {e}"), StatusLevel::Error),
        }
    }

    /// Invalidate the cache entry and re-read the source file.
    pub fn reload(&mut self) {
        self.cache.invalidate(&self.data_path);
        match self.cache.load(&self.data_path) {
            Ok(dataset) => {
                self.dataset = dataset;
                self.fingerprint = short_fingerprint(&self.dataset);
                self.countries = self.dataset.countries();
                self.products = self.dataset.products();
                self.sanitize_criteria();
                self.set_status(
                    format!("Reloaded {} rows", self.dataset.len()),
                    StatusLevel::Info,
                );
            }
            Err(e) => self.set_status(format!("Reload failed: {e}"), StatusLevel::Error),
        }
    }

    /// Clamp criteria to what the (possibly new) dataset actually contains:
    /// selections intersected with available values, cursors bounded.
    pub fn sanitize_criteria(&mut self) {
        self.criteria
            .countries
            .retain(|c| self.countries.binary_search(c).is_ok());
        self.criteria
            .products
            .retain(|p| self.products.binary_search(p).is_ok());
        self.country_cursor = self.country_cursor.min(self.countries.len().saturating_sub(1));
        self.product_cursor = self.product_cursor.min(self.products.len().saturating_sub(1));
        self.table_offset = 0;
    }
}

fn short_fingerprint(dataset: &Dataset) -> String {
    let mut hex = dataset.fingerprint();
    hex.truncate(8);
    hex
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current
        .saturating_add_signed(delta)
        .min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Date,Country,Product,Units_Sold,Unit_Price,Total_Sale,Sales_After_Discount";

    fn fixture_app() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("sales.csv");
        let mut file = std::fs::File::create(&data_path).unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "05/01/2024,US,Widget,10,$10.00,$100.00,$90.00").unwrap();
        writeln!(file, "20/01/2024,US,Gadget,5,$8.00,$40.00,$40.00").unwrap();
        writeln!(file, "01/02/2024,UK,Widget,2,$10.00,$20.00,$20.00").unwrap();
        file.sync_all().unwrap();

        let cfg = DashboardConfig {
            data_path,
            export_path: dir.path().join("filtered_sales_report.csv"),
        };
        let app = AppState::new(cfg, dir.path().join("state.json")).unwrap();
        (app, dir)
    }

    #[test]
    fn panel_cycle_wraps() {
        assert_eq!(Panel::Overview.next(), Panel::Filters);
        assert_eq!(Panel::Help.next(), Panel::Overview);
        assert_eq!(Panel::Overview.prev(), Panel::Help);
    }

    #[test]
    fn starts_with_full_span_and_all_rows() {
        let (app, _dir) = fixture_app();
        assert_eq!(app.view().filtered.len(), 3);
        assert_eq!(
            app.criteria.start,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert_eq!(app.countries, vec!["UK".to_string(), "US".to_string()]);
    }

    #[test]
    fn toggling_a_country_filters_the_view() {
        let (mut app, _dir) = fixture_app();
        app.filter_section = FilterSection::Countries;
        app.country_cursor = 1; // "US"
        app.toggle_country();
        assert_eq!(app.view().filtered.len(), 2);
        app.toggle_country();
        assert_eq!(app.view().filtered.len(), 3);
    }

    #[test]
    fn shifting_start_past_end_drags_end_along() {
        let (mut app, _dir) = fixture_app();
        app.date_field = DateField::Start;
        app.shift_date(0, 6);
        assert!(app.criteria.start <= app.criteria.end);
        assert_eq!(app.criteria.start, app.criteria.end);
    }

    #[test]
    fn export_writes_the_filtered_report() {
        let (mut app, _dir) = fixture_app();
        app.export();
        assert!(app.export_path.exists());
        let text = std::fs::read_to_string(&app.export_path).unwrap();
        assert_eq!(text.lines().count(), 4); // header + 3 rows
        assert!(matches!(app.status, Some((_, StatusLevel::Info))));
    }

    #[test]
    fn persisted_state_round_trips_through_state_path() {
        use crate::persistence;

        let (mut app, _dir) = fixture_app();
        app.active_panel = Panel::Table;
        persistence::save(&app.state_path, &persistence::extract(&app)).unwrap();

        app.active_panel = Panel::Overview;
        let restored = persistence::load(&app.state_path);
        persistence::apply(&mut app, restored);
        assert_eq!(app.active_panel, Panel::Table);
    }

    #[test]
    fn sanitize_drops_selections_missing_from_dataset() {
        let (mut app, _dir) = fixture_app();
        app.criteria.countries.insert("FR".to_string());
        app.criteria.countries.insert("US".to_string());
        app.sanitize_criteria();
        assert_eq!(app.criteria.countries.len(), 1);
        assert!(app.criteria.countries.contains("US"));
    }
}
