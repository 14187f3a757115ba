//! Loader/cleaner — CSV ingestion with normalization and strict row drops.
//!
//! Cleaning rules:
//! - Currency fields: strip `$` and thousands separators, parse as `f64`
//! - Dates: day-first convention ("05/03/2024" = 5 March 2024); ISO accepted
//! - Any row with a missing or unparseable field is dropped whole, never
//!   repaired; short/ragged rows count as dropped too
//! - The drop extends to every column in the file: an empty cell in an
//!   extra, unmapped column still discards the row
//!
//! Unopenable files and missing required columns are fatal — there is no
//! partial or degraded load.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::StringRecord;
use thiserror::Error;

use crate::data::schema::{ColumnMap, SchemaError};
use crate::domain::{Dataset, SalesRecord};

/// Accepted date formats. ISO first (unambiguous, and what the exporter
/// writes), then day-first variants.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d/%m/%y"];

/// Errors from the loading layer. All of these are unrecoverable
/// configuration errors; row-level parse failures are not errors at all,
/// they drop the row.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Load and clean a sales dataset from a delimited file.
pub fn load(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let columns = ColumnMap::resolve(reader.headers()?)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.records() {
        let row = row?;
        match parse_row(&row, &columns) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    Ok(Dataset::new(records, dropped))
}

/// Parse one raw row into a [`SalesRecord`]. `None` means the row is dropped.
fn parse_row(row: &StringRecord, columns: &ColumnMap) -> Option<SalesRecord> {
    // Whole-row completeness check first: an empty cell anywhere, even in a
    // column the schema does not map, discards the row.
    if row.iter().any(|cell| cell.trim().is_empty()) {
        return None;
    }
    Some(SalesRecord {
        date: parse_date(row.get(columns.date)?)?,
        country: parse_text(row.get(columns.country)?)?,
        product: parse_text(row.get(columns.product)?)?,
        units_sold: parse_number(row.get(columns.units_sold)?)?,
        unit_price: parse_currency(row.get(columns.unit_price)?)?,
        total_sale: parse_currency(row.get(columns.total_sale)?)?,
        sales_after_discount: parse_currency(row.get(columns.sales_after_discount)?)?,
    })
}

/// Strip currency decoration (`$`, `,`) and parse as a decimal number.
fn parse_currency(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Plain numeric field (thousands separators tolerated).
fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Day-first date parsing; ISO dates pass through unambiguously.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Non-empty trimmed text; an empty cell is a missing field.
fn parse_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
