//! SalesRecord and Dataset — the fundamental reporting units.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cleaned row of the sales dataset.
///
/// After cleaning every field is present and parsed; currency decoration
/// (`$`, thousands separators) is already stripped. Units are carried as
/// `f64` and truncated toward zero only at presentation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub country: String,
    pub product: String,
    pub units_sold: f64,
    pub unit_price: f64,
    pub total_sale: f64,
    pub sales_after_discount: f64,
}

impl SalesRecord {
    /// Calendar-month label for trend grouping, e.g. `"2024-03"`.
    ///
    /// Lexicographic order on these labels is chronological order.
    pub fn month_label(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// An ordered, immutable sequence of cleaned sales records.
///
/// The loader is the sole writer; downstream components only ever receive
/// borrowed views. `dropped_rows` counts rows discarded during cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<SalesRecord>,
    dropped_rows: usize,
}

impl Dataset {
    pub fn new(records: Vec<SalesRecord>, dropped_rows: usize) -> Self {
        Self {
            records,
            dropped_rows,
        }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows discarded by the all-or-nothing cleaning filter.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Min/max record date, or `None` for an empty dataset.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }

    /// Distinct countries, sorted. Feeds the country multiselect.
    pub fn countries(&self) -> Vec<String> {
        Self::distinct(self.records.iter().map(|r| r.country.as_str()))
    }

    /// Distinct products, sorted. Feeds the product multiselect.
    pub fn products(&self) -> Vec<String> {
        Self::distinct(self.records.iter().map(|r| r.product.as_str()))
    }

    /// BLAKE3 fingerprint over the serialized rows.
    ///
    /// Identifies the loaded dataset in the status bar and `check` output;
    /// two loads of the same well-formed source produce the same fingerprint.
    pub fn fingerprint(&self) -> String {
        let bytes = serde_json::to_vec(&self.records).unwrap_or_default();
        blake3::hash(&bytes).to_hex().to_string()
    }

    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut out: Vec<String> = values.map(str::to_string).collect();
        out.sort();
        out.dedup();
        out
    }
}
