//! FilterCriteria — the value object behind every filter interaction.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{Dataset, SalesRecord};

/// User filter selections: an inclusive date range plus optional
/// country/product restrictions (empty set = no restriction).
///
/// Constructed fresh from user input on every interaction. Serde derives let
/// the TUI persist the last session's criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub countries: BTreeSet<String>,
    pub products: BTreeSet<String>,
}

/// Degenerate single-day span for an empty dataset, so `full_span` stays a
/// pure function of its input.
const EMPTY_SPAN_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
    Some(date) => date,
    None => unreachable!(),
};

impl FilterCriteria {
    /// Default criteria: the dataset's full date span, no restrictions.
    ///
    /// An empty dataset gets a fixed degenerate single-day span.
    pub fn full_span(dataset: &Dataset) -> Self {
        let (start, end) = dataset
            .date_span()
            .unwrap_or((EMPTY_SPAN_DATE, EMPTY_SPAN_DATE));
        Self {
            start,
            end,
            countries: BTreeSet::new(),
            products: BTreeSet::new(),
        }
    }

    /// Conjunction of the date, country, and product predicates.
    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.date_in_range(record.date)
            && Self::passes(&self.countries, &record.country)
            && Self::passes(&self.products, &record.product)
    }

    fn date_in_range(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    fn passes(selected: &BTreeSet<String>, value: &str) -> bool {
        selected.is_empty() || selected.contains(value)
    }
}
