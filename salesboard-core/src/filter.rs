//! Filter engine — pure predicate application over an immutable dataset.

use crate::domain::{Dataset, FilterCriteria, SalesRecord};

/// A read-only subsequence of a dataset, in original record order.
///
/// An empty view is a valid result; downstream aggregation and export
/// degrade gracefully to zero/empty outputs.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    records: Vec<&'a SalesRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a SalesRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SalesRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Apply filter criteria to a dataset.
///
/// Pure: the same (dataset, criteria) pair always yields the same view.
pub fn apply<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> FilteredView<'a> {
    FilteredView {
        records: dataset
            .records()
            .iter()
            .filter(|r| criteria.matches(r))
            .collect(),
    }
}
