//! The pure render pipeline: (dataset, criteria) → dashboard view model.
//!
//! Presentation layers call [`render`] on every interaction and draw from the
//! result; nothing in here holds state between calls.

use crate::aggregate::{self, AggregateSummary};
use crate::domain::{Dataset, FilterCriteria};
use crate::filter::{self, FilteredView};

/// Everything one render cycle needs: the filtered records for the detail
/// table and export, plus the aggregate summary for metrics and charts.
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    pub filtered: FilteredView<'a>,
    pub summary: AggregateSummary,
}

/// Run the filter → aggregate pipeline.
pub fn render<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> DashboardView<'a> {
    let filtered = filter::apply(dataset, criteria);
    let summary = aggregate::summarize(&filtered);
    DashboardView { filtered, summary }
}
