//! SalesBoard Core — the sales reporting pipeline.
//!
//! A linear pipeline over a tabular sales dataset:
//! - Domain types (records, datasets, filter criteria)
//! - Loader/cleaner with currency and day-first date normalization
//! - Process-scoped dataset cache keyed by source identity
//! - Filter engine (date range + country/product membership)
//! - Aggregator (scalar KPIs + grouped net-revenue totals)
//! - CSV exporter that round-trips through the loader
//!
//! The presentation layers (TUI, CLI) call [`report::render`] on every
//! interaction; the core itself has no event loop.

pub mod aggregate;
pub mod data;
pub mod domain;
pub mod export;
pub mod filter;
pub mod format;
pub mod report;

pub use aggregate::{summarize, AggregateSummary};
pub use data::cache::DatasetCache;
pub use data::loader::{load, LoadError};
pub use domain::{Dataset, FilterCriteria, SalesRecord};
pub use filter::{apply, FilteredView};
pub use report::{render, DashboardView};
