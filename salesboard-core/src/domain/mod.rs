//! Domain types — sales records, datasets, filter criteria.

pub mod criteria;
pub mod record;

pub use criteria::FilterCriteria;
pub use record::{Dataset, SalesRecord};
