//! Data layer — schema validation, CSV loading/cleaning, dataset cache.

pub mod cache;
pub mod loader;
pub mod schema;

pub use cache::DatasetCache;
pub use loader::{load, LoadError};
pub use schema::{ColumnMap, SchemaError, REQUIRED_COLUMNS};
