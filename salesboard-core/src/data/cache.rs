//! Process-scoped dataset cache keyed by source identity.
//!
//! The cleaned dataset is expensive enough to memoize but must never go
//! stale: each entry carries a [`SourceStamp`] (file length + mtime) and is
//! re-read when the stamp changes. The cache is an explicit instance rather
//! than a global so tests can construct independent ones. The interior mutex
//! also guarantees the one-time construction is not duplicated under
//! concurrent first access.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::SystemTime;

use super::loader::{self, LoadError};
use crate::domain::Dataset;

/// Identity of a source file at the time it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SourceStamp {
    len: u64,
    modified: SystemTime,
}

impl SourceStamp {
    fn probe(path: &Path) -> std::io::Result<Self> {
        let meta = std::fs::metadata(path)?;
        Ok(Self {
            len: meta.len(),
            modified: meta.modified()?,
        })
    }
}

struct Entry {
    stamp: SourceStamp,
    dataset: Arc<Dataset>,
}

/// Memoizing loader front-end. One instance per process is typical.
#[derive(Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, Entry>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dataset, reusing the cached copy while the source file is
    /// unchanged. Holding the lock across the read serializes concurrent
    /// first access to the same path.
    pub fn load(&self, path: &Path) -> Result<Arc<Dataset>, LoadError> {
        let stamp = SourceStamp::probe(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = entries.get(path) {
            if entry.stamp == stamp {
                return Ok(Arc::clone(&entry.dataset));
            }
        }

        let dataset = Arc::new(loader::load(path)?);
        entries.insert(
            path.to_path_buf(),
            Entry {
                stamp,
                dataset: Arc::clone(&dataset),
            },
        );
        Ok(dataset)
    }

    /// Drop the cached entry for one source, forcing a re-read on next load.
    pub fn invalidate(&self, path: &Path) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(path);
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.clear();
    }
}
