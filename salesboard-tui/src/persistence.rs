//! Dashboard state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use salesboard_core::FilterCriteria;

use crate::app::{AppState, Panel};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    pub criteria: Option<FilterCriteria>,
    pub active_panel: Panel,
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from the app.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        criteria: Some(app.criteria.clone()),
        active_panel: app.active_panel,
    }
}

/// Apply persisted state, validating criteria against the loaded dataset:
/// stale country/product selections are dropped and dates are kept only if
/// they still overlap the dataset's span.
pub fn apply(app: &mut AppState, persisted: PersistedState) {
    app.active_panel = persisted.active_panel;

    if let Some(criteria) = persisted.criteria {
        if let Some((min, max)) = app.dataset.date_span() {
            if criteria.start <= max && criteria.end >= min {
                app.criteria = criteria;
                app.criteria.start = app.criteria.start.max(min);
                app.criteria.end = app.criteria.end.min(max);
                app.sanitize_criteria();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let state = PersistedState {
            criteria: Some(FilterCriteria {
                start: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end: chrono::NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
                countries: BTreeSet::from(["US".to_string()]),
                products: BTreeSet::new(),
            }),
            active_panel: Panel::Table,
        };
        save(&path, &state).unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.active_panel, Panel::Table);
        assert_eq!(loaded.criteria, state.criteria);
    }

    #[test]
    fn corrupt_state_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.active_panel, Panel::Overview);
        assert!(loaded.criteria.is_none());
    }
}
