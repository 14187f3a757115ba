//! Dashboard configuration — `salesboard.toml` plus CLI override.
//!
//! Resolution order: built-in defaults, then `salesboard.toml` in the working
//! directory (if present), then an optional positional argument overriding the
//! data path.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "salesboard.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Source CSV with the sales dataset.
    pub data_path: PathBuf,
    /// Where the export keybinding writes the filtered report.
    pub export_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/sales.csv"),
            export_path: PathBuf::from(salesboard_core::export::EXPORT_FILE_NAME),
        }
    }
}

/// Load config for this invocation: file (if any) + CLI data-path override.
pub fn resolve() -> Result<DashboardConfig> {
    let mut cfg = load_file(Path::new(CONFIG_FILE))?;
    if let Some(path) = std::env::args().nth(1) {
        cfg.data_path = PathBuf::from(path);
    }
    Ok(cfg)
}

/// Read a config file; a missing file yields the defaults, a malformed one
/// is an error (misconfiguration should not silently fall back).
pub fn load_file(path: &Path) -> Result<DashboardConfig> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(DashboardConfig::default()),
        Err(e) => Err(e).with_context(|| format!("reading config {}", path.display())),
    }
}
