//! State types and serialization for configuration persistence.
//!
//! Responsibilities:
//! - Define persisted state types (`PersistedState`, `TableLayout`).
//! - Define config file errors (`ConfigFileError`).
//! - Read and parse config files.
//!
//! Does NOT handle:
//! - Writing config files (handled by `ConfigManager`).
//!
//! Invariants:
//! - Layouts are keyed by table title.
//! - Unknown or missing fields fall back to their defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::ColorTheme;

/// Column arrangement and switches remembered for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    /// Column ids in display order. Ids missing here keep their declared position.
    pub column_order: Vec<String>,
    /// Ids of columns the user hid.
    pub hidden_columns: Vec<String>,
    /// Column widths changed by resizing.
    pub column_widths: BTreeMap<String, u16>,
    /// Rows per page chosen in the selector.
    pub page_size: Option<usize>,
    /// Whether column resizing was switched on.
    pub resizing_enabled: bool,
    /// Whether column reordering was switched on.
    pub reordering_enabled: bool,
}

/// User preferences that persist across application runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// Persisted UI theme selection.
    pub selected_theme: ColorTheme,
    /// Layouts keyed by table title.
    pub tables: BTreeMap<String, TableLayout>,
}

impl PersistedState {
    /// Layout stored for `title`, if any.
    pub fn layout_for(&self, title: &str) -> Option<&TableLayout> {
        self.tables.get(title)
    }

    /// Replace the layout stored for `title`.
    pub fn set_layout(&mut self, title: impl Into<String>, layout: TableLayout) {
        self.tables.insert(title.into(), layout);
    }
}

/// Errors that can occur when reading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the config file from disk.
pub(crate) fn read_config_file(path: &Path) -> Result<PersistedState, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
