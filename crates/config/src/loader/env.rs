//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `DATAGRID_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//! - Building the final `UiDefaults` (see `ConfigLoader::build`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue.

use std::path::PathBuf;
use std::str::FromStr;

use super::ConfigLoader;
use super::error::ConfigError;
use super::validate_page_size;
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(size) = env_var_or_none("DATAGRID_PAGE_SIZE") {
        let value: usize = size.parse().map_err(|_| ConfigError::InvalidValue {
            var: "DATAGRID_PAGE_SIZE".to_string(),
            message: "must be a positive integer".to_string(),
        })?;
        loader.set_page_size(Some(validate_page_size("DATAGRID_PAGE_SIZE", value)?));
    }
    if let Some(theme) = env_var_or_none("DATAGRID_THEME") {
        let theme = ColorTheme::from_str(&theme).map_err(|message| ConfigError::InvalidValue {
            var: "DATAGRID_THEME".to_string(),
            message,
        })?;
        loader.set_theme(Some(theme));
    }
    if let Some(path) = env_var_or_none("DATAGRID_CONFIG_PATH") {
        loader.set_config_path(Some(PathBuf::from(path)));
    }
    if let Some(path) = env_var_or_none("DATAGRID_LOG_DIR") {
        loader.set_log_dir(Some(PathBuf::from(path)));
    }
    Ok(())
}
