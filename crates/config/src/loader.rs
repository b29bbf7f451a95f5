//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges CLI values, environment
//!   variables and built-in defaults into `UiDefaults`.
//! - Enforce the `DOTENV_DISABLED` gate before touching `.env` files.
//!
//! Does NOT handle:
//! - Persisting configuration changes back to disk (see `persistence.rs`).
//! - Per-table layout state (see `persistence::state`).
//!
//! Invariants / Assumptions:
//! - Values set through `with_*` builder methods (CLI) win over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The resulting page size is always one of `PAGE_SIZE_OPTIONS`.

use std::path::PathBuf;

mod env;
mod error;

pub use env::env_var_or_none;
pub use error::ConfigError;

use crate::constants::{DEFAULT_LOG_DIR, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::types::ColorTheme;

/// Resolved startup defaults for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiDefaults {
    /// Rows per page when the table has no persisted page size.
    pub page_size: usize,
    /// Theme override; `None` keeps the persisted theme.
    pub theme: Option<ColorTheme>,
    /// Explicit path of the persisted-state file.
    pub config_path: Option<PathBuf>,
    /// Directory for rolling log files.
    pub log_dir: PathBuf,
}

impl Default for UiDefaults {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            theme: None,
            config_path: None,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

/// Builder that layers configuration sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    page_size: Option<usize>,
    theme: Option<ColorTheme>,
    config_path: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    cli_page_size: Option<usize>,
    cli_config_path: Option<PathBuf>,
    cli_log_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file from the working directory, if one exists.
    ///
    /// Skipped entirely when `DOTENV_DISABLED` is set to a truthy value.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn dotenv_disabled() -> bool {
        env_var_or_none("DOTENV_DISABLED")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false)
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        env::apply_env(&mut self)?;
        Ok(self)
    }

    /// Page size supplied on the command line.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.cli_page_size = Some(page_size);
        self
    }

    /// Config path supplied on the command line.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.cli_config_path = Some(path);
        self
    }

    /// Log directory supplied on the command line.
    pub fn with_log_dir(mut self, path: PathBuf) -> Self {
        self.cli_log_dir = Some(path);
        self
    }

    pub(crate) fn set_page_size(&mut self, page_size: Option<usize>) {
        self.page_size = page_size;
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_log_dir(&mut self, path: Option<PathBuf>) {
        self.log_dir = path;
    }

    /// Merge all sources into `UiDefaults`.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` when the CLI page size is not one of
    /// the offered options.
    pub fn build(self) -> Result<UiDefaults, ConfigError> {
        let page_size = match self.cli_page_size {
            Some(size) => validate_page_size("--page-size", size)?,
            None => self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        };

        Ok(UiDefaults {
            page_size,
            theme: self.theme,
            config_path: self.cli_config_path.or(self.config_path),
            log_dir: self
                .cli_log_dir
                .or(self.log_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
        })
    }
}

pub(crate) fn validate_page_size(var: &str, size: usize) -> Result<usize, ConfigError> {
    if PAGE_SIZE_OPTIONS.contains(&size) {
        Ok(size)
    } else {
        Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: format!("must be one of {:?} (got {})", PAGE_SIZE_OPTIONS, size),
        })
    }
}
