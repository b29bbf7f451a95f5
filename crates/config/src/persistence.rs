//! Configuration persistence for user preferences.
//!
//! Responsibilities:
//! - Resolve the standard configuration file path.
//! - Read and write user preferences (`PersistedState`) to disk.
//! - Back up corrupt config files before they are overwritten.
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader.rs`).
//! - Applying layouts to a live table (done by the TUI crate).
//!
//! Invariants:
//! - Writes are atomic (temporary file + rename).
//! - A missing or corrupt file never blocks startup; defaults are used instead.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

mod path;
mod state;

pub use path::default_config_path;
pub use state::{ConfigFileError, PersistedState, TableLayout};

pub(crate) use state::read_config_file;

/// Creates a backup of a corrupt config file before it is overwritten.
///
/// The original file is renamed to `<name>.corrupt.<timestamp>` so its
/// contents can be recovered by hand.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));
    std::fs::rename(path, &backup_path)?;
    Ok(backup_path)
}

/// Manages loading and saving user configuration to disk.
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
    state: PersistedState,
}

impl ConfigManager {
    /// Creates a manager for the platform-standard config path.
    ///
    /// # Errors
    /// Returns an error if the project directories cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self::new_with_path(default_config_path()?))
    }

    /// Creates a manager for an explicit path, reading any existing state.
    ///
    /// A corrupt file is backed up and replaced by defaults.
    pub fn new_with_path(config_path: PathBuf) -> Self {
        let state = match read_config_file(&config_path) {
            Ok(state) => state,
            Err(e) => {
                let is_not_found = matches!(
                    &e,
                    ConfigFileError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
                );

                if is_not_found {
                    tracing::debug!(
                        path = %config_path.display(),
                        "Config file not found, using defaults"
                    );
                } else {
                    match create_corrupt_backup(&config_path) {
                        Ok(backup_path) => {
                            tracing::warn!(
                                path = %config_path.display(),
                                backup_path = %backup_path.display(),
                                error = %e,
                                "Config file is corrupt, backed up and using defaults"
                            );
                        }
                        Err(backup_err) => {
                            tracing::error!(
                                path = %config_path.display(),
                                error = %e,
                                backup_error = %backup_err,
                                "Config file is corrupt and backup failed, using defaults"
                            );
                        }
                    }
                }
                PersistedState::default()
            }
        };

        Self { config_path, state }
    }

    /// Returns the path to the configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the state read at construction (or last saved).
    pub fn load(&self) -> PersistedState {
        self.state.clone()
    }

    /// Saves persisted state to disk.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&mut self, state: &PersistedState) -> Result<()> {
        self.state = state.clone();
        self.atomic_save()
    }

    fn atomic_save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let temp_path = self.config_path.with_extension("tmp");
        let content = serde_json::to_string_pretty(&self.state)?;
        std::fs::write(&temp_path, content).context("Failed to write temporary config file")?;

        std::fs::rename(&temp_path, &self.config_path)
            .context("Failed to rename temporary config file")?;

        tracing::debug!(
            path = %self.config_path.display(),
            "Config saved successfully"
        );

        Ok(())
    }
}
