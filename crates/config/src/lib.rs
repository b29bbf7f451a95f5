//! Configuration management for datagrid.
//!
//! This crate provides the defaults, environment loading, persisted table
//! layouts and color themes shared by the datagrid terminal UI.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, UiDefaults, env_var_or_none};
pub use persistence::{ConfigManager, PersistedState, TableLayout};
pub use types::{ColorTheme, Theme};
