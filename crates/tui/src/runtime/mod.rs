//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Configuration loading and persistence
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `datagrid_tui::app` and `datagrid_tui::ui`).
//! - Table semantics (see `datagrid_tui::table`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.

pub mod config;
pub mod terminal;
