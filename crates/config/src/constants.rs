//! Centralized constants for the datagrid workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Pagination Defaults
// =============================================================================

/// Page sizes offered by the "items per page" selector.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 15];

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Maximum number of page buttons shown in the paginator window.
pub const MAX_PAGES_TO_SHOW: usize = 5;

// =============================================================================
// Column Defaults
// =============================================================================

/// Width (in terminal cells) for columns that do not declare one.
pub const DEFAULT_COLUMN_WIDTH: u16 = 16;

/// Smallest width a column can be resized to.
pub const MIN_COLUMN_WIDTH: u16 = 4;

/// Largest width a column can be resized to.
pub const MAX_COLUMN_WIDTH: u16 = 80;

/// Width change applied by one keyboard resize step.
pub const RESIZE_STEP: u16 = 2;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Default directory for log files.
pub const DEFAULT_LOG_DIR: &str = "logs";
