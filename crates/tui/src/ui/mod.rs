//! UI rendering modules for the TUI.
//!
//! Each renderer draws one region from `App` state and records what it
//! drew into the frame's `LayoutMap`.

pub mod chrome;
pub mod paginator;
pub mod popups;
pub mod table;
pub mod theme;
pub mod toolbar;

/// Checkbox text for a boolean flag.
pub(crate) fn checkbox(checked: bool) -> &'static str {
    if checked { "[x] " } else { "[ ] " }
}
