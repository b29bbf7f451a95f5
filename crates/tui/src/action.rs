//! Action protocol for the TUI event loop.
//!
//! Terminal events arrive as `Input`, `Mouse` and `Resize` actions; input
//! handlers translate them into the table and popup actions below, which
//! `App::update` applies.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::app::PopupKey;

/// Unified action type flowing from input handlers to the app state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// Periodic UI tick
    Tick,
    /// Terminal resized to (width, height)
    Resize(u16, u16),

    // Input
    /// Raw keyboard input event
    Input(KeyEvent),
    /// Raw mouse input event
    Mouse(MouseEvent),

    // Rows
    /// Move the row cursor down
    NavigateDown,
    /// Move the row cursor up
    NavigateUp,
    /// Move the column cursor left
    NavigateLeft,
    /// Move the column cursor right
    NavigateRight,
    /// Toggle selection of a dataset row
    ToggleRowSelected(usize),
    /// Toggle selection of the whole page
    TogglePageSelected,

    // Pagination
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    /// Jump to a one-based page number
    GoToPage(usize),
    /// Step through the page size options
    CyclePageSize { forward: bool },

    // Columns
    /// Advance the sort cycle of a column
    CycleSort(usize),
    /// Move a column to the position held by another
    MoveColumn { column: usize, target: usize },
    /// Grow or shrink a column
    ResizeColumn { column: usize, delta: i32 },

    // Popups
    /// Open or close a popup
    TogglePopup(PopupKey),
    /// Close the popup that has keyboard focus
    CloseFocusedPopup,
    /// Activate an option row inside a popup
    ActivatePopupOption { key: PopupKey, index: usize },

    // Search
    /// Give keyboard focus to the search box
    FocusSearch,

    // Appearance
    /// Switch to the next color theme
    CycleTheme,
}
