//! Application state types and enums.
//!
//! Responsibilities:
//! - Define popup identifiers (`PopupKey`) and keyboard focus (`Focus`).
//! - Define transient interaction state (date editing, mouse drags).
//! - Define screen layout constants.
//!
//! Does NOT handle:
//! - Does NOT handle state mutations (in App impl)
//! - Does NOT define the main App struct

use super::input::components::SingleLineInput;

/// Layout constants for UI components.
pub const HEADER_HEIGHT: u16 = 1;
pub const TOOLBAR_HEIGHT: u16 = 3;
pub const PAGINATOR_HEIGHT: u16 = 1;
pub const FOOTER_HEIGHT: u16 = 1;

/// Width of the row selection checkbox column.
pub const SELECT_COLUMN_WIDTH: u16 = 4;

/// Identifies one popup of the table screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PopupKey {
    /// Layout switches (resize, reorder) and the entry to the column list.
    Features,
    /// Column show/hide list.
    Columns,
    /// Filter menu of a column, by column index.
    Filter(usize),
}

impl PopupKey {
    /// Title drawn on the popup border.
    pub fn title(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::Columns => "Columns",
            Self::Filter(_) => "Filter",
        }
    }
}

/// Which widget receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Table,
    Search,
}

/// Bound of a date range being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    From,
    To,
}

impl DateBound {
    pub fn label(self) -> &'static str {
        match self {
            Self::From => "From",
            Self::To => "To",
        }
    }
}

/// In-progress edit of one bound of a date filter.
#[derive(Debug, Clone)]
pub struct DateEdit {
    pub column: usize,
    pub bound: DateBound,
    pub input: SingleLineInput,
}

/// Mouse drag started on a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// Dragging the resize handle; width follows the pointer.
    Resize {
        column: usize,
        start_x: u16,
        start_width: u16,
    },
    /// Header pressed while reordering is enabled; released on another
    /// header it moves the column, on the same header it sorts.
    Reorder { column: usize },
}
