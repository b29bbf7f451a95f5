//! Application state and rendering.
//!
//! This module contains the main application state, input handling,
//! and rendering logic for the table screen.
//!
//! The module is organized into submodules:
//! - `state`: Core state types (PopupKey, Focus, drags, layout constants)
//! - `layout`: Hit map recorded by the last frame
//! - `actions`: Action handling
//! - `input`: Keyboard input handlers
//! - `mouse`: Mouse event handling
//! - `popups`: Popup contents and option activation
//! - `render`: Rendering logic

pub mod input;
pub mod layout;
pub mod state;

mod actions;
mod mouse;
mod popups;
mod render;

pub use layout::{Control, HeaderHit, LayoutMap, PagerButton};
pub use popups::{PopupOption, PopupRow};
pub use state::{
    DateBound, DateEdit, DragState, FOOTER_HEIGHT, Focus, HEADER_HEIGHT, PAGINATOR_HEIGHT,
    PopupKey, SELECT_COLUMN_WIDTH, TOOLBAR_HEIGHT,
};

use datagrid_config::{ColorTheme, TableLayout, Theme};
use ratatui::layout::Rect;

use crate::app::input::components::SingleLineInput;
use crate::popup::{PointerSubscription, PopupError, PopupManager};
use crate::table::TableState;

/// Main application state.
pub struct App {
    pub table: TableState,
    pub popups: PopupManager<PopupKey>,
    pub focus: Focus,
    pub search_input: SingleLineInput,
    /// Row cursor, as a position within the current page.
    pub cursor_row: usize,
    /// Column cursor, as a position within the visible columns.
    pub cursor_column: usize,
    /// First visible column position drawn at the left edge.
    pub column_offset: usize,
    /// Option cursor inside the focused popup.
    pub popup_cursor: usize,
    /// Popup that most recently opened; receives popup keys.
    pub active_popup: Option<PopupKey>,
    pub date_edit: Option<DateEdit>,
    pub drag: Option<DragState>,
    pub color_theme: ColorTheme,
    pub theme: Theme,
    /// One-line message shown in the footer.
    pub status: Option<String>,
    /// Terminal area of the last frame.
    pub last_area: Rect,
    /// Clickable regions of the last frame.
    pub layout: LayoutMap,
}

impl App {
    /// Build the app for a table.
    ///
    /// Popup keys are fixed here: `Features`, `Columns` and one `Filter`
    /// key per column that declares a filter.
    pub fn new(table: TableState, color_theme: ColorTheme) -> Result<Self, PopupError> {
        let filter_keys: Vec<PopupKey> = table
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, def)| def.filter.is_some())
            .map(|(column, _)| PopupKey::Filter(column))
            .collect();

        let keys = [PopupKey::Features, PopupKey::Columns]
            .into_iter()
            .chain(filter_keys);
        let popups = PopupManager::new(keys, PointerSubscription::new())?;

        Ok(Self {
            table,
            popups,
            focus: Focus::Table,
            search_input: SingleLineInput::with_placeholder("Search all columns..."),
            cursor_row: 0,
            cursor_column: 0,
            column_offset: 0,
            popup_cursor: 0,
            active_popup: None,
            date_edit: None,
            drag: None,
            color_theme,
            theme: Theme::from_color_theme(color_theme),
            status: None,
            last_area: Rect::default(),
            layout: LayoutMap::default(),
        })
    }

    /// Dataset column under the column cursor.
    pub fn cursor_column_index(&self) -> Option<usize> {
        self.table
            .layout()
            .visible_order()
            .get(self.cursor_column)
            .copied()
    }

    /// Dataset row under the row cursor.
    pub fn cursor_row_index(&self) -> Option<usize> {
        self.table.page_rows().get(self.cursor_row).copied()
    }

    /// Keep both cursors on existing rows and columns.
    pub fn clamp_cursors(&mut self) {
        let rows = self.table.page_rows().len();
        self.cursor_row = self.cursor_row.min(rows.saturating_sub(1));
        let columns = self.table.layout().visible_order().len();
        self.cursor_column = self.cursor_column.min(columns.saturating_sub(1));
        self.column_offset = self.column_offset.min(self.cursor_column);
    }

    /// Point the column cursor at `column` if it is visible.
    pub fn focus_column(&mut self, column: usize) {
        if let Some(position) = self
            .table
            .layout()
            .visible_order()
            .iter()
            .position(|&c| c == column)
        {
            self.cursor_column = position;
        }
    }

    /// Popup that receives keyboard input: the most recently opened one if
    /// still open, otherwise the last open popup.
    pub fn focused_popup(&self) -> Option<PopupKey> {
        match self.active_popup {
            Some(key) if self.popups.is_open(key) => Some(key),
            _ => self.popups.open_keys().last().copied(),
        }
    }

    /// Filter column used by the toolbar's Filters button: the cursor
    /// column when it has a filter, otherwise the first filter column.
    pub fn default_filter_column(&self) -> Option<usize> {
        let has_filter = |column: usize| self.table.filter_kind(column).is_some();
        self.cursor_column_index()
            .filter(|&column| has_filter(column))
            .or_else(|| {
                self.table
                    .layout()
                    .order()
                    .iter()
                    .copied()
                    .find(|&column| has_filter(column))
            })
    }

    /// Re-run the global search from the search box.
    pub fn apply_search(&mut self) {
        let query = self.search_input.value().to_string();
        self.table.set_global_filter(&query);
        self.clamp_cursors();
    }

    pub fn set_color_theme(&mut self, color_theme: ColorTheme) {
        self.color_theme = color_theme;
        self.theme = Theme::from_color_theme(color_theme);
    }

    /// Layout snapshot to persist for this table.
    pub fn persisted_layout(&self) -> TableLayout {
        self.table.export_layout()
    }
}
