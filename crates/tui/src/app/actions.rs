//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Keep cursors valid after every table change
//!
//! Non-responsibilities:
//! - Does NOT create Actions (handled by input handlers)
//! - Does NOT persist state (handled by the runtime)

use crate::action::Action;
use crate::app::App;
use crate::app::state::Focus;

impl App {
    /// Pure state mutation based on Action.
    ///
    /// Raw `Input` and `Mouse` actions are translated first; `Quit` is
    /// left to the event loop.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit | Action::Tick | Action::Resize(..) => {}
            Action::Input(key) => {
                if let Some(next) = self.handle_input(key) {
                    self.update(next);
                }
            }
            Action::Mouse(mouse) => {
                if let Some(next) = self.handle_mouse(mouse) {
                    self.update(next);
                }
            }
            Action::NavigateDown => match self.focused_popup() {
                Some(popup) => self.move_popup_cursor(popup, true),
                None => {
                    let rows = self.table.page_rows().len();
                    if self.cursor_row + 1 < rows {
                        self.cursor_row += 1;
                    }
                }
            },
            Action::NavigateUp => match self.focused_popup() {
                Some(popup) => self.move_popup_cursor(popup, false),
                None => self.cursor_row = self.cursor_row.saturating_sub(1),
            },
            Action::NavigateLeft => {
                self.cursor_column = self.cursor_column.saturating_sub(1);
            }
            Action::NavigateRight => {
                let columns = self.table.layout().visible_order().len();
                if self.cursor_column + 1 < columns {
                    self.cursor_column += 1;
                }
            }
            Action::ToggleRowSelected(row) => self.table.toggle_row_selected(row),
            Action::TogglePageSelected => self.table.toggle_page_selected(),
            Action::FirstPage => self.table.first_page(),
            Action::PreviousPage => self.table.previous_page(),
            Action::NextPage => self.table.next_page(),
            Action::LastPage => self.table.last_page(),
            Action::GoToPage(page) => {
                self.table.go_to_page(page);
            }
            Action::CyclePageSize { forward } => self.table.cycle_page_size(forward),
            Action::CycleSort(column) => self.table.cycle_sort(column),
            Action::MoveColumn { column, target } => {
                if self.table.move_column(column, target) {
                    self.focus_column(column);
                } else if !self.table.layout().reordering_enabled() {
                    self.status = Some("Enable column reordering in Features (F)".to_string());
                }
            }
            Action::ResizeColumn { column, delta } => {
                if !self.table.resize_column(column, delta)
                    && !self.table.layout().resizing_enabled()
                {
                    self.status = Some("Enable column resizing in Features (F)".to_string());
                }
            }
            Action::TogglePopup(key) => {
                if self.popups.contains_key(key) {
                    self.toggle_popup(key);
                }
            }
            Action::CloseFocusedPopup => {
                if let Some(key) = self.focused_popup() {
                    self.close_popup(key);
                }
            }
            Action::ActivatePopupOption { key, index } => self.activate_popup_option(key, index),
            Action::FocusSearch => self.focus = Focus::Search,
            Action::CycleTheme => self.set_color_theme(self.color_theme.cycle_next()),
        }
        self.clamp_cursors();
    }
}
