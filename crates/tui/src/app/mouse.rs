//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Feed every left-button press to the popup manager before anything else
//! - Route the press to the control drawn under it in the last frame
//! - Track header drags for resizing and reordering
//!
//! Does NOT handle:
//! - Does NOT handle keyboard input
//! - Does NOT render the UI

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::action::Action;
use crate::app::App;
use crate::app::layout::{Control, PagerButton};
use crate::app::popups::PopupOption;
use crate::app::state::{DragState, Focus, PopupKey};

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_pointer_down(position),
            MouseEventKind::Drag(MouseButton::Left) => self.handle_drag(position),
            MouseEventKind::Up(MouseButton::Left) => self.handle_pointer_up(position),
            MouseEventKind::ScrollDown => Some(Action::NavigateDown),
            MouseEventKind::ScrollUp => Some(Action::NavigateUp),
            _ => None,
        }
    }

    fn handle_pointer_down(&mut self, position: Position) -> Option<Action> {
        // Outside clicks close popups first, all in one pass.
        let closed = self.popups.handle_pointer_down(position);
        if !closed.is_empty() {
            self.popups_closed();
        }

        if let Some((key, index)) = self.layout.popup_option_at(position)
            && self.popups.is_open(key)
        {
            let opens_columns = self
                .popup_rows(key)
                .get(index)
                .is_some_and(|row| row.option == PopupOption::ShowColumns);
            if opens_columns && closed.contains(&PopupKey::Columns) {
                return None;
            }
            return Some(Action::ActivatePopupOption { key, index });
        }

        let on_open_popup = self
            .layout
            .popups
            .iter()
            .any(|&(key, area)| self.popups.is_open(key) && area.contains(position));
        if on_open_popup {
            return None;
        }

        if let Some(control) = self.layout.control_at(position) {
            return match control {
                Control::Search => {
                    self.focus = Focus::Search;
                    None
                }
                Control::Features => Self::trigger(PopupKey::Features, &closed),
                Control::Filters => self
                    .default_filter_column()
                    .and_then(|column| Self::trigger(PopupKey::Filter(column), &closed)),
                Control::PageSize => Some(Action::CyclePageSize { forward: true }),
            };
        }
        self.focus = Focus::Table;

        if self
            .layout
            .select_page
            .is_some_and(|area| area.contains(position))
        {
            return Some(Action::TogglePageSelected);
        }

        if let Some(hit) = self.layout.header_at(position) {
            if hit.filter_marker.is_some_and(|area| area.contains(position)) {
                return Self::trigger(PopupKey::Filter(hit.column), &closed);
            }
            self.focus_column(hit.column);
            let layout = self.table.layout();
            if layout.resizing_enabled()
                && hit.resize_handle.is_some_and(|area| area.contains(position))
            {
                self.drag = Some(DragState::Resize {
                    column: hit.column,
                    start_x: position.x,
                    start_width: layout.width(hit.column),
                });
                return None;
            }
            if layout.reordering_enabled() {
                self.drag = Some(DragState::Reorder { column: hit.column });
                return None;
            }
            return Some(Action::CycleSort(hit.column));
        }

        if let Some((row, on_checkbox)) = self.layout.row_at(position) {
            if let Some(index) = self.table.page_rows().iter().position(|&r| r == row) {
                self.cursor_row = index;
            }
            return on_checkbox.then_some(Action::ToggleRowSelected(row));
        }

        self.layout.pager_at(position).map(|button| match button {
            PagerButton::First => Action::FirstPage,
            PagerButton::Previous => Action::PreviousPage,
            PagerButton::Page(page) => Action::GoToPage(page),
            PagerButton::Next => Action::NextPage,
            PagerButton::Last => Action::LastPage,
        })
    }

    /// A trigger does not reopen a popup the same press just closed.
    fn trigger(key: PopupKey, closed: &[PopupKey]) -> Option<Action> {
        if closed.contains(&key) {
            None
        } else {
            Some(Action::TogglePopup(key))
        }
    }

    fn handle_drag(&mut self, position: Position) -> Option<Action> {
        let Some(DragState::Resize {
            column,
            start_x,
            start_width,
        }) = self.drag
        else {
            return None;
        };
        let target = i32::from(start_width) + i32::from(position.x) - i32::from(start_x);
        let delta = target - i32::from(self.table.layout().width(column));
        (delta != 0).then_some(Action::ResizeColumn { column, delta })
    }

    fn handle_pointer_up(&mut self, position: Position) -> Option<Action> {
        match self.drag.take()? {
            DragState::Resize { .. } => None,
            DragState::Reorder { column } => {
                let target = self.layout.header_at(position)?.column;
                if target == column {
                    Some(Action::CycleSort(column))
                } else {
                    Some(Action::MoveColumn { column, target })
                }
            }
        }
    }
}
