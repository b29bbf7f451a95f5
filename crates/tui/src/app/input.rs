//! Keyboard input handling for the table screen.
//!
//! Responsibilities:
//! - Route keys to the date editor, the search box, the focused popup or
//!   the table, in that order.
//! - Translate table keys into Actions.
//!
//! Non-responsibilities:
//! - Does NOT apply table actions (see `actions`)
//! - Does NOT handle mouse input (see `mouse`)

pub mod components;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use datagrid_config::constants::RESIZE_STEP;

use crate::action::Action;
use crate::app::App;
use crate::app::state::{Focus, PopupKey};

impl App {
    /// Handle a key press - returns Action if one should be dispatched.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        self.status = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.date_edit.is_some() {
            return self.handle_date_edit_input(key);
        }

        if self.focus == Focus::Search {
            return self.handle_search_input(key);
        }

        if let Some(popup) = self.focused_popup()
            && let Some(action) = self.handle_popup_input(popup, key)
        {
            return Some(action);
        }

        self.handle_table_input(key)
    }

    fn handle_search_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                self.focus = Focus::Table;
            }
            _ => {
                let before = self.search_input.value().to_string();
                self.search_input.handle_key(key);
                if self.search_input.value() != before {
                    self.apply_search();
                }
            }
        }
        None
    }

    fn handle_table_input(&mut self, key: KeyEvent) -> Option<Action> {
        let column = self.cursor_column_index();
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('/') => Some(Action::FocusSearch),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NavigateDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::NavigateUp),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::NavigateLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NavigateRight),
            KeyCode::Char(' ') => self.cursor_row_index().map(Action::ToggleRowSelected),
            KeyCode::Char('a') => Some(Action::TogglePageSelected),
            KeyCode::Char('s') => column.map(Action::CycleSort),
            KeyCode::Char('f') => column
                .filter(|&c| self.table.filter_kind(c).is_some())
                .map(|c| Action::TogglePopup(PopupKey::Filter(c))),
            KeyCode::Char('<') => self.neighbour_move(false),
            KeyCode::Char('>') => self.neighbour_move(true),
            KeyCode::Char('+') | KeyCode::Char('=') => column.map(|column| Action::ResizeColumn {
                column,
                delta: i32::from(RESIZE_STEP),
            }),
            KeyCode::Char('-') => column.map(|column| Action::ResizeColumn {
                column,
                delta: -i32::from(RESIZE_STEP),
            }),
            KeyCode::Char('n') | KeyCode::PageDown => Some(Action::NextPage),
            KeyCode::Char('p') | KeyCode::PageUp => Some(Action::PreviousPage),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstPage),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastPage),
            KeyCode::Char(']') => Some(Action::CyclePageSize { forward: true }),
            KeyCode::Char('[') => Some(Action::CyclePageSize { forward: false }),
            KeyCode::Char(digit @ '1'..='9') => digit
                .to_digit(10)
                .map(|page| Action::GoToPage(page as usize)),
            KeyCode::Char('F') => Some(Action::TogglePopup(PopupKey::Features)),
            KeyCode::Char('c') => Some(Action::TogglePopup(PopupKey::Columns)),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            KeyCode::Esc if self.popups.any_open() => Some(Action::CloseFocusedPopup),
            _ => None,
        }
    }

    /// Move the cursor column past its visible neighbour.
    fn neighbour_move(&self, forward: bool) -> Option<Action> {
        let visible = self.table.layout().visible_order();
        let column = *visible.get(self.cursor_column)?;
        let target_position = if forward {
            self.cursor_column + 1
        } else {
            self.cursor_column.checked_sub(1)?
        };
        let target = *visible.get(target_position)?;
        Some(Action::MoveColumn { column, target })
    }
}
