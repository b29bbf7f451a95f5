//! Popup contents and option handling.
//!
//! Responsibilities:
//! - Describe the option rows of every popup (`popup_rows`).
//! - Open and close popups, keeping nested popups and focus consistent.
//! - Apply an activated option to the table.
//! - Edit date-range bounds inline.
//!
//! Does NOT handle:
//! - Outside-click detection (see `popup::PopupManager`).
//! - Drawing (see `ui::popups`).

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::app::App;
use crate::app::input::components::SingleLineInput;
use crate::app::state::{DateBound, DateEdit, PopupKey};
use crate::table::{DateRange, FilterKind, parse_date};

/// What an option row does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupOption {
    ToggleResizing,
    ToggleReordering,
    ShowColumns,
    SelectAllColumns,
    Column(usize),
    FilterValue(String),
    DateBound(DateBound),
    ClearFilter,
}

/// One drawn option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupRow {
    pub option: PopupOption,
    /// Checkbox state, or `None` for plain entries.
    pub checked: Option<bool>,
    pub label: String,
}

impl PopupRow {
    fn check(option: PopupOption, checked: bool, label: impl Into<String>) -> Self {
        Self {
            option,
            checked: Some(checked),
            label: label.into(),
        }
    }

    fn plain(option: PopupOption, label: impl Into<String>) -> Self {
        Self {
            option,
            checked: None,
            label: label.into(),
        }
    }
}

impl App {
    /// Option rows of a popup, top to bottom.
    pub fn popup_rows(&self, key: PopupKey) -> Vec<PopupRow> {
        match key {
            PopupKey::Features => {
                let layout = self.table.layout();
                vec![
                    PopupRow::check(
                        PopupOption::ToggleResizing,
                        layout.resizing_enabled(),
                        "Resize columns",
                    ),
                    PopupRow::check(
                        PopupOption::ToggleReordering,
                        layout.reordering_enabled(),
                        "Reorder columns",
                    ),
                    PopupRow::plain(PopupOption::ShowColumns, "Show/Hide columns ›"),
                ]
            }
            PopupKey::Columns => {
                let mut rows = vec![PopupRow::check(
                    PopupOption::SelectAllColumns,
                    self.table.all_columns_visible(),
                    "Select all",
                )];
                rows.extend(
                    self.table
                        .layout()
                        .order()
                        .iter()
                        .filter_map(|&column| self.table.column(column).map(|def| (column, def)))
                        .filter(|(_, def)| def.hideable)
                        .map(|(column, def)| {
                            PopupRow::check(
                                PopupOption::Column(column),
                                self.table.layout().is_visible(column),
                                def.title(),
                            )
                        }),
                );
                rows
            }
            PopupKey::Filter(column) => match self.table.filter_kind(column) {
                Some(FilterKind::Values) => {
                    let mut rows: Vec<PopupRow> = self
                        .table
                        .filter_options(column)
                        .into_iter()
                        .map(|value| {
                            let selected = self.table.filters().is_value_selected(column, &value);
                            PopupRow::check(PopupOption::FilterValue(value.clone()), selected, value)
                        })
                        .collect();
                    rows.push(PopupRow::plain(PopupOption::ClearFilter, "Clear filter"));
                    rows
                }
                Some(FilterKind::DateRange) => {
                    let range = self.table.filters().date_range(column);
                    let shown = |date: Option<chrono::NaiveDate>| {
                        date.map(|d| d.format("%Y-%m-%d").to_string())
                            .unwrap_or_else(|| "any".to_string())
                    };
                    vec![
                        PopupRow::plain(
                            PopupOption::DateBound(DateBound::From),
                            format!("From: {}", shown(range.from)),
                        ),
                        PopupRow::plain(
                            PopupOption::DateBound(DateBound::To),
                            format!("To:   {}", shown(range.to)),
                        ),
                        PopupRow::plain(PopupOption::ClearFilter, "Clear filter"),
                    ]
                }
                None => Vec::new(),
            },
        }
    }

    /// Open or close a popup and move keyboard focus with it.
    pub fn toggle_popup(&mut self, key: PopupKey) {
        if self.popups.is_open(key) {
            self.close_popup(key);
        } else {
            self.popups.open(key);
            self.active_popup = Some(key);
            self.popup_cursor = 0;
        }
    }

    /// Close a popup. Closing `Features` also closes the nested `Columns`.
    pub fn close_popup(&mut self, key: PopupKey) {
        self.popups.close(key);
        if key == PopupKey::Features {
            self.popups.close(PopupKey::Columns);
        }
        self.popups_closed();
    }

    /// Drop state that belonged to popups which are no longer open.
    pub(crate) fn popups_closed(&mut self) {
        if let Some(edit) = &self.date_edit
            && !self.popups.is_open(PopupKey::Filter(edit.column))
        {
            self.date_edit = None;
        }
        if let Some(key) = self.active_popup
            && !self.popups.is_open(key)
        {
            self.active_popup = self.popups.open_keys().last().copied();
            self.popup_cursor = 0;
        }
    }

    /// Apply the option at `index` of `key`'s rows.
    pub fn activate_popup_option(&mut self, key: PopupKey, index: usize) {
        if !self.popups.is_open(key) {
            return;
        }
        let Some(row) = self.popup_rows(key).into_iter().nth(index) else {
            return;
        };
        self.active_popup = Some(key);
        self.popup_cursor = index;

        match row.option {
            PopupOption::ToggleResizing => {
                let enabled = !self.table.layout().resizing_enabled();
                self.table.set_resizing_enabled(enabled);
            }
            PopupOption::ToggleReordering => {
                let enabled = !self.table.layout().reordering_enabled();
                self.table.set_reordering_enabled(enabled);
            }
            PopupOption::ShowColumns => {
                self.toggle_popup(PopupKey::Columns);
                // Keyboard focus stays on the option list that was used.
                if !self.popups.is_open(PopupKey::Columns) {
                    self.active_popup = Some(key);
                    self.popup_cursor = index;
                }
            }
            PopupOption::SelectAllColumns => {
                let visible = !self.table.all_columns_visible();
                self.table.set_all_columns_visible(visible);
            }
            PopupOption::Column(column) => {
                self.table.toggle_column_visibility(column);
            }
            PopupOption::FilterValue(value) => {
                if let PopupKey::Filter(column) = key {
                    self.table.toggle_filter_value(column, &value);
                }
            }
            PopupOption::DateBound(bound) => {
                if let PopupKey::Filter(column) = key {
                    self.start_date_edit(column, bound);
                }
            }
            PopupOption::ClearFilter => {
                if let PopupKey::Filter(column) = key {
                    self.table.clear_value_filter(column);
                    self.table.clear_date_range(column);
                    self.date_edit = None;
                }
            }
        }
        self.clamp_cursors();
    }

    /// Keys for the focused popup. Returns `None` for keys it leaves to
    /// the table, such as cursor movement.
    pub(crate) fn handle_popup_input(&mut self, key: PopupKey, event: KeyEvent) -> Option<Action> {
        match event.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ActivatePopupOption {
                key,
                index: self.popup_cursor,
            }),
            KeyCode::Esc => Some(Action::CloseFocusedPopup),
            _ => None,
        }
    }

    /// Move the option cursor of the focused popup.
    pub(crate) fn move_popup_cursor(&mut self, key: PopupKey, down: bool) {
        let count = self.popup_rows(key).len();
        if count == 0 {
            return;
        }
        self.popup_cursor = if down {
            (self.popup_cursor + 1).min(count - 1)
        } else {
            self.popup_cursor.saturating_sub(1)
        };
    }

    fn start_date_edit(&mut self, column: usize, bound: DateBound) {
        let range = self.table.filters().date_range(column);
        let current = match bound {
            DateBound::From => range.from,
            DateBound::To => range.to,
        };
        let input = match current {
            Some(date) => SingleLineInput::with_value(date.format("%Y-%m-%d").to_string()),
            None => SingleLineInput::with_placeholder("YYYY-MM-DD"),
        };
        self.date_edit = Some(DateEdit {
            column,
            bound,
            input,
        });
    }

    /// Keys while a date bound is being typed.
    pub(crate) fn handle_date_edit_input(&mut self, event: KeyEvent) -> Option<Action> {
        let edit = self.date_edit.as_mut()?;
        match event.code {
            KeyCode::Esc => {
                self.date_edit = None;
            }
            KeyCode::Enter => self.commit_date_edit(),
            _ => edit.input.handle_key(event),
        }
        None
    }

    /// Apply the typed date. An empty value clears the bound; text that is
    /// not a date keeps the editor open and reports the problem.
    pub fn commit_date_edit(&mut self) {
        let Some(edit) = self.date_edit.as_ref() else {
            return;
        };
        let text = edit.input.value().trim().to_string();
        let date = if text.is_empty() {
            None
        } else if let Some(date) = parse_date(&text) {
            Some(date)
        } else {
            self.status = Some(format!(
                "Invalid date '{text}' (use YYYY-MM-DD or DD/MM/YYYY)"
            ));
            return;
        };

        let (column, bound) = (edit.column, edit.bound);
        let range = self.table.filters().date_range(column);
        let range = match bound {
            DateBound::From => DateRange::new(date, range.to),
            DateBound::To => DateRange::new(range.from, date),
        };
        if range.is_empty() {
            self.table.clear_date_range(column);
        } else {
            self.table.set_date_range(column, range);
        }
        self.date_edit = None;
        self.status = None;
        self.clamp_cursors();
    }
}
