//! Row filters: global search, per-column value sets and date ranges.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use super::model::Row;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Parse a cell as a calendar date.
///
/// Accepts `YYYY-MM-DD` (optionally followed by a time, as in RFC 3339)
/// and `DD/MM/YYYY`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let date_part = match text.split_once(['T', ' ']) {
        Some((date, _)) => date,
        None => text,
    };
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}

/// Inclusive date bounds; an absent bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Whether neither bound is set.
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Whether a cell passes this range. Cells that are not dates fail a
    /// non-empty range.
    pub fn accepts(&self, cell: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        parse_date(cell).is_some_and(|date| self.contains(date))
    }
}

/// All active row filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    global: String,
    values: BTreeMap<usize, BTreeSet<String>>,
    dates: BTreeMap<usize, DateRange>,
}

impl FilterState {
    pub fn global(&self) -> &str {
        &self.global
    }

    /// Replace the search text. Returns whether it changed.
    pub fn set_global(&mut self, text: &str) -> bool {
        if self.global == text {
            return false;
        }
        self.global = text.to_string();
        true
    }

    /// Add `value` to the column's accepted set, or remove it if present.
    pub fn toggle_value(&mut self, column: usize, value: &str) {
        let set = self.values.entry(column).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        if set.is_empty() {
            self.values.remove(&column);
        }
    }

    pub fn is_value_selected(&self, column: usize, value: &str) -> bool {
        self.values
            .get(&column)
            .is_some_and(|set| set.contains(value))
    }

    /// Drop the column's value filter. Returns whether one was set.
    pub fn clear_values(&mut self, column: usize) -> bool {
        self.values.remove(&column).is_some()
    }

    pub fn date_range(&self, column: usize) -> DateRange {
        self.dates.get(&column).copied().unwrap_or_default()
    }

    /// Set the column's date bounds; an empty range clears the filter.
    pub fn set_date_range(&mut self, column: usize, range: DateRange) {
        if range.is_empty() {
            self.dates.remove(&column);
        } else {
            self.dates.insert(column, range);
        }
    }

    pub fn clear_date_range(&mut self, column: usize) -> bool {
        self.dates.remove(&column).is_some()
    }

    /// Whether `column` has a value or date filter.
    pub fn is_active(&self, column: usize) -> bool {
        self.values.contains_key(&column) || self.dates.contains_key(&column)
    }

    /// Apply value sets, then date ranges, then the global search.
    pub fn matches(&self, row: &Row) -> bool {
        let values_pass = self
            .values
            .iter()
            .all(|(&column, accepted)| accepted.contains(row.cell(column)));
        if !values_pass {
            return false;
        }

        let dates_pass = self
            .dates
            .iter()
            .all(|(&column, range)| range.accepts(row.cell(column)));
        if !dates_pass {
            return false;
        }

        if self.global.is_empty() {
            return true;
        }
        let needle = self.global.to_lowercase();
        row.cells
            .iter()
            .any(|cell| cell.to_lowercase().contains(&needle))
    }
}
