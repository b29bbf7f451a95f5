//! Sort state and cell comparison.

use std::cmp::Ordering;

use super::filter::parse_date;

/// Sort direction for the sorted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Header indicator for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// Which column is sorted, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    sorted: Option<(usize, SortDirection)>,
}

impl SortState {
    pub fn column(&self) -> Option<usize> {
        self.sorted.map(|(column, _)| column)
    }

    /// Direction for `column`, or `None` when it is not the sorted column.
    pub fn direction_for(&self, column: usize) -> Option<SortDirection> {
        self.sorted
            .filter(|(sorted, _)| *sorted == column)
            .map(|(_, direction)| direction)
    }

    pub fn get(&self) -> Option<(usize, SortDirection)> {
        self.sorted
    }

    /// Advance the header cycle for `column`.
    ///
    /// Same column: unsorted, ascending, descending, unsorted. A different
    /// column starts at ascending.
    pub fn cycle(&mut self, column: usize) {
        self.sorted = match self.sorted {
            Some((sorted, SortDirection::Asc)) if sorted == column => {
                Some((column, SortDirection::Desc))
            }
            Some((sorted, SortDirection::Desc)) if sorted == column => None,
            _ => Some((column, SortDirection::Asc)),
        };
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// How the cells of one column are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Number,
    Date,
    Text,
}

impl CellKind {
    /// Pick the comparison for a column from its non-empty cells: numeric
    /// when all are numbers, chronological when all are dates, otherwise
    /// text.
    pub fn detect<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let mut numbers = true;
        let mut dates = true;
        let mut seen = false;
        for cell in cells.into_iter().filter(|c| !c.trim().is_empty()) {
            seen = true;
            numbers = numbers && parse_number(cell).is_some();
            dates = dates && parse_date(cell).is_some();
            if !numbers && !dates {
                break;
            }
        }
        match (seen, numbers, dates) {
            (true, true, _) => Self::Number,
            (true, false, true) => Self::Date,
            _ => Self::Text,
        }
    }
}

/// Compare two cells of a column of the given kind. Empty cells sort
/// first under numeric and date comparison.
pub fn compare_cells(kind: CellKind, a: &str, b: &str) -> Ordering {
    match kind {
        CellKind::Number => match (parse_number(a), parse_number(b)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (x, y) => x.is_some().cmp(&y.is_some()),
        },
        CellKind::Date => parse_date(a).cmp(&parse_date(b)),
        CellKind::Text => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    }
}
