//! Table state: dataset plus every user-controlled view setting.

use std::collections::BTreeSet;

use datagrid_config::TableLayout;

use super::column::{ColumnDef, ColumnLayout, FilterKind};
use super::filter::{DateRange, FilterState};
use super::model::{Dataset, Row};
use super::pagination::Pagination;
use super::sort::{CellKind, SortDirection, SortState, compare_cells};

/// A dataset with its filters, sort, pagination, column layout and
/// selection.
///
/// `view` holds the dataset row indices that survive the filters, in sort
/// order. It is rebuilt by every mutation that can change it.
#[derive(Debug, Clone)]
pub struct TableState {
    dataset: Dataset,
    layout: ColumnLayout,
    filters: FilterState,
    sort: SortState,
    pagination: Pagination,
    selected: BTreeSet<usize>,
    view: Vec<usize>,
}

impl TableState {
    pub fn new(dataset: Dataset, page_size: usize) -> Self {
        let layout = ColumnLayout::new(&dataset.columns);
        let mut state = Self {
            dataset,
            layout,
            filters: FilterState::default(),
            sort: SortState::default(),
            pagination: Pagination::new(page_size),
            selected: BTreeSet::new(),
            view: Vec::new(),
        };
        state.rebuild_view();
        state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn title(&self) -> &str {
        &self.dataset.title
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.dataset.columns
    }

    pub fn column(&self, column: usize) -> Option<&ColumnDef> {
        self.dataset.columns.get(column)
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.dataset.rows.get(index)
    }

    /// Recompute the filtered, sorted view and keep the page index valid.
    fn rebuild_view(&mut self) {
        let mut view: Vec<usize> = self
            .dataset
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.filters.matches(row))
            .map(|(index, _)| index)
            .collect();

        if let Some((column, direction)) = self.sort.get() {
            let rows = &self.dataset.rows;
            let kind = CellKind::detect(view.iter().map(|&i| rows[i].cell(column)));
            view.sort_by(|&a, &b| {
                let ordering = compare_cells(kind, rows[a].cell(column), rows[b].cell(column));
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        self.view = view;
        self.pagination.clamp(self.view.len());
    }

    /// Rebuild after a filter change and return to the first page.
    fn filters_changed(&mut self) {
        self.pagination.first();
        self.rebuild_view();
    }

    // --- filters ---

    pub fn set_global_filter(&mut self, text: &str) {
        if self.filters.set_global(text) {
            self.filters_changed();
        }
    }

    /// Toggle `value` in a `Values` column's accepted set.
    pub fn toggle_filter_value(&mut self, column: usize, value: &str) {
        if self.filter_kind(column) != Some(FilterKind::Values) {
            tracing::debug!(column, "Ignoring value filter on a column without one");
            return;
        }
        self.filters.toggle_value(column, value);
        self.filters_changed();
    }

    pub fn clear_value_filter(&mut self, column: usize) {
        if self.filters.clear_values(column) {
            self.filters_changed();
        }
    }

    /// Set the bounds of a `DateRange` column.
    pub fn set_date_range(&mut self, column: usize, range: DateRange) {
        if self.filter_kind(column) != Some(FilterKind::DateRange) {
            tracing::debug!(column, "Ignoring date range on a column without one");
            return;
        }
        self.filters.set_date_range(column, range);
        self.filters_changed();
    }

    pub fn clear_date_range(&mut self, column: usize) {
        if self.filters.clear_date_range(column) {
            self.filters_changed();
        }
    }

    pub fn has_active_filter(&self, column: usize) -> bool {
        self.filters.is_active(column)
    }

    pub fn filter_kind(&self, column: usize) -> Option<FilterKind> {
        self.column(column).and_then(|def| def.filter)
    }

    /// Sorted distinct values of a `Values` column, empty cells excluded.
    pub fn filter_options(&self, column: usize) -> Vec<String> {
        if self.filter_kind(column) != Some(FilterKind::Values) {
            return Vec::new();
        }
        let distinct: BTreeSet<&str> = self
            .dataset
            .rows
            .iter()
            .map(|row| row.cell(column))
            .filter(|cell| !cell.is_empty())
            .collect();
        distinct.into_iter().map(str::to_string).collect()
    }

    // --- sort ---

    /// Advance the sort cycle on a sortable column.
    pub fn cycle_sort(&mut self, column: usize) {
        if !self.column(column).is_some_and(|def| def.sortable) {
            return;
        }
        self.sort.cycle(column);
        self.pagination.first();
        self.rebuild_view();
    }

    // --- pagination ---

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    pub fn cycle_page_size(&mut self, forward: bool) {
        self.pagination.cycle_page_size(forward);
    }

    pub fn first_page(&mut self) {
        self.pagination.first();
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous();
    }

    pub fn next_page(&mut self) {
        self.pagination.next(self.view.len());
    }

    pub fn last_page(&mut self) {
        self.pagination.last(self.view.len());
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.pagination.go_to(page, self.view.len())
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.view.len())
    }

    pub fn can_previous(&self) -> bool {
        self.pagination.can_previous()
    }

    pub fn can_next(&self) -> bool {
        self.pagination.can_next(self.view.len())
    }

    pub fn page_window(&self) -> Vec<usize> {
        self.pagination.page_window(self.view.len())
    }

    /// Rows left after filtering.
    pub fn total_rows(&self) -> usize {
        self.view.len()
    }

    /// Dataset row indices on the current page, in display order.
    pub fn page_rows(&self) -> &[usize] {
        &self.view[self.pagination.range(self.view.len())]
    }

    // --- columns ---

    pub fn toggle_column_visibility(&mut self, column: usize) -> bool {
        self.layout.toggle_visibility(&self.dataset.columns, column)
    }

    pub fn set_all_columns_visible(&mut self, visible: bool) {
        self.layout.set_all_visible(&self.dataset.columns, visible);
    }

    pub fn all_columns_visible(&self) -> bool {
        self.layout.all_visible()
    }

    pub fn move_column(&mut self, column: usize, target: usize) -> bool {
        self.layout.move_column(column, target)
    }

    pub fn resize_column(&mut self, column: usize, delta: i32) -> bool {
        self.layout.resize(&self.dataset.columns, column, delta)
    }

    pub fn set_column_width(&mut self, column: usize, width: u16) -> bool {
        self.layout.set_width(&self.dataset.columns, column, width)
    }

    pub fn set_resizing_enabled(&mut self, enabled: bool) {
        self.layout.set_resizing_enabled(enabled);
    }

    pub fn set_reordering_enabled(&mut self, enabled: bool) {
        self.layout.set_reordering_enabled(enabled);
    }

    // --- selection ---

    pub fn is_selected(&self, row: usize) -> bool {
        self.selected.contains(&row)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Flip selection of a dataset row.
    pub fn toggle_row_selected(&mut self, row: usize) {
        if row >= self.dataset.rows.len() {
            return;
        }
        if !self.selected.remove(&row) {
            self.selected.insert(row);
        }
    }

    /// Whether every row on the current page is selected. An empty page is
    /// never selected.
    pub fn is_page_selected(&self) -> bool {
        let rows = self.page_rows();
        !rows.is_empty() && rows.iter().all(|row| self.selected.contains(row))
    }

    /// Select the whole current page, or deselect it when it already is.
    pub fn toggle_page_selected(&mut self) {
        let select = !self.is_page_selected();
        let rows: Vec<usize> = self.page_rows().to_vec();
        for row in rows {
            if select {
                self.selected.insert(row);
            } else {
                self.selected.remove(&row);
            }
        }
    }

    // --- persistence ---

    /// Restore a remembered layout and page size.
    pub fn apply_layout(&mut self, layout: &TableLayout) {
        self.layout.apply_persisted(&self.dataset.columns, layout);
        if let Some(page_size) = layout.page_size {
            self.pagination.set_page_size(page_size);
        }
        self.rebuild_view();
    }

    /// Snapshot of the layout and page size for persistence.
    pub fn export_layout(&self) -> TableLayout {
        TableLayout {
            page_size: Some(self.pagination.page_size()),
            ..self.layout.to_persisted(&self.dataset.columns)
        }
    }
}
