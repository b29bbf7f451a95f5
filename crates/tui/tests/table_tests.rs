//! Integration tests for the table model: filtering, sorting, pagination,
//! column layout and row selection.

mod helpers;

use chrono::NaiveDate;
use datagrid_config::TableLayout;
use datagrid_tui::table::{
    ColumnDef, Dataset, DateRange, Pagination, Row, SortDirection, TableState,
};
use helpers::*;
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn names(table: &TableState) -> Vec<String> {
    table
        .page_rows()
        .iter()
        .map(|&row| table.row(row).unwrap().cell(NAME).to_string())
        .collect()
}

#[test]
fn test_first_page_in_dataset_order() {
    let table = sample_table();
    assert_eq!(table.total_rows(), 12);
    assert_eq!(table.page_count(), 3);
    assert_eq!(names(&table), vec!["Ada", "Bob", "Cleo", "Dan", "Eve"]);
    assert!(!table.can_previous());
    assert!(table.can_next());
}

#[test]
fn test_last_page_holds_the_remainder() {
    let mut table = sample_table();
    table.last_page();
    assert_eq!(table.pagination().page_index(), 2);
    assert_eq!(names(&table), vec!["Kai", "Lia"]);
    assert!(!table.can_next());

    table.next_page();
    assert_eq!(table.pagination().page_index(), 2);
}

#[test]
fn test_go_to_page_ignores_out_of_range() {
    let mut table = sample_table();
    assert!(table.go_to_page(2));
    assert_eq!(names(&table)[0], "Finn");
    assert!(!table.go_to_page(0));
    assert!(!table.go_to_page(4));
    assert_eq!(table.pagination().page_index(), 1);
}

#[test]
fn test_page_size_change_returns_to_first_page() {
    let mut table = sample_table();
    table.last_page();
    table.set_page_size(10);
    assert_eq!(table.pagination().page_index(), 0);
    assert_eq!(table.page_count(), 2);

    table.set_page_size(7);
    assert_eq!(table.pagination().page_size(), 10);
}

#[test]
fn test_page_size_cycles_through_options() {
    let mut table = sample_table();
    table.cycle_page_size(true);
    assert_eq!(table.pagination().page_size(), 10);
    table.cycle_page_size(true);
    assert_eq!(table.pagination().page_size(), 15);
    table.cycle_page_size(true);
    assert_eq!(table.pagination().page_size(), 5);
    table.cycle_page_size(false);
    assert_eq!(table.pagination().page_size(), 15);
}

#[test]
fn test_global_search_is_case_insensitive_across_columns() {
    let mut table = sample_table();
    table.set_global_filter("PEND");
    assert_eq!(names(&table), vec!["Dan", "Hana", "Lia"]);

    table.set_global_filter("2024-0");
    assert_eq!(table.total_rows(), 9);

    table.set_global_filter("");
    assert_eq!(table.total_rows(), 12);
}

#[test]
fn test_filter_change_resets_to_first_page() {
    let mut table = sample_table();
    table.go_to_page(3);
    table.toggle_filter_value(STATUS, "active");
    assert_eq!(table.pagination().page_index(), 0);
    assert_eq!(table.total_rows(), 6);
    assert_eq!(table.page_count(), 2);
}

#[test]
fn test_value_filter_accepts_any_selected_value() {
    let mut table = sample_table();
    table.toggle_filter_value(STATUS, "inactive");
    table.toggle_filter_value(STATUS, "pending");
    assert_eq!(table.total_rows(), 6);
    assert!(table.has_active_filter(STATUS));

    table.toggle_filter_value(STATUS, "inactive");
    table.toggle_filter_value(STATUS, "pending");
    assert!(!table.has_active_filter(STATUS));
    assert_eq!(table.total_rows(), 12);
}

#[test]
fn test_value_filter_ignored_on_unfiltered_column() {
    let mut table = sample_table();
    table.toggle_filter_value(NAME, "Ada");
    assert_eq!(table.total_rows(), 12);
    assert!(!table.has_active_filter(NAME));
}

#[test]
fn test_filter_options_are_sorted_and_distinct() {
    let table = sample_table();
    assert_eq!(
        table.filter_options(STATUS),
        vec!["active", "inactive", "pending"]
    );
    assert!(table.filter_options(NAME).is_empty());
}

#[test]
fn test_date_range_is_inclusive() {
    let mut table = sample_table();
    table.set_date_range(CREATED, DateRange::new(date(2024, 3, 15), date(2024, 5, 25)));
    assert_eq!(names(&table), vec!["Cleo", "Dan", "Eve"]);

    table.set_date_range(CREATED, DateRange::new(date(2024, 11, 1), None));
    assert_eq!(names(&table), vec!["Kai", "Lia"]);

    table.clear_date_range(CREATED);
    assert_eq!(table.total_rows(), 12);
}

#[test]
fn test_filters_combine_with_search() {
    let mut table = sample_table();
    table.toggle_filter_value(STATUS, "active");
    table.set_date_range(CREATED, DateRange::new(None, date(2024, 6, 30)));
    assert_eq!(names(&table), vec!["Ada", "Cleo", "Eve"]);

    table.set_global_filter("CLEO");
    assert_eq!(names(&table), vec!["Cleo"]);
}

#[test]
fn test_no_matches_leaves_an_empty_page() {
    let mut table = sample_table();
    table.set_global_filter("nobody");
    assert_eq!(table.total_rows(), 0);
    assert_eq!(table.page_count(), 0);
    assert!(table.page_rows().is_empty());
    assert!(table.page_window().is_empty());
    assert!(!table.is_page_selected());
}

#[test]
fn test_sort_cycles_ascending_descending_none() {
    let mut table = sample_table();
    table.cycle_sort(AMOUNT);
    assert_eq!(
        table.sort().direction_for(AMOUNT),
        Some(SortDirection::Asc)
    );
    assert_eq!(names(&table), vec!["Jon", "Gus", "Dan", "Kai", "Hana"]);

    table.cycle_sort(AMOUNT);
    assert_eq!(names(&table), vec!["Cleo", "Ivy", "Finn", "Lia", "Ada"]);

    table.cycle_sort(AMOUNT);
    assert_eq!(table.sort().get(), None);
    assert_eq!(names(&table)[0], "Ada");
}

#[test]
fn test_sorting_another_column_starts_ascending() {
    let mut table = sample_table();
    table.cycle_sort(AMOUNT);
    table.cycle_sort(AMOUNT);
    table.cycle_sort(STATUS);
    assert_eq!(table.sort().get(), Some((STATUS, SortDirection::Asc)));
    assert_eq!(table.sort().direction_for(AMOUNT), None);
}

#[test]
fn test_sort_resets_page() {
    let mut table = sample_table();
    table.last_page();
    table.cycle_sort(NAME);
    assert_eq!(table.pagination().page_index(), 0);
}

#[test]
fn test_unsortable_column_ignores_sort() {
    let dataset = Dataset::new(
        "t",
        vec![ColumnDef::new("a").unsortable()],
        vec![Row::new(vec!["b".into()]), Row::new(vec!["a".into()])],
    );
    let mut table = TableState::new(dataset, 5);
    table.cycle_sort(0);
    assert_eq!(table.sort().get(), None);
}

#[test]
fn test_dates_sort_chronologically_across_formats() {
    let dataset = Dataset::new(
        "t",
        vec![ColumnDef::new("when")],
        vec![
            Row::new(vec!["05/01/2024".into()]),
            Row::new(vec!["2023-12-31".into()]),
            Row::new(vec!["2024-01-02".into()]),
        ],
    );
    let mut table = TableState::new(dataset, 5);
    table.cycle_sort(0);
    assert_eq!(table.page_rows(), &[1, 2, 0]);
}

#[test]
fn test_sort_kind_is_chosen_per_column() {
    let column = |cells: [&str; 3]| {
        let rows = cells.iter().map(|c| Row::new(vec![c.to_string()])).collect();
        let mut table = TableState::new(Dataset::new("t", vec![ColumnDef::new("v")], rows), 5);
        table.cycle_sort(0);
        table.page_rows().to_vec()
    };

    // One non-numeric cell turns the whole column into text.
    assert_eq!(column(["10", "n/a", "9"]), vec![0, 2, 1]);
    // Empty cells do not; they sort first.
    assert_eq!(column(["10", "", "9"]), vec![1, 2, 0]);
}

#[test]
fn test_row_selection_survives_paging() {
    let mut table = sample_table();
    table.toggle_row_selected(0);
    table.next_page();
    table.toggle_page_selected();
    assert_eq!(table.selected_count(), 6);
    assert!(table.is_page_selected());

    table.toggle_page_selected();
    assert_eq!(table.selected_count(), 1);
    assert!(table.is_selected(0));

    table.toggle_row_selected(99);
    assert_eq!(table.selected_count(), 1);
}

#[test]
fn test_column_visibility_and_select_all() {
    let mut table = sample_table();
    assert!(table.toggle_column_visibility(STATUS));
    assert_eq!(table.layout().visible_order(), vec![NAME, CREATED, AMOUNT]);
    assert!(!table.all_columns_visible());

    table.set_all_columns_visible(true);
    assert!(table.all_columns_visible());
    table.set_all_columns_visible(false);
    assert!(table.layout().visible_order().is_empty());
}

#[test]
fn test_fixed_column_cannot_be_hidden() {
    let dataset = Dataset::new(
        "t",
        vec![ColumnDef::new("id").fixed(), ColumnDef::new("note")],
        vec![],
    );
    let mut table = TableState::new(dataset, 5);
    assert!(!table.toggle_column_visibility(0));
    table.set_all_columns_visible(false);
    assert_eq!(table.layout().visible_order(), vec![0]);
}

#[test]
fn test_move_column_requires_reordering() {
    let mut table = sample_table();
    assert!(!table.move_column(AMOUNT, NAME));

    table.set_reordering_enabled(true);
    assert!(table.move_column(AMOUNT, NAME));
    assert_eq!(table.layout().order(), &[AMOUNT, NAME, STATUS, CREATED]);

    assert!(table.move_column(AMOUNT, CREATED));
    assert_eq!(table.layout().order(), &[NAME, STATUS, CREATED, AMOUNT]);
}

#[test]
fn test_resize_requires_resizing_and_clamps() {
    let mut table = sample_table();
    assert!(!table.resize_column(NAME, 4));
    assert_eq!(table.layout().width(NAME), 10);

    table.set_resizing_enabled(true);
    assert!(table.resize_column(NAME, 4));
    assert_eq!(table.layout().width(NAME), 14);

    table.resize_column(NAME, -100);
    assert_eq!(table.layout().width(NAME), 4);
    table.set_column_width(NAME, 500);
    assert_eq!(table.layout().width(NAME), 80);
}

#[test]
fn test_layout_export_and_apply() {
    let mut table = sample_table();
    table.set_reordering_enabled(true);
    table.set_resizing_enabled(true);
    table.move_column(AMOUNT, NAME);
    table.toggle_column_visibility(CREATED);
    table.resize_column(STATUS, 2);
    table.set_page_size(15);

    let exported = table.export_layout();
    assert_eq!(exported.column_order, vec!["amount", "name", "status", "created"]);
    assert_eq!(exported.hidden_columns, vec!["created"]);
    assert_eq!(exported.column_widths.get("status"), Some(&14));
    assert_eq!(exported.page_size, Some(15));

    let mut restored = sample_table();
    restored.apply_layout(&exported);
    assert_eq!(restored.layout(), table.layout());
    assert_eq!(restored.pagination().page_size(), 15);
}

#[test]
fn test_apply_layout_skips_unknown_columns() {
    let layout = TableLayout {
        column_order: vec!["ghost".into(), "amount".into()],
        hidden_columns: vec!["ghost".into()],
        ..TableLayout::default()
    };
    let mut table = sample_table();
    table.apply_layout(&layout);
    assert_eq!(table.layout().order(), &[AMOUNT, NAME, STATUS, CREATED]);
    assert!(table.all_columns_visible());
}

#[test]
fn test_page_window_centres_on_current_page() {
    let mut pagination = Pagination::new(5);
    assert_eq!(pagination.page_window(50), vec![1, 2, 3, 4, 5]);
    pagination.go_to(6, 50);
    assert_eq!(pagination.page_window(50), vec![4, 5, 6, 7, 8]);
    pagination.last(50);
    assert_eq!(pagination.page_window(50), vec![6, 7, 8, 9, 10]);
    assert_eq!(pagination.page_window(7), vec![1, 2]);
}

proptest! {
    #[test]
    fn prop_page_window_stays_in_bounds(total in 0usize..500, page in 1usize..120) {
        let mut pagination = Pagination::new(5);
        pagination.go_to(page, total);
        let window = pagination.page_window(total);
        let pages = pagination.page_count(total);

        prop_assert!(window.len() <= 5);
        prop_assert_eq!(window.len(), pages.min(5));
        if let (Some(&first), Some(&last)) = (window.first(), window.last()) {
            prop_assert!(first >= 1);
            prop_assert!(last <= pages);
            prop_assert!(window.contains(&(pagination.page_index() + 1)));
            prop_assert!(window.windows(2).all(|pair| pair[1] == pair[0] + 1));
        }
    }

    #[test]
    fn prop_pages_partition_the_view(total in 0usize..60, size_index in 0usize..3) {
        let page_size = [5, 10, 15][size_index];
        let mut pagination = Pagination::new(page_size);
        let mut seen = 0;
        for page in 1..=pagination.page_count(total) {
            pagination.go_to(page, total);
            let range = pagination.range(total);
            prop_assert_eq!(range.start, seen);
            prop_assert!(range.len() <= page_size);
            seen = range.end;
        }
        prop_assert_eq!(seen, total);
    }
}
