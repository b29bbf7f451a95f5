//! Integration tests for mouse handling on the table screen.
//!
//! Each test renders first so the hit map of the frame is populated, then
//! delivers the mouse event. Coordinates follow the layout documented in
//! `helpers.rs`.

mod helpers;

use datagrid_tui::app::Focus;
use helpers::*;

#[test]
fn test_header_click_cycles_sort() {
    let mut harness = TuiHarness::new();
    harness.click(48, 5);
    assert_eq!(page_names(&harness.app), vec!["Jon", "Gus", "Dan", "Kai", "Hana"]);

    harness.click(48, 5);
    assert_eq!(page_names(&harness.app)[0], "Cleo");

    harness.click(48, 5);
    assert_eq!(harness.app.table.sort().get(), None);
}

#[test]
fn test_header_click_moves_column_cursor() {
    let mut harness = TuiHarness::new();
    harness.click(20, 5);
    assert_eq!(harness.app.cursor_column_index(), Some(STATUS));
}

#[test]
fn test_checkbox_click_toggles_row_selection() {
    let mut harness = TuiHarness::new();
    harness.click(2, 7);
    assert!(harness.app.table.is_selected(1));
    assert_eq!(harness.app.cursor_row, 1);

    harness.click(2, 7);
    assert!(!harness.app.table.is_selected(1));
}

#[test]
fn test_row_click_moves_cursor_without_selecting() {
    let mut harness = TuiHarness::new();
    harness.click(20, 9);
    assert_eq!(harness.app.cursor_row, 3);
    assert_eq!(harness.app.table.selected_count(), 0);
}

#[test]
fn test_select_all_checkbox_selects_current_page() {
    let mut harness = TuiHarness::new();
    harness.click(2, 5);
    assert_eq!(harness.app.table.selected_count(), 5);
    assert!(harness.app.table.is_page_selected());

    harness.click(2, 5);
    assert_eq!(harness.app.table.selected_count(), 0);
}

#[test]
fn test_paginator_buttons() {
    let mut harness = TuiHarness::new();
    // " 2 " spans x 20..23.
    harness.click(21, 28);
    assert_eq!(harness.app.table.pagination().page_index(), 1);

    // " » " spans x 29..32.
    harness.click(30, 28);
    assert_eq!(harness.app.table.pagination().page_index(), 2);

    // " › " is disabled on the last page.
    harness.click(27, 28);
    assert_eq!(harness.app.table.pagination().page_index(), 2);

    // " « " spans x 11..14.
    harness.click(12, 28);
    assert_eq!(harness.app.table.pagination().page_index(), 0);
}

#[test]
fn test_rows_button_cycles_page_size() {
    let mut harness = TuiHarness::new();
    harness.click(93, 2);
    assert_eq!(harness.app.table.pagination().page_size(), 10);
}

#[test]
fn test_search_click_focuses_search_box() {
    let mut harness = TuiHarness::new();
    harness.click(10, 2);
    assert_eq!(harness.app.focus, Focus::Search);

    for c in "cleo".chars() {
        harness.press(key(c));
    }
    assert_eq!(page_names(&harness.app), vec!["Cleo"]);

    harness.click(20, 6);
    assert_eq!(harness.app.focus, Focus::Table);
}

#[test]
fn test_resize_drag_follows_pointer() {
    let mut harness = TuiHarness::new();
    harness.app.table.set_resizing_enabled(true);

    // The name column spans x 5..15; its resize handle is the last cell.
    harness.mouse(mouse_down(14, 5));
    harness.app.update(datagrid_tui::Action::Mouse(mouse_drag(18, 5)));
    assert_eq!(harness.app.table.layout().width(NAME), 14);

    harness.app.update(datagrid_tui::Action::Mouse(mouse_drag(16, 5)));
    assert_eq!(harness.app.table.layout().width(NAME), 12);

    harness.app.update(datagrid_tui::Action::Mouse(mouse_up(16, 5)));
    assert!(harness.app.drag.is_none());
    assert_eq!(harness.app.table.sort().get(), None);
}

#[test]
fn test_header_drag_reorders_columns() {
    let mut harness = TuiHarness::new();
    harness.app.table.set_reordering_enabled(true);

    harness.mouse(mouse_down(48, 5));
    harness.app.update(datagrid_tui::Action::Mouse(mouse_up(8, 5)));

    assert_eq!(
        harness.app.table.layout().order(),
        &[AMOUNT, NAME, STATUS, CREATED]
    );
    assert_eq!(harness.app.cursor_column_index(), Some(AMOUNT));
}

#[test]
fn test_header_press_and_release_in_place_sorts_when_reordering() {
    let mut harness = TuiHarness::new();
    harness.app.table.set_reordering_enabled(true);
    harness.click(48, 5);
    assert_eq!(harness.app.table.sort().column(), Some(AMOUNT));
    assert_eq!(harness.app.table.layout().order(), &[NAME, STATUS, CREATED, AMOUNT]);
}

#[test]
fn test_scroll_wheel_moves_row_cursor() {
    use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};

    let scroll = |kind| MouseEvent {
        kind,
        column: 20,
        row: 8,
        modifiers: KeyModifiers::empty(),
    };
    let mut harness = TuiHarness::new();
    harness.mouse(scroll(MouseEventKind::ScrollDown));
    harness.mouse(scroll(MouseEventKind::ScrollDown));
    assert_eq!(harness.app.cursor_row, 2);

    harness.mouse(scroll(MouseEventKind::ScrollUp));
    assert_eq!(harness.app.cursor_row, 1);
}
