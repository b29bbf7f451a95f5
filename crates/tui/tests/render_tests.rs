//! Rendering tests against an in-memory terminal.
//!
//! These check the drawn text of each screen region and the hit map the
//! frame leaves behind for mouse handling.

mod helpers;

use datagrid_tui::app::PopupKey;
use helpers::*;
use ratatui::layout::Rect;

#[test]
fn test_header_shows_app_title_and_theme() {
    let mut harness = TuiHarness::new();
    let line = harness.line(0);
    assert!(line.starts_with("datagrid"));
    assert!(line.contains("People"));
    assert!(line.contains("Theme: Default"));
}

#[test]
fn test_table_block_title_counts_rows_and_selection() {
    let mut harness = TuiHarness::new();
    harness.app.table.toggle_row_selected(0);
    assert!(harness.line(4).contains("People (12 rows, 1 selected)"));
}

#[test]
fn test_first_page_rows_are_drawn() {
    let mut harness = TuiHarness::new();
    let header = harness.line(5);
    assert!(header.contains("name ↕"));
    assert!(header.contains("status ↕"));
    assert!(header.contains('≡'));

    assert!(harness.line(6).contains("[ ] Ada"));
    assert!(harness.line(10).contains("Eve"));
    assert!(!harness.line(11).contains("Finn"));
}

#[test]
fn test_sort_indicator_follows_direction() {
    let mut harness = TuiHarness::new();
    harness.app.table.cycle_sort(AMOUNT);
    assert!(harness.line(5).contains("amount ▲"));

    harness.app.table.cycle_sort(AMOUNT);
    assert!(harness.line(5).contains("amount ▼"));
}

#[test]
fn test_paginator_shows_total_and_page_position() {
    let mut harness = TuiHarness::new();
    let line = harness.line(28);
    assert!(line.starts_with("Total: 12"));
    assert!(line.contains(" 1  2  3 "));
    assert!(line.contains("Page 1 of 3"));

    harness.app.table.last_page();
    assert!(harness.line(28).contains("Page 3 of 3"));
}

#[test]
fn test_empty_search_result_shows_placeholder_row() {
    let mut harness = TuiHarness::new();
    harness.press(key('/'));
    for c in "zzz".chars() {
        harness.press(key(c));
    }

    let screen = harness.render();
    assert!(screen.contains("No items found"));
    assert!(screen.contains("Total: 0"));
    assert!(!screen.contains("Page 1 of"));
}

#[test]
fn test_search_box_shows_query() {
    let mut harness = TuiHarness::new();
    harness.press(key('/'));
    for c in "ada".chars() {
        harness.press(key(c));
    }
    assert!(harness.line(2).contains("ada"));
    assert!(harness.line(1).contains("Search"));
}

#[test]
fn test_toolbar_shows_page_size() {
    let mut harness = TuiHarness::new();
    assert!(harness.line(2).contains("Rows: 5"));
    harness.press(key(']'));
    assert!(harness.line(2).contains("Rows: 10"));
}

#[test]
fn test_features_popup_is_drawn_and_anchored() {
    let mut harness = TuiHarness::new();
    harness.press(key('F'));
    let screen = harness.render();

    assert!(screen.contains(" Features "));
    assert!(screen.contains("Show/Hide columns"));
    assert_eq!(
        harness.app.popups.anchor(PopupKey::Features),
        Some(Rect::new(75, 4, 25, 5))
    );
}

#[test]
fn test_nested_columns_popup_extends_features_anchor() {
    let mut harness = TuiHarness::new();
    harness.press(key('F'));
    harness.press(key('c'));
    harness.render();

    assert_eq!(
        harness.app.popups.anchor_regions(PopupKey::Features),
        &[Rect::new(75, 4, 25, 5), Rect::new(53, 7, 22, 7)]
    );
    assert_eq!(
        harness.app.popups.anchor(PopupKey::Columns),
        Some(Rect::new(53, 7, 22, 7))
    );
}

#[test]
fn test_anchor_cleared_after_popup_closes() {
    let mut harness = TuiHarness::new();
    harness.press(key('F'));
    harness.render();
    harness.press(esc_key());
    let screen = harness.render();

    assert!(!screen.contains(" Features "));
    assert_eq!(harness.app.popups.anchor(PopupKey::Features), None);
}

#[test]
fn test_filter_popup_lists_values() {
    let mut harness = TuiHarness::new();
    harness.app.table.toggle_filter_value(STATUS, "pending");
    harness.app.focus_column(STATUS);
    harness.press(key('f'));
    let screen = harness.render();

    assert!(screen.contains(" Filter: status "));
    assert!(harness.line(7).contains("[ ] active"));
    assert!(harness.line(9).contains("[x] pending"));
    assert!(harness.line(10).contains("Clear filter"));
}

#[test]
fn test_footer_shows_status_message() {
    let mut harness = TuiHarness::new();
    assert!(harness.line(29).contains("q quit"));

    harness.press(key('>'));
    assert!(
        harness
            .line(29)
            .contains("Enable column reordering in Features (F)")
    );

    harness.press(key('j'));
    assert!(harness.line(29).contains("q quit"));
}

#[test]
fn test_hit_map_records_rows_and_headers() {
    let mut harness = TuiHarness::new();
    harness.render();

    let layout = &harness.app.layout;
    assert_eq!(layout.rows.len(), 5);
    assert_eq!(layout.headers.len(), 4);
    assert_eq!(layout.headers[1].area, Rect::new(16, 5, 12, 1));
    assert_eq!(layout.headers[1].filter_marker, Some(Rect::new(27, 5, 1, 1)));
    assert_eq!(layout.headers[0].filter_marker, None);
}

#[test]
fn test_small_terminal_does_not_panic() {
    let backend = ratatui::backend::TestBackend::new(20, 8);
    let mut terminal = ratatui::Terminal::new(backend).expect("terminal");
    let mut app = sample_app();
    app.update(datagrid_tui::Action::TogglePopup(PopupKey::Features));
    terminal.draw(|f| app.render(f)).expect("draw");
}
