//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Split the screen into header, toolbar, table, paginator and footer
//! - Draw open popups above everything else
//! - Record the frame's hit map and bind popup anchors from it
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate table state

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::App;
use crate::app::layout::LayoutMap;
use crate::app::state::{
    FOOTER_HEIGHT, HEADER_HEIGHT, PAGINATOR_HEIGHT, PopupKey, SELECT_COLUMN_WIDTH, TOOLBAR_HEIGHT,
};
use crate::ui;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();

        let [header, toolbar, table, paginator, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(PAGINATOR_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(f.area());

        // Table interior minus borders and the checkbox column.
        self.scroll_columns_into_view(table.width.saturating_sub(2 + SELECT_COLUMN_WIDTH));

        let mut map = LayoutMap::default();
        ui::chrome::render_header(f, header, self);
        ui::toolbar::render_toolbar(f, toolbar, self, &mut map);
        ui::table::render_table(f, table, self, &mut map);
        ui::paginator::render_paginator(f, paginator, self, &mut map);
        ui::chrome::render_footer(f, footer, self);
        ui::popups::render_popups(f, self, &mut map);

        self.bind_popup_anchors(&map);
        self.layout = map;
    }

    /// Bind every open popup's drawn area as its anchor and clear the
    /// anchors of closed ones. The nested `Columns` area is added to the
    /// `Features` anchor as a second region while both are open.
    fn bind_popup_anchors(&mut self, map: &LayoutMap) {
        let keys: Vec<PopupKey> = self.popups.keys().collect();
        for key in keys {
            let drawn = map
                .popup_area(key)
                .filter(|_| self.popups.is_open(key));
            let Some(area) = drawn else {
                self.popups.clear_anchor(key);
                continue;
            };
            self.popups.bind_anchor(key, area);
            if key == PopupKey::Features
                && let Some(columns) = map.popup_area(PopupKey::Columns)
            {
                self.popups.extend_anchor(key, columns);
            }
        }
    }

    /// Adjust `column_offset` so the cursor column is drawn.
    fn scroll_columns_into_view(&mut self, available: u16) {
        self.clamp_cursors();
        let visible = self.table.layout().visible_order();
        if self.cursor_column < self.column_offset {
            self.column_offset = self.cursor_column;
        }
        let span = |from: usize, to: usize| -> u32 {
            visible[from..=to]
                .iter()
                .map(|&column| u32::from(self.table.layout().width(column)) + 1)
                .sum()
        };
        while self.column_offset < self.cursor_column
            && span(self.column_offset, self.cursor_column) > u32::from(available)
        {
            self.column_offset += 1;
        }
    }
}
