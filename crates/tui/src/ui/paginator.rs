//! Paginator line: row total, first/previous buttons, the page window and
//! next/last buttons.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::app::layout::{LayoutMap, PagerButton};
use crate::ui::theme::ThemeExt;

pub fn render_paginator(f: &mut Frame, area: Rect, app: &App, map: &mut LayoutMap) {
    let theme = &app.theme;
    let table = &app.table;
    let current = table.pagination().page_index() + 1;

    let mut items: Vec<(String, Option<PagerButton>, Style)> =
        vec![(format!("Total: {}  ", table.total_rows()), None, theme.text())];

    let mut push_button = |label: String, button: PagerButton, enabled: bool, style: Style| {
        let style = if enabled { style } else { theme.disabled() };
        items.push((label, enabled.then_some(button), style));
    };

    push_button(" « ".into(), PagerButton::First, table.can_previous(), theme.text());
    push_button(" ‹ ".into(), PagerButton::Previous, table.can_previous(), theme.text());
    for page in table.page_window() {
        let style = if page == current {
            theme.highlight()
        } else {
            theme.text()
        };
        push_button(format!(" {page} "), PagerButton::Page(page), true, style);
    }
    push_button(" › ".into(), PagerButton::Next, table.can_next(), theme.text());
    push_button(" » ".into(), PagerButton::Last, table.can_next(), theme.text());

    let pages = table.page_count();
    if pages > 0 {
        items.push((
            format!("  Page {current} of {pages}"),
            None,
            theme.text_dim(),
        ));
    }

    let mut x = area.x;
    let mut spans = Vec::with_capacity(items.len());
    for (label, button, style) in items {
        let width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
        if let Some(button) = button
            && x.saturating_add(width) <= area.right()
        {
            map.pager.push((Rect::new(x, area.y, width, 1), button));
        }
        x = x.saturating_add(width);
        spans.push(Span::styled(label, style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
