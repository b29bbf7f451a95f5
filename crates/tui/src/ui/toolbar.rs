//! Toolbar: search box and the popup trigger buttons.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::layout::{Control, LayoutMap};
use crate::app::state::{Focus, PopupKey};
use crate::app::App;
use crate::ui::theme::ThemeExt;

pub fn render_toolbar(f: &mut Frame, area: Rect, app: &App, map: &mut LayoutMap) {
    let theme = &app.theme;
    let [search, filters, features, page_size] = Layout::horizontal([
        Constraint::Min(20),
        Constraint::Length(11),
        Constraint::Length(12),
        Constraint::Length(12),
    ])
    .areas(area);

    let focused = app.focus == Focus::Search;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.border_focused()
        } else {
            theme.border()
        })
        .title(" Search ");
    let inner = block.inner(search);
    let text = if app.search_input.is_empty() {
        Span::styled(
            app.search_input.placeholder().unwrap_or_default().to_string(),
            theme.text_dim(),
        )
    } else {
        Span::styled(app.search_input.value().to_string(), theme.text())
    };
    f.render_widget(Paragraph::new(text).block(block), search);
    if focused {
        let offset = u16::try_from(app.search_input.cursor_position()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(offset).min(inner.right().saturating_sub(1));
        f.set_cursor_position(Position::new(x, inner.y));
    }
    map.controls.push((search, Control::Search));

    let any_filter = app
        .table
        .columns()
        .iter()
        .enumerate()
        .any(|(column, _)| app.table.has_active_filter(column));
    let filters_border = if any_filter {
        theme.filter_marker(true)
    } else {
        theme.border()
    };
    button(f, filters, "Filters", filters_border, theme.text());
    map.controls.push((filters, Control::Filters));

    let features_border = if app.popups.is_open(PopupKey::Features) {
        theme.border_focused()
    } else {
        theme.border()
    };
    button(f, features, "Features", features_border, theme.text());
    map.controls.push((features, Control::Features));

    let label = format!("Rows: {}", app.table.pagination().page_size());
    button(f, page_size, &label, theme.border(), theme.text());
    map.controls.push((page_size, Control::PageSize));
}

fn button(f: &mut Frame, area: Rect, label: &str, border: Style, text: Style) {
    let block = Block::default().borders(Borders::ALL).border_style(border);
    f.render_widget(
        Paragraph::new(label.to_string())
            .style(text)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
