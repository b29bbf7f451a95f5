//! Table rendering: header cells with sort and filter markers, the current
//! page of rows, and the empty-result row.
//!
//! Columns are laid out left to right from `App::column_offset` using the
//! layout widths plus one separator cell; anything past the right border
//! is clipped.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::app::layout::{HeaderHit, LayoutMap};
use crate::app::state::SELECT_COLUMN_WIDTH;
use crate::ui::checkbox;
use crate::ui::theme::ThemeExt;

/// Horizontal slot of one drawn column.
#[derive(Debug, Clone, Copy)]
struct ColumnSpan {
    column: usize,
    x: u16,
    width: u16,
}

pub fn render_table(f: &mut Frame, area: Rect, app: &App, map: &mut LayoutMap) {
    let theme = &app.theme;
    let table = &app.table;

    let title = format!(
        " {} ({} rows, {} selected) ",
        table.title(),
        table.total_rows(),
        table.selected_count()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(title, theme.title()));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let header_y = inner.y;
    let body = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(1),
    );
    map.table_body = body;

    let select_area = Rect::new(inner.x, header_y, SELECT_COLUMN_WIDTH.min(inner.width), 1);
    f.render_widget(
        Paragraph::new(checkbox(table.is_page_selected())).style(theme.table_header()),
        select_area,
    );
    map.select_page = Some(select_area);

    let spans = column_spans(app, inner);
    for span in &spans {
        render_header_cell(f, app, *span, header_y, map);
    }

    let page_rows = table.page_rows();
    if page_rows.is_empty() {
        if body.height > 0 {
            f.render_widget(
                Paragraph::new("No items found")
                    .alignment(Alignment::Center)
                    .style(theme.text_dim()),
                Rect::new(body.x, body.y, body.width, 1),
            );
        }
        return;
    }

    for (position, &row_index) in page_rows.iter().enumerate() {
        let Ok(offset) = u16::try_from(position) else {
            break;
        };
        let y = body.y.saturating_add(offset);
        if y >= body.bottom() {
            break;
        }
        let Some(row) = table.row(row_index) else {
            continue;
        };

        let style = if position == app.cursor_row {
            theme.highlight()
        } else {
            theme.text()
        };
        let row_area = Rect::new(body.x, y, body.width, 1);
        f.buffer_mut().set_style(row_area, style);

        let checkbox_area = Rect::new(body.x, y, SELECT_COLUMN_WIDTH.min(body.width), 1);
        f.render_widget(
            Paragraph::new(checkbox(table.is_selected(row_index))).style(style),
            checkbox_area,
        );
        for span in &spans {
            f.render_widget(
                Paragraph::new(row.cell(span.column).to_string()).style(style),
                Rect::new(span.x, y, span.width, 1),
            );
        }
        map.rows.push((row_area, row_index, checkbox_area));
    }
}

fn column_spans(app: &App, inner: Rect) -> Vec<ColumnSpan> {
    let layout = app.table.layout();
    let right = inner.right();
    let mut x = inner.x.saturating_add(SELECT_COLUMN_WIDTH);
    let mut spans = Vec::new();
    for column in layout
        .visible_order()
        .into_iter()
        .skip(app.column_offset)
    {
        if x >= right {
            break;
        }
        let width = layout.width(column).min(right - x);
        spans.push(ColumnSpan { column, x, width });
        x = x.saturating_add(layout.width(column)).saturating_add(1);
    }
    spans
}

fn render_header_cell(f: &mut Frame, app: &App, span: ColumnSpan, y: u16, map: &mut LayoutMap) {
    let theme = &app.theme;
    let table = &app.table;
    let layout = table.layout();
    let Some(def) = table.column(span.column) else {
        return;
    };

    let area = Rect::new(span.x, y, span.width, 1);
    let mut style = theme.table_header();
    if app.cursor_column_index() == Some(span.column) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    f.buffer_mut().set_style(area, style);

    let resize_handle = (layout.resizing_enabled() && def.resizable && area.width >= 2)
        .then(|| Rect::new(area.right() - 1, y, 1, 1));
    let content_width = area.width - u16::from(resize_handle.is_some());
    let filter_marker = (def.filter.is_some() && content_width >= 3)
        .then(|| Rect::new(area.x + content_width - 1, y, 1, 1));
    let text_width = content_width.saturating_sub(if filter_marker.is_some() { 2 } else { 0 });

    let mut label = String::new();
    if layout.reordering_enabled() {
        label.push_str("⠿ ");
    }
    label.push_str(def.title());
    if def.sortable {
        label.push(' ');
        label.push_str(
            table
                .sort()
                .direction_for(span.column)
                .map_or("↕", |direction| direction.indicator()),
        );
    }
    f.render_widget(
        Paragraph::new(label).style(style),
        Rect::new(area.x, y, text_width, 1),
    );

    if let Some(marker) = filter_marker {
        let active = table.has_active_filter(span.column);
        f.render_widget(
            Paragraph::new("≡").style(theme.filter_marker(active)),
            marker,
        );
    }
    if let Some(handle) = resize_handle {
        f.render_widget(Paragraph::new("│").style(theme.border()), handle);
    }

    map.headers.push(HeaderHit {
        column: span.column,
        area,
        filter_marker,
        resize_handle,
    });
}
