//! Popup rendering.
//!
//! Open popups are drawn last, over the table, each cleared with `Clear`.
//! Placement follows the control that opens them: `Features` below its
//! toolbar button, `Columns` beside `Features`, and a filter popup below
//! its column header.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::layout::{Control, LayoutMap};
use crate::app::{PopupOption, PopupRow};
use crate::app::state::PopupKey;
use crate::app::App;
use crate::ui::theme::ThemeExt;

/// Narrowest popup, borders included.
const MIN_POPUP_WIDTH: u16 = 22;
/// Width of the checkbox prefix on every option row.
const MARK_WIDTH: u16 = 4;

pub fn render_popups(f: &mut Frame, app: &App, map: &mut LayoutMap) {
    let screen = f.area();
    let mut open = app.popups.open_keys();
    // Filters at the bottom, the nested column list on top.
    open.sort_by_key(|key| match key {
        PopupKey::Filter(_) => 0,
        PopupKey::Features => 1,
        PopupKey::Columns => 2,
    });

    for key in open {
        let rows = app.popup_rows(key);
        let area = popup_area(app, key, &rows, screen, map);
        draw_popup(f, app, key, &rows, area, map);
        map.popups.push((key, area));
    }
}

fn popup_title(app: &App, key: PopupKey) -> String {
    match key {
        PopupKey::Filter(column) => format!(
            " Filter: {} ",
            app.table.column(column).map_or("", |def| def.title())
        ),
        other => format!(" {} ", other.title()),
    }
}

fn popup_area(app: &App, key: PopupKey, rows: &[PopupRow], screen: Rect, map: &LayoutMap) -> Rect {
    let label_width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    let title_width = popup_title(app, key).chars().count();
    let width = (label_width + usize::from(MARK_WIDTH) + 2)
        .max(title_width + 2)
        .max(usize::from(MIN_POPUP_WIDTH));
    let width = u16::try_from(width).unwrap_or(u16::MAX);
    let height = u16::try_from(rows.len() + 2).unwrap_or(u16::MAX);

    let below_features_button = || {
        map.control_area(Control::Features)
            .map_or((screen.x, screen.y), |button| (button.x, button.bottom()))
    };

    let (x, y) = match key {
        PopupKey::Features => below_features_button(),
        PopupKey::Columns => match map.popup_area(PopupKey::Features) {
            Some(features) => {
                // Level with the "Show/Hide columns" row.
                let y = features.y + 1 + 2;
                if features.right().saturating_add(width) <= screen.right() {
                    (features.right(), y)
                } else {
                    (features.x.saturating_sub(width), y)
                }
            }
            None => below_features_button(),
        },
        PopupKey::Filter(column) => map
            .header_area(column)
            .map_or((map.table_body.x, map.table_body.y), |header| {
                (header.x, header.bottom())
            }),
    };

    fit(screen, x, y, width, height)
}

/// Place a `width` x `height` box at (x, y), shifted and shrunk to stay on
/// screen.
fn fit(screen: Rect, x: u16, y: u16, width: u16, height: u16) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    let x = x.min(screen.right().saturating_sub(width)).max(screen.x);
    let y = y.min(screen.bottom().saturating_sub(height)).max(screen.y);
    Rect::new(x, y, width, height)
}

fn draw_popup(
    f: &mut Frame,
    app: &App,
    key: PopupKey,
    rows: &[PopupRow],
    area: Rect,
    map: &mut LayoutMap,
) {
    let theme = &app.theme;
    let focused = app.focused_popup() == Some(key);

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.border_focused()
        } else {
            theme.border()
        })
        .title(Span::styled(popup_title(app, key), theme.title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    for (index, row) in rows.iter().enumerate() {
        let Ok(offset) = u16::try_from(index) else {
            break;
        };
        let y = inner.y.saturating_add(offset);
        if y >= inner.bottom() {
            break;
        }
        let line_area = Rect::new(inner.x, y, inner.width, 1);

        let mark = match row.checked {
            Some(checked) => crate::ui::checkbox(checked),
            None => "    ",
        };
        let mut label = row.label.clone();

        if let (Some(edit), PopupOption::DateBound(bound)) = (&app.date_edit, &row.option)
            && key == PopupKey::Filter(edit.column)
            && edit.bound == *bound
        {
            let prefix = format!("{:<6}", format!("{}:", bound.label()));
            let value = if edit.input.is_empty() {
                edit.input.placeholder().unwrap_or_default()
            } else {
                edit.input.value()
            };
            label = format!("{prefix}{value}");

            let cursor = u16::try_from(edit.input.cursor_position()).unwrap_or(u16::MAX);
            let x = inner
                .x
                .saturating_add(MARK_WIDTH + 6)
                .saturating_add(cursor)
                .min(inner.right().saturating_sub(1));
            f.set_cursor_position(Position::new(x, y));
        }

        let style = if focused && index == app.popup_cursor {
            theme.highlight()
        } else {
            theme.text()
        };
        f.render_widget(Paragraph::new(format!("{mark}{label}")).style(style), line_area);
        map.popup_options.push((line_area, key, index));
    }
}
