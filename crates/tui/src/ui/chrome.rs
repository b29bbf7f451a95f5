//! Header and footer lines.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::theme::ThemeExt;

const HELP: &str = "q quit  / search  j/k rows  h/l columns  s sort  f filter  F features  c columns  n/p page  ]/[ rows per page  t theme";

/// Application name, table title and theme name.
pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let left = Line::from(vec![
        Span::styled("datagrid", theme.title()),
        Span::styled(" │ ", theme.border()),
        Span::styled(app.table.title().to_string(), theme.text()),
    ]);
    f.render_widget(Paragraph::new(left), area);

    let right = Span::styled(format!("Theme: {} ", app.color_theme), theme.text_dim());
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), area);
}

/// Status message when there is one, otherwise key hints.
pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let line = match &app.status {
        Some(message) => Span::styled(message.clone(), theme.error()),
        None => Span::styled(HELP, theme.text_dim()),
    };
    f.render_widget(Paragraph::new(line), area);
}
