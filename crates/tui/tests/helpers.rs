//! Test helpers for TUI testing.
//!
//! Provides key and mouse event builders, a sample dataset, and a
//! `TuiHarness` that renders the app into a `TestBackend`.
//!
//! With the harness's 100x30 terminal the sample table is drawn at fixed
//! positions:
//! - toolbar buttons on rows 1..4: Search x 0..65, Filters x 65..76,
//!   Features x 76..88, Rows x 88..100
//! - header row y = 5: select-all x 1..5, name x 5..15, status x 16..28
//!   (filter marker at x 27), created x 29..43 (marker at x 42),
//!   amount x 44..54
//! - body rows from y = 6, paginator on y = 28

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use datagrid_config::ColorTheme;
use datagrid_tui::action::Action;
use datagrid_tui::app::App;
use datagrid_tui::table::{ColumnDef, Dataset, FilterKind, Row, TableState};
use ratatui::{Terminal, backend::TestBackend};

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 30;

/// Column indices of the sample dataset.
pub const NAME: usize = 0;
pub const STATUS: usize = 1;
pub const CREATED: usize = 2;
pub const AMOUNT: usize = 3;

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create a Backspace key event.
pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn mouse(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column: x,
        row: y,
        modifiers: KeyModifiers::empty(),
    }
}

/// Left-button press.
pub fn mouse_down(x: u16, y: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), x, y)
}

/// Left-button drag.
pub fn mouse_drag(x: u16, y: u16) -> MouseEvent {
    mouse(MouseEventKind::Drag(MouseButton::Left), x, y)
}

/// Left-button release.
pub fn mouse_up(x: u16, y: u16) -> MouseEvent {
    mouse(MouseEventKind::Up(MouseButton::Left), x, y)
}

const SAMPLE_ROWS: [[&str; 4]; 12] = [
    ["Ada", "active", "2024-01-05", "120"],
    ["Bob", "inactive", "2024-02-10", "80"],
    ["Cleo", "active", "2024-03-15", "300"],
    ["Dan", "pending", "2024-04-20", "45"],
    ["Eve", "active", "2024-05-25", "99"],
    ["Finn", "inactive", "2024-06-30", "150"],
    ["Gus", "active", "2024-07-04", "10"],
    ["Hana", "pending", "2024-08-08", "75"],
    ["Ivy", "active", "2024-09-09", "210"],
    ["Jon", "inactive", "2024-10-10", "5"],
    ["Kai", "active", "2024-11-11", "60"],
    ["Lia", "pending", "2024-12-12", "130"],
];

/// Twelve people with a status value filter and a created date filter.
pub fn sample_dataset() -> Dataset {
    let columns = vec![
        ColumnDef::new("name").with_width(10),
        ColumnDef::new("status")
            .with_width(12)
            .with_filter(FilterKind::Values),
        ColumnDef::new("created")
            .with_width(14)
            .with_filter(FilterKind::DateRange),
        ColumnDef::new("amount").with_width(10),
    ];
    let rows = SAMPLE_ROWS
        .iter()
        .map(|cells| Row::new(cells.iter().map(|cell| cell.to_string()).collect()))
        .collect();
    Dataset::new("People", columns, rows)
}

pub fn sample_table() -> TableState {
    TableState::new(sample_dataset(), 5)
}

pub fn sample_app() -> App {
    App::new(sample_table(), ColorTheme::Default).expect("sample app")
}

/// Names of the rows on the current page, in display order.
pub fn page_names(app: &App) -> Vec<String> {
    app.table
        .page_rows()
        .iter()
        .map(|&row| app.table.row(row).expect("row").cell(NAME).to_string())
        .collect()
}

/// Renders the app into an in-memory terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    pub fn new() -> Self {
        Self::with_app(sample_app())
    }

    pub fn with_app(app: App) -> Self {
        let backend = TestBackend::new(WIDTH, HEIGHT);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }

    /// Render, then deliver a mouse event the way the event loop does.
    pub fn mouse(&mut self, event: MouseEvent) {
        self.render();
        self.app.update(Action::Mouse(event));
    }

    /// Render, then press and release the left button at one point.
    pub fn click(&mut self, x: u16, y: u16) {
        self.mouse(mouse_down(x, y));
        self.app.update(Action::Mouse(mouse_up(x, y)));
    }

    /// Deliver a key press the way the event loop does.
    pub fn press(&mut self, key: KeyEvent) {
        self.app.update(Action::Input(key));
    }

    /// Text of one rendered line.
    pub fn line(&mut self, y: u16) -> String {
        self.render()
            .lines()
            .nth(usize::from(y))
            .unwrap_or_default()
            .to_string()
    }
}

/// Convert a ratatui Buffer to a string, one line per row.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}
