//! datagrid TUI library
//!
//! This library provides the table model, the popup visibility manager,
//! and the application state and rendering for the datagrid terminal UI.
//!
//! # Example
//!
//! ```rust
//! use crossterm::event::{KeyCode, KeyEvent};
//! use datagrid_config::ColorTheme;
//! use datagrid_tui::table::{ColumnDef, Dataset, Row, TableState};
//! use datagrid_tui::{Action, App};
//!
//! let dataset = Dataset::new(
//!     "People",
//!     vec![ColumnDef::new("name")],
//!     vec![Row::new(vec!["Ada".to_string()])],
//! );
//! let mut app = App::new(TableState::new(dataset, 5), ColorTheme::Default).unwrap();
//! assert_eq!(
//!     app.handle_input(KeyEvent::from(KeyCode::Char('q'))),
//!     Some(Action::Quit)
//! );
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod data;
pub mod popup;
pub mod runtime;
pub mod table;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT, PopupKey};
pub use popup::{PointerListener, PointerSubscription, PopupManager};
pub use table::{Dataset, TableState};
