//! Shared configuration types.

mod theme;

pub use theme::{ColorTheme, Theme};
