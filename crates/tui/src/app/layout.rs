//! Hit map of the last rendered frame.
//!
//! Rendering records where every clickable element was drawn; mouse
//! handling resolves positions against it. The map is replaced wholesale
//! on each frame.

use ratatui::layout::{Position, Rect};

use super::state::PopupKey;

/// Toolbar controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Search,
    Filters,
    Features,
    PageSize,
}

/// Paginator buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerButton {
    First,
    Previous,
    Page(usize),
    Next,
    Last,
}

/// Hit regions of one header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderHit {
    pub column: usize,
    pub area: Rect,
    pub filter_marker: Option<Rect>,
    pub resize_handle: Option<Rect>,
}

/// Everything clickable in the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutMap {
    pub controls: Vec<(Rect, Control)>,
    pub select_page: Option<Rect>,
    pub headers: Vec<HeaderHit>,
    /// Body rows: area, dataset row index, checkbox area.
    pub rows: Vec<(Rect, usize, Rect)>,
    pub pager: Vec<(Rect, PagerButton)>,
    /// Popup option rows: area, popup, option index.
    pub popup_options: Vec<(Rect, PopupKey, usize)>,
    /// Drawn popup areas, top-most last.
    pub popups: Vec<(PopupKey, Rect)>,
    pub table_body: Rect,
}

impl LayoutMap {
    pub fn control_at(&self, position: Position) -> Option<Control> {
        self.controls
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|&(_, control)| control)
    }

    pub fn control_area(&self, control: Control) -> Option<Rect> {
        self.controls
            .iter()
            .find(|(_, c)| *c == control)
            .map(|&(area, _)| area)
    }

    pub fn header_at(&self, position: Position) -> Option<HeaderHit> {
        self.headers
            .iter()
            .find(|hit| hit.area.contains(position))
            .copied()
    }

    pub fn header_area(&self, column: usize) -> Option<Rect> {
        self.headers
            .iter()
            .find(|hit| hit.column == column)
            .map(|hit| hit.area)
    }

    pub fn row_at(&self, position: Position) -> Option<(usize, bool)> {
        self.rows
            .iter()
            .find(|(area, _, _)| area.contains(position))
            .map(|&(_, row, checkbox)| (row, checkbox.contains(position)))
    }

    pub fn pager_at(&self, position: Position) -> Option<PagerButton> {
        self.pager
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|&(_, button)| button)
    }

    /// Option row under the pointer, searching top-most popups first.
    pub fn popup_option_at(&self, position: Position) -> Option<(PopupKey, usize)> {
        self.popup_options
            .iter()
            .rev()
            .find(|(area, _, _)| area.contains(position))
            .map(|&(_, key, index)| (key, index))
    }

    pub fn popup_area(&self, key: PopupKey) -> Option<Rect> {
        self.popups
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, area)| area)
    }
}
