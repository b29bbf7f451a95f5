//! Column definitions and the mutable column layout.

use datagrid_config::TableLayout;
use datagrid_config::constants::{DEFAULT_COLUMN_WIDTH, MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
use serde::{Deserialize, Serialize};

/// Kind of per-column filter offered in the column's filter popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Checkbox list of the column's distinct values.
    Values,
    /// Inclusive from/to date bounds.
    DateRange,
}

fn default_true() -> bool {
    true
}

fn default_min_width() -> u16 {
    MIN_COLUMN_WIDTH
}

/// Static description of a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub id: String,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default = "default_min_width")]
    pub min_width: u16,
    #[serde(default = "default_true")]
    pub sortable: bool,
    #[serde(default = "default_true")]
    pub hideable: bool,
    #[serde(default = "default_true")]
    pub resizable: bool,
    /// Hidden when the table first loads.
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub filter: Option<FilterKind>,
}

impl ColumnDef {
    /// Sortable, hideable, resizable column without a filter.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: None,
            width: None,
            min_width: MIN_COLUMN_WIDTH,
            sortable: true,
            hideable: true,
            resizable: true,
            hidden: false,
            filter: None,
        }
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_filter(mut self, filter: FilterKind) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.hideable = false;
        self
    }

    /// Header text, falling back to the id.
    pub fn title(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.id)
    }

    /// Width before any resizing, never below `min_width`.
    pub fn initial_width(&self) -> u16 {
        self.width
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
            .clamp(self.min_width, MAX_COLUMN_WIDTH.max(self.min_width))
    }
}

/// Order, visibility and width of every column, plus the two layout
/// switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    order: Vec<usize>,
    visible: Vec<bool>,
    widths: Vec<u16>,
    resizing_enabled: bool,
    reordering_enabled: bool,
}

impl ColumnLayout {
    /// Declared order and widths; columns marked `hidden` start hidden.
    pub fn new(columns: &[ColumnDef]) -> Self {
        Self {
            order: (0..columns.len()).collect(),
            visible: columns.iter().map(|c| !c.hidden).collect(),
            widths: columns.iter().map(ColumnDef::initial_width).collect(),
            resizing_enabled: false,
            reordering_enabled: false,
        }
    }

    /// All column indices in display order, hidden ones included.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Visible column indices in display order.
    pub fn visible_order(&self) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|&column| self.is_visible(column))
            .collect()
    }

    pub fn is_visible(&self, column: usize) -> bool {
        self.visible.get(column).copied().unwrap_or(false)
    }

    pub fn width(&self, column: usize) -> u16 {
        self.widths.get(column).copied().unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    pub fn resizing_enabled(&self) -> bool {
        self.resizing_enabled
    }

    pub fn reordering_enabled(&self) -> bool {
        self.reordering_enabled
    }

    pub fn set_resizing_enabled(&mut self, enabled: bool) {
        self.resizing_enabled = enabled;
    }

    pub fn set_reordering_enabled(&mut self, enabled: bool) {
        self.reordering_enabled = enabled;
    }

    /// Flip visibility of a hideable column. Returns whether it changed.
    pub fn toggle_visibility(&mut self, columns: &[ColumnDef], column: usize) -> bool {
        match (columns.get(column), self.visible.get_mut(column)) {
            (Some(def), Some(visible)) if def.hideable => {
                *visible = !*visible;
                true
            }
            _ => false,
        }
    }

    /// Show every column, or hide every hideable one.
    pub fn set_all_visible(&mut self, columns: &[ColumnDef], visible: bool) {
        for (flag, def) in self.visible.iter_mut().zip(columns) {
            if visible || def.hideable {
                *flag = visible;
            }
        }
    }

    pub fn all_visible(&self) -> bool {
        self.visible.iter().all(|&visible| visible)
    }

    /// Move `column` to the display position currently held by `target`.
    ///
    /// Follows array-move semantics: the column is removed from its slot
    /// and reinserted at the target's index. Ignored unless reordering is
    /// enabled.
    pub fn move_column(&mut self, column: usize, target: usize) -> bool {
        if !self.reordering_enabled || column == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(column), self.position(target)) else {
            return false;
        };
        let moved = self.order.remove(from);
        self.order.insert(to, moved);
        true
    }

    /// Grow or shrink a resizable column. Ignored unless resizing is enabled.
    pub fn resize(&mut self, columns: &[ColumnDef], column: usize, delta: i32) -> bool {
        let current = i32::from(self.width(column));
        let target = (current + delta).clamp(0, i32::from(u16::MAX));
        self.set_width(columns, column, u16::try_from(target).unwrap_or(u16::MAX))
    }

    /// Set an absolute width, clamped to the column's bounds.
    pub fn set_width(&mut self, columns: &[ColumnDef], column: usize, width: u16) -> bool {
        if !self.resizing_enabled {
            return false;
        }
        let Some(def) = columns.get(column).filter(|def| def.resizable) else {
            return false;
        };
        let clamped = width.clamp(def.min_width, MAX_COLUMN_WIDTH.max(def.min_width));
        match self.widths.get_mut(column) {
            Some(slot) if *slot != clamped => {
                *slot = clamped;
                true
            }
            _ => false,
        }
    }

    /// Display position of `column`.
    pub fn position(&self, column: usize) -> Option<usize> {
        self.order.iter().position(|&c| c == column)
    }

    /// Restore a remembered layout. Unknown ids are skipped; columns the
    /// layout does not mention keep their declared order after the
    /// remembered ones.
    pub fn apply_persisted(&mut self, columns: &[ColumnDef], layout: &TableLayout) {
        let index_of = |id: &str| columns.iter().position(|c| c.id == id);

        if !layout.column_order.is_empty() {
            let mut order: Vec<usize> = Vec::with_capacity(columns.len());
            for column in layout.column_order.iter().filter_map(|id| index_of(id)) {
                if !order.contains(&column) {
                    order.push(column);
                }
            }
            for column in 0..columns.len() {
                if !order.contains(&column) {
                    order.push(column);
                }
            }
            self.order = order;
        }

        for (column, def) in columns.iter().enumerate() {
            let hidden = layout.hidden_columns.iter().any(|id| id == &def.id);
            self.visible[column] = !(hidden && def.hideable);
        }

        for (id, &width) in &layout.column_widths {
            if let Some(column) = index_of(id) {
                let def = &columns[column];
                self.widths[column] = width.clamp(def.min_width, MAX_COLUMN_WIDTH.max(def.min_width));
            }
        }

        self.resizing_enabled = layout.resizing_enabled;
        self.reordering_enabled = layout.reordering_enabled;
    }

    /// Snapshot for persistence; the page size is filled by the caller.
    pub fn to_persisted(&self, columns: &[ColumnDef]) -> TableLayout {
        TableLayout {
            column_order: self.order.iter().map(|&c| columns[c].id.clone()).collect(),
            hidden_columns: columns
                .iter()
                .enumerate()
                .filter(|(column, _)| !self.is_visible(*column))
                .map(|(_, def)| def.id.clone())
                .collect(),
            column_widths: columns
                .iter()
                .enumerate()
                .map(|(column, def)| (def.id.clone(), self.width(column)))
                .collect(),
            page_size: None,
            resizing_enabled: self.resizing_enabled,
            reordering_enabled: self.reordering_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("name").fixed(),
            ColumnDef::new("email").hidden(),
            ColumnDef::new("status").with_width(10),
            ColumnDef::new("kind"),
        ]
    }

    #[test]
    fn test_new_respects_initially_hidden() {
        let layout = ColumnLayout::new(&columns());
        assert_eq!(layout.visible_order(), vec![0, 2, 3]);
        assert!(!layout.all_visible());
        assert_eq!(layout.width(2), 10);
        assert_eq!(layout.width(0), DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn test_fixed_column_cannot_be_hidden() {
        let defs = columns();
        let mut layout = ColumnLayout::new(&defs);
        assert!(!layout.toggle_visibility(&defs, 0));
        layout.set_all_visible(&defs, false);
        assert_eq!(layout.visible_order(), vec![0]);
        layout.set_all_visible(&defs, true);
        assert!(layout.all_visible());
    }

    #[test]
    fn test_move_column_uses_array_move() {
        let mut layout = ColumnLayout::new(&columns());
        assert!(!layout.move_column(0, 3), "reordering is off by default");

        layout.set_reordering_enabled(true);
        assert!(layout.move_column(0, 3));
        assert_eq!(layout.order(), &[1, 2, 3, 0]);
        assert!(layout.move_column(3, 1));
        assert_eq!(layout.order(), &[3, 1, 2, 0]);
    }

    #[test]
    fn test_resize_clamps_to_min_width() {
        let defs = columns();
        let mut layout = ColumnLayout::new(&defs);
        assert!(!layout.resize(&defs, 2, 4), "resizing is off by default");

        layout.set_resizing_enabled(true);
        assert!(layout.resize(&defs, 2, 4));
        assert_eq!(layout.width(2), 14);
        layout.resize(&defs, 2, -100);
        assert_eq!(layout.width(2), MIN_COLUMN_WIDTH);
        layout.resize(&defs, 2, 10_000);
        assert_eq!(layout.width(2), MAX_COLUMN_WIDTH);
    }

    #[test]
    fn test_persisted_layout_round_trip() {
        let defs = columns();
        let mut layout = ColumnLayout::new(&defs);
        layout.set_reordering_enabled(true);
        layout.move_column(3, 0);
        layout.toggle_visibility(&defs, 1);

        let saved = layout.to_persisted(&defs);
        let mut restored = ColumnLayout::new(&defs);
        restored.apply_persisted(&defs, &saved);
        assert_eq!(restored, layout);
    }

    #[test]
    fn test_apply_persisted_skips_unknown_ids() {
        let defs = columns();
        let mut layout = ColumnLayout::new(&defs);
        layout.apply_persisted(
            &defs,
            &TableLayout {
                column_order: vec!["kind".into(), "gone".into()],
                hidden_columns: vec!["name".into()],
                ..TableLayout::default()
            },
        );
        assert_eq!(layout.order(), &[3, 0, 1, 2]);
        assert!(layout.is_visible(0), "fixed columns stay visible");
        assert!(layout.is_visible(1), "remembered layout wins over declared hidden");
    }
}
