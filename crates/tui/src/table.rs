//! Table state engine.
//!
//! Responsibilities:
//! - Hold a loaded dataset and derive the visible rows from it: value
//!   filters, date ranges, global search, sort, then pagination.
//! - Own column layout (order, visibility, width) and row selection.
//!
//! Does NOT handle:
//! - Reading data files (see `data`).
//! - Rendering or input mapping (see `ui` and `app`).
//!
//! Invariants:
//! - The filtered view is rebuilt after every mutation that can change it.
//! - The page index always addresses an existing page, or 0 when empty.

mod column;
mod filter;
mod model;
mod pagination;
mod sort;
mod state;

pub use column::{ColumnDef, ColumnLayout, FilterKind};
pub use filter::{DateRange, FilterState, parse_date};
pub use model::{Dataset, Row};
pub use pagination::Pagination;
pub use sort::{CellKind, SortDirection, SortState, compare_cells};
pub use state::TableState;
