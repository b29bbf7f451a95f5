//! Popup visibility management.
//!
//! Responsibilities:
//! - Track the open/closed flag of a fixed set of popup keys.
//! - Close popups when a pointer-down lands outside their anchor region.
//! - Hold a pointer listener only while at least one popup is open.
//!
//! Does NOT handle:
//! - Drawing popups (see `ui::popups`).
//! - Deciding what a click inside a popup does (see `app::mouse`).
//!
//! Invariants:
//! - Every key declared at construction has exactly one flag for the
//!   manager's lifetime; the key set never changes.
//! - The listener is attached exactly while some popup is open.

mod listener;
mod manager;

pub use listener::{PointerListener, PointerSubscription};
pub use manager::{PopupError, PopupManager};
