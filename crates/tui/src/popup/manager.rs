//! Open/closed registry for a fixed set of popups.
//!
//! Keys are declared once. Each key carries an open flag and the anchor
//! regions bound by the renderer; a pointer-down outside every region of
//! an open popup's anchor closes it.

use std::fmt;

use ratatui::layout::{Position, Rect};
use thiserror::Error;

use super::listener::{PointerListener, PointerSubscription};

/// Errors raised while building a popup manager.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PopupError {
    #[error("a popup manager needs at least one key")]
    NoKeys,

    #[error("popup key {0} is declared more than once")]
    DuplicateKey(String),
}

#[derive(Debug, Clone)]
struct PopupSlot<K> {
    key: K,
    open: bool,
    anchor: Vec<Rect>,
}

/// Tracks which popups are open and closes them on outside clicks.
///
/// The manager owns a [`PointerListener`] and keeps it attached exactly
/// while at least one popup is open. Dropping the manager detaches it.
#[derive(Debug)]
pub struct PopupManager<K, L: PointerListener = PointerSubscription> {
    slots: Vec<PopupSlot<K>>,
    listener: L,
    listening: bool,
}

impl<K, L> PopupManager<K, L>
where
    K: Copy + Eq + fmt::Debug,
    L: PointerListener,
{
    /// Create a manager for `keys`, all initially closed.
    ///
    /// # Errors
    /// Returns `PopupError::NoKeys` for an empty key list and
    /// `PopupError::DuplicateKey` when a key appears twice.
    pub fn new(keys: impl IntoIterator<Item = K>, listener: L) -> Result<Self, PopupError> {
        let mut slots: Vec<PopupSlot<K>> = Vec::new();
        for key in keys {
            if slots.iter().any(|slot| slot.key == key) {
                return Err(PopupError::DuplicateKey(format!("{key:?}")));
            }
            slots.push(PopupSlot {
                key,
                open: false,
                anchor: Vec::new(),
            });
        }

        if slots.is_empty() {
            return Err(PopupError::NoKeys);
        }

        Ok(Self {
            slots,
            listener,
            listening: false,
        })
    }

    /// Declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.slots.iter().map(|slot| slot.key)
    }

    /// Whether `key` was declared at construction.
    pub fn contains_key(&self, key: K) -> bool {
        self.slots.iter().any(|slot| slot.key == key)
    }

    /// Current flag for `key`; unknown keys read as closed.
    pub fn is_open(&self, key: K) -> bool {
        self.slots
            .iter()
            .find(|slot| slot.key == key)
            .is_some_and(|slot| slot.open)
    }

    /// Whether any popup is open.
    pub fn any_open(&self) -> bool {
        self.slots.iter().any(|slot| slot.open)
    }

    /// Open keys in declaration order.
    pub fn open_keys(&self) -> Vec<K> {
        self.slots
            .iter()
            .filter(|slot| slot.open)
            .map(|slot| slot.key)
            .collect()
    }

    /// Flip the flag for `key`.
    pub fn toggle(&mut self, key: K) {
        if let Some(slot) = self.slot_mut(key, "toggle") {
            slot.open = !slot.open;
            tracing::debug!(key = ?key, open = slot.open, "Popup toggled");
        }
        self.sync_listener();
    }

    /// Open `key`; already-open popups stay open.
    pub fn open(&mut self, key: K) {
        if let Some(slot) = self.slot_mut(key, "open") {
            slot.open = true;
        }
        self.sync_listener();
    }

    /// Close `key`; closing a closed popup does nothing.
    pub fn close(&mut self, key: K) {
        if let Some(slot) = self.slot_mut(key, "close") {
            slot.open = false;
        }
        self.sync_listener();
    }

    /// Close every popup at once, returning the keys that were open.
    pub fn close_all(&mut self) -> Vec<K> {
        let mut closed = Vec::new();
        for slot in self.slots.iter_mut().filter(|slot| slot.open) {
            slot.open = false;
            closed.push(slot.key);
        }
        self.sync_listener();
        closed
    }

    /// Record the region drawn for `key`, replacing any earlier regions.
    pub fn bind_anchor(&mut self, key: K, region: Rect) {
        if let Some(slot) = self.slot_mut(key, "bind_anchor") {
            slot.anchor = vec![region];
        }
    }

    /// Add a further region to the anchor of `key`, such as a nested
    /// popup that belongs to it. Clicks in any region count as inside.
    pub fn extend_anchor(&mut self, key: K, region: Rect) {
        if let Some(slot) = self.slot_mut(key, "extend_anchor") {
            slot.anchor.push(region);
        }
    }

    /// Forget the regions recorded for `key`.
    pub fn clear_anchor(&mut self, key: K) {
        if let Some(slot) = self.slot_mut(key, "clear_anchor") {
            slot.anchor.clear();
        }
    }

    /// Primary region last bound for `key`.
    pub fn anchor(&self, key: K) -> Option<Rect> {
        self.anchor_regions(key).first().copied()
    }

    /// Every region bound for `key`; empty for unknown or unbound keys.
    pub fn anchor_regions(&self, key: K) -> &[Rect] {
        self.slots
            .iter()
            .find(|slot| slot.key == key)
            .map(|slot| slot.anchor.as_slice())
            .unwrap_or_default()
    }

    /// Whether the pointer listener is attached.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// The owned pointer listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Apply a pointer-down at `position`.
    ///
    /// Every open popup with a bound anchor none of whose regions contain
    /// the position is closed in the same pass; the closed keys are returned in
    /// declaration order. Open popups without an anchor stay open. Does
    /// nothing while the listener is detached.
    pub fn handle_pointer_down(&mut self, position: Position) -> Vec<K> {
        if !self.listening {
            return Vec::new();
        }

        let mut closed = Vec::new();
        for slot in self.slots.iter_mut().filter(|slot| slot.open) {
            if !slot.anchor.is_empty()
                && !slot.anchor.iter().any(|region| region.contains(position))
            {
                slot.open = false;
                closed.push(slot.key);
            }
        }

        if !closed.is_empty() {
            tracing::debug!(
                x = position.x,
                y = position.y,
                closed = ?closed,
                "Outside click closed popups"
            );
        }

        self.sync_listener();
        closed
    }

    fn slot_mut(&mut self, key: K, operation: &'static str) -> Option<&mut PopupSlot<K>> {
        let slot = self.slots.iter_mut().find(|slot| slot.key == key);
        if slot.is_none() {
            tracing::warn!(key = ?key, operation, "Ignoring unknown popup key");
        }
        slot
    }

    fn sync_listener(&mut self) {
        let any_open = self.any_open();
        if any_open && !self.listening {
            self.listener.attach();
            self.listening = true;
        } else if !any_open && self.listening {
            self.listener.detach();
            self.listening = false;
        }
    }
}

impl<K, L: PointerListener> Drop for PopupManager<K, L> {
    fn drop(&mut self) {
        if self.listening {
            self.listener.detach();
            self.listening = false;
        }
    }
}
