//! Pointer listener seam used by the popup manager.

/// Subscription to pointer-down events.
///
/// The popup manager calls `attach` when the first popup opens and
/// `detach` when the last one closes or the manager is dropped. Calls are
/// always paired; implementations never see two `attach` calls in a row.
pub trait PointerListener {
    /// Start receiving pointer-down events.
    fn attach(&mut self);

    /// Stop receiving pointer-down events.
    fn detach(&mut self);
}

/// Production listener for the terminal event loop.
///
/// Mouse events always arrive through the action channel, so the
/// subscription only records whether outside clicks should be routed to
/// the popup manager.
#[derive(Debug, Default)]
pub struct PointerSubscription {
    active: bool,
    attach_count: u64,
}

impl PointerSubscription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether pointer-down events are currently routed to popups.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of times the subscription has been attached.
    pub fn attach_count(&self) -> u64 {
        self.attach_count
    }
}

impl PointerListener for PointerSubscription {
    fn attach(&mut self) {
        self.active = true;
        self.attach_count += 1;
        tracing::debug!(attach_count = self.attach_count, "Pointer listener attached");
    }

    fn detach(&mut self) {
        self.active = false;
        tracing::debug!("Pointer listener detached");
    }
}
