//! Shared UI visibility flag

use std::sync::atomic::{AtomicBool, Ordering};

/// The process-wide "UI hidden" flag
///
/// Read by every drawing gate each frame and flipped only by the
/// right-click handler. All access happens on the host's UI thread; the
/// atomic exists so the cell can be captured by `Send + Sync` gate
/// closures, not for cross-thread coordination.
#[derive(Debug, Default)]
pub struct UiVisibility {
    hidden: AtomicBool,
}

impl UiVisibility {
    /// A new flag in the visible state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.load(Ordering::Relaxed)
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.hidden.store(hidden, Ordering::Relaxed);
    }

    /// Flip the flag, returning the new value
    pub fn toggle(&self) -> bool {
        !self.hidden.fetch_xor(true, Ordering::Relaxed)
    }
}
