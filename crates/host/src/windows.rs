//! Window stack query
//!
//! The host keeps a stack of windows layered over the game view. Input
//! handling that would conflict with an open window checks here first.

/// Read-only view of the host's window stack
pub trait WindowStack: Send + Sync {
    /// Number of windows currently open
    fn open_window_count(&self) -> usize;

    /// True if any window is open
    fn any_open(&self) -> bool {
        self.open_window_count() > 0
    }
}
