//! Tab management
//!
//! The host's bottom bar owns a set of named tabs, at most one of which
//! is open at a time.

use std::fmt;

/// Identifier for a named tab
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabId(String);

impl TabId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The host's tab manager
pub trait TabsRoot: Send + Sync {
    /// The currently open tab, if any
    fn open_tab(&self) -> Option<TabId>;

    /// Open the given tab, or close the current one when `None`
    fn set_current_tab(&self, tab: Option<TabId>);
}
