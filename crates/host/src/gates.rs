//! Prefix gates for UI draw calls
//!
//! The host's method-interception facility: a gate installed on a named
//! entry point runs before the original drawing routine each frame, and
//! the original is skipped if any gate returns `false`.

use std::collections::HashMap;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};

use crate::event::UiEvent;

new_key_type! {
    /// Handle for an installed prefix gate
    pub struct GateKey;
}

/// Error type for gate operations
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Gate not found")]
    NotFound,
}

/// A prefix gate: runs before the original draw call, returning whether
/// the original should still run
pub type PrefixGate = Box<dyn Fn(&mut UiEvent) -> bool + Send + Sync>;

/// Internal storage for an installed gate
struct GateEntry {
    /// Entry point the gate is installed on (for removal and debugging)
    entry_point: String,
    gate: PrefixGate,
}

#[derive(Default)]
struct GateTable {
    gates: SlotMap<GateKey, GateEntry>,
    /// Installation order per entry point
    by_entry: HashMap<String, Vec<GateKey>>,
}

/// Registry of prefix gates, keyed by entry point name
///
/// Owned by the host and shared with mods via `Arc`. Dispatch runs on
/// the UI thread; the lock is only ever contended at install/remove
/// time during load.
#[derive(Default)]
pub struct GateRegistry {
    table: RwLock<GateTable>,
}

impl GateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a prefix gate on an entry point
    ///
    /// Multiple gates may be installed on the same entry point; they run
    /// in installation order.
    ///
    /// # Returns
    /// A key to remove the gate later
    pub fn install_prefix(&self, entry_point: &str, gate: PrefixGate) -> GateKey {
        let mut table = self.table.write();
        let key = table.gates.insert(GateEntry {
            entry_point: entry_point.to_string(),
            gate,
        });
        table
            .by_entry
            .entry(entry_point.to_string())
            .or_default()
            .push(key);

        tracing::debug!("Installed prefix gate on '{}'", entry_point);
        key
    }

    /// Remove an installed gate
    pub fn remove(&self, key: GateKey) -> Result<(), GateError> {
        let mut table = self.table.write();
        let entry = table.gates.remove(key).ok_or(GateError::NotFound)?;

        if let Some(keys) = table.by_entry.get_mut(&entry.entry_point) {
            keys.retain(|k| *k != key);
            if keys.is_empty() {
                table.by_entry.remove(&entry.entry_point);
            }
        }

        tracing::debug!("Removed prefix gate from '{}'", entry.entry_point);
        Ok(())
    }

    /// Run every gate installed on an entry point
    ///
    /// Called by the host before the original drawing routine. Each gate
    /// sees the same event and may consume it. Returns `true` when the
    /// original draw call should still run; an entry point with no gates
    /// always runs.
    pub fn dispatch(&self, entry_point: &str, event: &mut UiEvent) -> bool {
        let table = self.table.read();
        let Some(keys) = table.by_entry.get(entry_point) else {
            return true;
        };

        let mut run_original = true;
        for key in keys {
            if let Some(entry) = table.gates.get(*key) {
                // Every gate runs even after one has voted to skip
                run_original &= (entry.gate)(event);
            }
        }
        run_original
    }

    /// Number of gates installed on an entry point
    pub fn gate_count(&self, entry_point: &str) -> usize {
        self.table
            .read()
            .by_entry
            .get(entry_point)
            .map_or(0, |keys| keys.len())
    }

    /// True if at least one gate is installed on an entry point
    pub fn is_gated(&self, entry_point: &str) -> bool {
        self.gate_count(entry_point) > 0
    }
}
