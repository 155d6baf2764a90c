//! RightHide - Core Logic
//!
//! Right-clicking on empty ground while playing toggles visibility of
//! the game's bottom control bar; the architect tab and the global
//! play-settings controls follow it, and so do the time controls on
//! host builds where their draw call can be located.
//!
//! # Re-exports
//!
//! This crate re-exports the host surface for convenience:
//! - [`host`] - UI events, draw-call gating and host service traits

use tracing::info;

// Re-export the host surface crate
pub use righthide_host as host;

pub mod config;
pub mod controller;
pub mod resolver;
pub mod visibility;

// Re-export commonly used items
pub use config::{ConfigError, ConfigResult, ModConfig};
pub use controller::{UiController, ARCHITECT_TAB, BOTTOM_BAR_DRAW, GLOBAL_CONTROLS_DRAW};
pub use resolver::{
    ResolveOutcome, TimeControlsResolver, TIME_CONTROLS_METHOD, TIME_CONTROLS_TYPE,
};
pub use visibility::UiVisibility;

/// Shutdown the mod
///
/// Called when the host unloads the mod. Gate removal is handled by the
/// plugin crate; nothing here holds resources beyond that.
pub fn shutdown() {
    info!("RightHide shutting down...");
}
