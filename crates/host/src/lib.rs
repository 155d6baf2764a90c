//! RightHide Host - UI Entry Point Gating and Host Service Surface
//!
//! This crate defines the surface the mod programs against:
//! - UI event and program-state types delivered to drawing hooks
//! - Read-only queries for the host's window stack and tab manager
//! - The prefix-gate registry used to intercept UI draw calls
//! - Module metadata lookup for entry points that vary across builds
//! - The deferred startup queue the host drains after loading
//!
//! # Architecture
//!
//! The host invokes a drawing routine once per frame for each UI element.
//! A [`GateRegistry`] sits in front of those routines: every gate
//! installed on an entry point runs first, and the original draw call is
//! skipped if any gate returns `false`. Everything here executes on the
//! host's UI thread.
//!
//! # Thread Safety
//!
//! Service objects are shared via `Arc` and are `Send + Sync` so they can
//! be captured by gate closures, but all callbacks are delivered on the
//! single UI thread.

pub mod event;
pub mod gates;
pub mod modules;
pub mod state;
pub mod tabs;
pub mod tasks;
pub mod windows;

pub use event::{EventKind, MouseButton, UiEvent};
pub use gates::{GateError, GateKey, GateRegistry, PrefixGate};
pub use modules::{MethodBinding, MethodInfo, ModuleError, ModuleInfo, ModuleRegistry, TypeInfo};
pub use state::{ProgramState, ProgramStateSource};
pub use tabs::{TabId, TabsRoot};
pub use tasks::{StartupQueue, StartupTask};
pub use windows::WindowStack;
