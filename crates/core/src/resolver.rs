//! Deferred time-controls lookup
//!
//! The time controls draw call is not present (or not stable) in every
//! host build, so it cannot be gated unconditionally at load. Once the
//! host finishes starting up, the resolver searches the loaded modules'
//! type tables for it by name and, when found, installs the same
//! follow-the-flag gate the fixed entry points get. Absence is not an
//! error: the mod runs without the time-controls gate on builds that
//! lack it.

use std::sync::{Arc, OnceLock};

use righthide_host::{GateKey, GateRegistry, MethodBinding, ModuleRegistry};

use crate::visibility::UiVisibility;

/// Type searched for across loaded modules
pub const TIME_CONTROLS_TYPE: &str = "TimeControls";

/// Draw method gated on the resolved type
pub const TIME_CONTROLS_METHOD: &str = "DoTimeControls";

/// How a resolution attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Type and method found, gate installed
    Installed,
    /// No loaded module declares the type
    TypeNotFound,
    /// Type found but the method is missing
    MethodNotFound,
    /// Module metadata could not be enumerated
    Failed,
}

/// One-shot resolver for the optional time-controls gate
///
/// Resolution runs at most once per resolver; the outcome is cached and
/// later calls return it without searching again.
#[derive(Debug, Default)]
pub struct TimeControlsResolver {
    outcome: OnceLock<ResolveOutcome>,
    installed_gate: OnceLock<GateKey>,
}

impl TimeControlsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search the loaded modules and install the time-controls gate
    ///
    /// Lookup order: an exact namespace-qualified match across all
    /// modules first, then an exhaustive scan comparing simple names.
    /// The method may have any accessibility and may be static or
    /// instance. Every failure is logged and absorbed here; the caller
    /// never sees an error.
    pub fn resolve(
        &self,
        modules: &dyn ModuleRegistry,
        hooks: &GateRegistry,
        visibility: &Arc<UiVisibility>,
    ) -> ResolveOutcome {
        *self.outcome.get_or_init(|| {
            let (outcome, key) = Self::search_and_install(modules, hooks, visibility);
            if let Some(key) = key {
                let _ = self.installed_gate.set(key);
            }
            outcome
        })
    }

    /// The cached outcome, or `None` if resolution has not run yet
    pub fn outcome(&self) -> Option<ResolveOutcome> {
        self.outcome.get().copied()
    }

    pub fn is_installed(&self) -> bool {
        self.outcome() == Some(ResolveOutcome::Installed)
    }

    /// Key of the gate installed on the resolved draw call, if any
    pub fn installed_gate(&self) -> Option<GateKey> {
        self.installed_gate.get().copied()
    }

    fn search_and_install(
        modules: &dyn ModuleRegistry,
        hooks: &GateRegistry,
        visibility: &Arc<UiVisibility>,
    ) -> (ResolveOutcome, Option<GateKey>) {
        let loaded = match modules.modules() {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::error!("Failed to enumerate modules for time controls patch: {}", e);
                return (ResolveOutcome::Failed, None);
            }
        };

        // Exact qualified lookup first, simple-name scan as fallback
        let ty = loaded
            .iter()
            .flat_map(|m| m.types.iter())
            .find(|t| t.full_name() == TIME_CONTROLS_TYPE)
            .or_else(|| {
                loaded
                    .iter()
                    .flat_map(|m| m.types.iter())
                    .find(|t| t.name == TIME_CONTROLS_TYPE)
            });

        let Some(ty) = ty else {
            tracing::info!(
                "{} type not found; skipping time controls patch",
                TIME_CONTROLS_TYPE
            );
            return (ResolveOutcome::TypeNotFound, None);
        };

        let Some(method) = ty.find_method(TIME_CONTROLS_METHOD, MethodBinding::all()) else {
            tracing::info!(
                "{} type found but {} method not located; skipping time controls patch",
                TIME_CONTROLS_TYPE,
                TIME_CONTROLS_METHOD
            );
            return (ResolveOutcome::MethodNotFound, None);
        };

        let entry_point = format!("{}.{}", ty.full_name(), method.name);
        let visibility = visibility.clone();
        let key = hooks.install_prefix(&entry_point, Box::new(move |_| !visibility.is_hidden()));

        tracing::info!("Patched {} to follow UI hide/show", entry_point);
        (ResolveOutcome::Installed, Some(key))
    }
}
