//! RightHide - Mod Entry Point
//!
//! Wires the host's services to the mod logic at load time: installs the
//! two fixed prefix gates, loads settings, and queues the deferred
//! time-controls lookup to run once the host finishes starting up.
//!
//! Loading never aborts the host: settings fall back to defaults and the
//! optional time-controls gate is simply absent when its lookup cannot
//! run.

use std::sync::Arc;

use tracing::{error, info, warn};

use righthide_core::{
    ModConfig, TimeControlsResolver, UiController, BOTTOM_BAR_DRAW, GLOBAL_CONTROLS_DRAW,
};
use righthide_host::{
    GateKey, GateRegistry, ModuleRegistry, ProgramStateSource, StartupQueue, TabsRoot, WindowStack,
};

pub use righthide_core::shutdown;

/// Host services handed to the mod at load time
pub struct HostServices {
    /// The draw-call interception facility
    pub hooks: Arc<GateRegistry>,
    /// Deferred execution after the startup pipeline completes
    pub startup: Arc<StartupQueue>,
    pub program: Arc<dyn ProgramStateSource>,
    pub windows: Arc<dyn WindowStack>,
    pub tabs: Arc<dyn TabsRoot>,
    pub modules: Arc<dyn ModuleRegistry>,
}

/// Handle to the loaded mod
pub struct RightHideMod {
    controller: Arc<UiController>,
    resolver: Arc<TimeControlsResolver>,
    hooks: Arc<GateRegistry>,
    bottom_bar_gate: GateKey,
    global_controls_gate: GateKey,
}

/// Load the mod with settings read from disk
///
/// Settings errors are logged and replaced with defaults; the mod never
/// refuses to load.
pub fn load(services: HostServices) -> RightHideMod {
    let config = ModConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load settings: {}, using defaults", e);
        ModConfig::default()
    });
    load_with_config(services, config)
}

/// Load the mod with explicit settings
pub fn load_with_config(services: HostServices, config: ModConfig) -> RightHideMod {
    // The host may already own a subscriber; keep ours quiet then
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    info!("RightHide loading...");

    let controller = Arc::new(UiController::new(
        services.program,
        services.windows,
        services.tabs,
    ));
    controller.set_require_modifier(config.require_modifier);

    let handler = controller.clone();
    let bottom_bar_gate = services.hooks.install_prefix(
        BOTTOM_BAR_DRAW,
        Box::new(move |event| handler.bottom_bar_prefix(event)),
    );

    let gate = controller.clone();
    let global_controls_gate = services.hooks.install_prefix(
        GLOBAL_CONTROLS_DRAW,
        Box::new(move |_| gate.global_controls_prefix()),
    );

    // The time controls type may not exist until loading completes, so
    // its lookup waits for the startup queue.
    let resolver = Arc::new(TimeControlsResolver::new());
    {
        let resolver = resolver.clone();
        let modules = services.modules.clone();
        let hooks = services.hooks.clone();
        let visibility = controller.visibility();

        let queued = services.startup.queue(move || {
            resolver.resolve(modules.as_ref(), hooks.as_ref(), &visibility);
        });
        if queued.is_err() {
            error!("Failed to queue deferred time controls patch; continuing without it");
        }
    }

    info!(
        "RightHide loaded (require_modifier = {})",
        config.require_modifier
    );

    RightHideMod {
        controller,
        resolver,
        hooks: services.hooks,
        bottom_bar_gate,
        global_controls_gate,
    }
}

impl RightHideMod {
    pub fn controller(&self) -> &Arc<UiController> {
        &self.controller
    }

    pub fn resolver(&self) -> &Arc<TimeControlsResolver> {
        &self.resolver
    }

    /// Remove every gate this mod installed
    pub fn unload(self) {
        let mut gates = vec![self.bottom_bar_gate, self.global_controls_gate];
        gates.extend(self.resolver.installed_gate());

        for key in gates {
            if let Err(e) = self.hooks.remove(key) {
                warn!("Failed to remove gate on unload: {}", e);
            }
        }

        righthide_core::shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::RwLock;
    use righthide_core::{ResolveOutcome, ARCHITECT_TAB, TIME_CONTROLS_METHOD, TIME_CONTROLS_TYPE};
    use righthide_host::{
        MethodBinding, MethodInfo, ModuleError, ModuleInfo, MouseButton, ProgramState, TabId,
        TypeInfo, UiEvent,
    };

    const TIME_CONTROLS_DRAW: &str = "TimeControls.DoTimeControls";

    struct FakeProgram(RwLock<ProgramState>);

    impl ProgramStateSource for FakeProgram {
        fn program_state(&self) -> ProgramState {
            *self.0.read()
        }
    }

    struct FakeWindows(RwLock<usize>);

    impl WindowStack for FakeWindows {
        fn open_window_count(&self) -> usize {
            *self.0.read()
        }
    }

    #[derive(Default)]
    struct FakeTabs(RwLock<Option<TabId>>);

    impl TabsRoot for FakeTabs {
        fn open_tab(&self) -> Option<TabId> {
            self.0.read().clone()
        }

        fn set_current_tab(&self, tab: Option<TabId>) {
            *self.0.write() = tab;
        }
    }

    struct FakeModules(Vec<ModuleInfo>);

    impl ModuleRegistry for FakeModules {
        fn modules(&self) -> Result<Vec<ModuleInfo>, ModuleError> {
            Ok(self.0.clone())
        }
    }

    struct Host {
        hooks: Arc<GateRegistry>,
        startup: Arc<StartupQueue>,
        program: Arc<FakeProgram>,
        windows: Arc<FakeWindows>,
        tabs: Arc<FakeTabs>,
    }

    impl Host {
        fn new(modules: Vec<ModuleInfo>) -> (Self, HostServices) {
            let hooks = Arc::new(GateRegistry::new());
            let startup = Arc::new(StartupQueue::new());
            let program = Arc::new(FakeProgram(RwLock::new(ProgramState::Playing)));
            let windows = Arc::new(FakeWindows(RwLock::new(0)));
            let tabs = Arc::new(FakeTabs::default());

            let services = HostServices {
                hooks: hooks.clone(),
                startup: startup.clone(),
                program: program.clone(),
                windows: windows.clone(),
                tabs: tabs.clone(),
                modules: Arc::new(FakeModules(modules)),
            };

            let host = Self {
                hooks,
                startup,
                program,
                windows,
                tabs,
            };
            (host, services)
        }

        /// Deliver a right-click frame to the bottom bar draw call
        fn right_click(&self) -> (bool, UiEvent) {
            let mut event = UiEvent::mouse_down(MouseButton::Right);
            let run_original = self.hooks.dispatch(BOTTOM_BAR_DRAW, &mut event);
            (run_original, event)
        }

        /// Deliver a repaint frame to an entry point
        fn repaint(&self, entry_point: &str) -> bool {
            self.hooks.dispatch(entry_point, &mut UiEvent::repaint())
        }
    }

    fn game_modules() -> Vec<ModuleInfo> {
        vec![ModuleInfo::new("game").with_type(
            TypeInfo::new(None, TIME_CONTROLS_TYPE).with_method(MethodInfo::new(
                TIME_CONTROLS_METHOD,
                MethodBinding::NON_PUBLIC | MethodBinding::STATIC,
            )),
        )]
    }

    #[test]
    fn test_load_installs_fixed_gates_and_defers_lookup() {
        let (host, services) = Host::new(game_modules());
        let mod_handle = load_with_config(services, ModConfig::default());

        assert!(host.hooks.is_gated(BOTTOM_BAR_DRAW));
        assert!(host.hooks.is_gated(GLOBAL_CONTROLS_DRAW));

        // Lookup has not run yet, it waits for startup to finish
        assert!(!host.hooks.is_gated(TIME_CONTROLS_DRAW));
        assert_eq!(host.startup.len(), 1);
        assert_eq!(mod_handle.resolver().outcome(), None);

        assert_eq!(host.startup.run_pending(), 1);
        assert_eq!(
            mod_handle.resolver().outcome(),
            Some(ResolveOutcome::Installed)
        );
        assert!(host.hooks.is_gated(TIME_CONTROLS_DRAW));
    }

    #[test]
    fn test_right_clicks_toggle_through_dispatch() {
        let (host, services) = Host::new(game_modules());
        let mod_handle = load_with_config(services, ModConfig::default());
        host.startup.run_pending();

        let visibility = mod_handle.controller().visibility();
        for n in 1..=5 {
            let (run_original, event) = host.right_click();
            assert_eq!(visibility.is_hidden(), n % 2 == 1);
            assert_eq!(run_original, n % 2 == 0);
            assert!(event.is_consumed());
        }
    }

    #[test]
    fn test_hidden_ui_skips_every_gated_draw_call() {
        let (host, services) = Host::new(game_modules());
        load_with_config(services, ModConfig::default());
        host.startup.run_pending();

        host.right_click();
        assert!(!host.repaint(BOTTOM_BAR_DRAW));
        assert!(!host.repaint(GLOBAL_CONTROLS_DRAW));
        assert!(!host.repaint(TIME_CONTROLS_DRAW));

        host.right_click();
        assert!(host.repaint(BOTTOM_BAR_DRAW));
        assert!(host.repaint(GLOBAL_CONTROLS_DRAW));
        assert!(host.repaint(TIME_CONTROLS_DRAW));
    }

    #[test]
    fn test_open_window_blocks_toggle() {
        let (host, services) = Host::new(game_modules());
        let mod_handle = load_with_config(services, ModConfig::default());
        *host.windows.0.write() = 1;

        let (run_original, event) = host.right_click();
        assert!(run_original);
        assert!(!event.is_consumed());
        assert!(!mod_handle.controller().visibility().is_hidden());
    }

    #[test]
    fn test_menu_screen_ignores_clicks() {
        let (host, services) = Host::new(game_modules());
        let mod_handle = load_with_config(services, ModConfig::default());
        *host.program.0.write() = ProgramState::Entry;

        let (run_original, event) = host.right_click();
        assert!(run_original);
        assert!(!event.is_consumed());
        assert!(!mod_handle.controller().visibility().is_hidden());
    }

    #[test]
    fn test_require_modifier_setting_is_applied() {
        let (host, services) = Host::new(game_modules());
        let config = ModConfig {
            require_modifier: true,
            ..ModConfig::default()
        };
        let mod_handle = load_with_config(services, config);

        let (_, event) = host.right_click();
        assert!(!event.is_consumed());
        assert!(!mod_handle.controller().visibility().is_hidden());

        let mut event = UiEvent::mouse_down(MouseButton::Right).with_modifier();
        host.hooks.dispatch(BOTTOM_BAR_DRAW, &mut event);
        assert!(event.is_consumed());
        assert!(mod_handle.controller().visibility().is_hidden());
    }

    #[test]
    fn test_architect_tab_follows_visibility() {
        let (host, services) = Host::new(game_modules());
        load_with_config(services, ModConfig::default());

        host.right_click();
        assert_eq!(host.tabs.open_tab(), None);

        host.right_click();
        assert_eq!(host.tabs.open_tab(), Some(TabId::new(ARCHITECT_TAB)));

        host.right_click();
        assert_eq!(host.tabs.open_tab(), None);
    }

    #[test]
    fn test_host_without_time_controls_degrades_silently() {
        let (host, services) = Host::new(vec![ModuleInfo::new("game")]);
        let mod_handle = load_with_config(services, ModConfig::default());
        host.startup.run_pending();

        assert_eq!(
            mod_handle.resolver().outcome(),
            Some(ResolveOutcome::TypeNotFound)
        );
        assert!(!host.hooks.is_gated(TIME_CONTROLS_DRAW));

        // The rest of the mod is unaffected
        host.right_click();
        assert!(!host.repaint(BOTTOM_BAR_DRAW));
        assert!(!host.repaint(GLOBAL_CONTROLS_DRAW));
        // Ungated entry points always draw
        assert!(host.repaint(TIME_CONTROLS_DRAW));
    }

    #[test]
    fn test_full_startup_queue_drops_lookup_but_loads() {
        let (host, services) = Host::new(game_modules());
        while host.startup.queue(|| {}).is_ok() {}

        let mod_handle = load_with_config(services, ModConfig::default());
        host.startup.run_pending();

        // Lookup never ran; everything else still works
        assert_eq!(mod_handle.resolver().outcome(), None);
        host.right_click();
        assert!(!host.repaint(BOTTOM_BAR_DRAW));
    }

    #[test]
    fn test_unload_removes_all_gates() {
        let (host, services) = Host::new(game_modules());
        let mod_handle = load_with_config(services, ModConfig::default());
        host.startup.run_pending();
        assert!(host.hooks.is_gated(TIME_CONTROLS_DRAW));

        mod_handle.unload();
        assert!(!host.hooks.is_gated(BOTTOM_BAR_DRAW));
        assert!(!host.hooks.is_gated(GLOBAL_CONTROLS_DRAW));
        assert!(!host.hooks.is_gated(TIME_CONTROLS_DRAW));
    }
}
