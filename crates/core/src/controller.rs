//! UI visibility controller
//!
//! Owns the shared visibility flag and implements the predicate bodies
//! installed as prefix gates on the host's UI draw calls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use righthide_host::{ProgramState, ProgramStateSource, TabId, TabsRoot, UiEvent, WindowStack};

use crate::visibility::UiVisibility;

/// Entry point for the bottom control bar draw call
pub const BOTTOM_BAR_DRAW: &str = "MainButtonsRoot.MainButtonsOnGUI";

/// Entry point for the global play-settings control cluster
pub const GLOBAL_CONTROLS_DRAW: &str = "PlaySettings.DoPlaySettingsGlobalControls";

/// The auxiliary tab toggled in lockstep with the bottom bar
pub const ARCHITECT_TAB: &str = "Architect";

/// Controller for the right-click hide behavior
///
/// One instance per mod load, shared via `Arc` with every installed
/// gate. The visibility flag is flipped only by [`bottom_bar_prefix`];
/// the other predicates just read it.
///
/// [`bottom_bar_prefix`]: UiController::bottom_bar_prefix
pub struct UiController {
    visibility: Arc<UiVisibility>,
    program: Arc<dyn ProgramStateSource>,
    windows: Arc<dyn WindowStack>,
    tabs: Arc<dyn TabsRoot>,
    architect_tab: TabId,
    /// When set, the toggle only fires while the modifier key is held
    require_modifier: AtomicBool,
}

impl UiController {
    pub fn new(
        program: Arc<dyn ProgramStateSource>,
        windows: Arc<dyn WindowStack>,
        tabs: Arc<dyn TabsRoot>,
    ) -> Self {
        Self {
            visibility: Arc::new(UiVisibility::new()),
            program,
            windows,
            tabs,
            architect_tab: TabId::new(ARCHITECT_TAB),
            require_modifier: AtomicBool::new(false),
        }
    }

    /// The shared visibility flag
    pub fn visibility(&self) -> Arc<UiVisibility> {
        self.visibility.clone()
    }

    pub fn require_modifier(&self) -> bool {
        self.require_modifier.load(Ordering::Relaxed)
    }

    pub fn set_require_modifier(&self, require: bool) {
        self.require_modifier.store(require, Ordering::Relaxed);
    }

    /// Prefix gate for the bottom bar draw call
    ///
    /// Handles the right-click toggle: while playing, with no window
    /// open, and with the modifier key held if required, a right-click
    /// flips the visibility flag, mirrors the architect tab, and
    /// consumes the event.
    ///
    /// # Returns
    /// Whether the bottom bar should draw this frame. Outside the
    /// playing state or with a window open the bar always draws;
    /// otherwise the return reflects the current flag, whether or not
    /// this event toggled it.
    pub fn bottom_bar_prefix(&self, event: &mut UiEvent) -> bool {
        if self.program.program_state() != ProgramState::Playing {
            return true;
        }

        if event.is_right_mouse_down() {
            if self.windows.any_open() {
                return true;
            }

            if !self.require_modifier() || event.modifier_held {
                let hidden = self.visibility.toggle();
                self.mirror_architect_tab(hidden);
                event.consume();
            }
        }

        !self.visibility.is_hidden()
    }

    /// Prefix gate for the global controls draw call
    pub fn global_controls_prefix(&self) -> bool {
        !self.visibility.is_hidden()
    }

    /// Prefix gate installed on the time controls draw call when the
    /// deferred lookup finds it
    pub fn time_controls_prefix(&self) -> bool {
        !self.visibility.is_hidden()
    }

    /// Keep the architect tab in lockstep with the bottom bar:
    /// hiding closes it only if it is the open tab, showing opens it.
    fn mirror_architect_tab(&self, hidden: bool) {
        if hidden {
            if self.tabs.open_tab().as_ref() == Some(&self.architect_tab) {
                self.tabs.set_current_tab(None);
            }
        } else {
            self.tabs.set_current_tab(Some(self.architect_tab.clone()));
        }
    }
}
