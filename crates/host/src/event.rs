//! UI events delivered to drawing hooks
//!
//! The host hands each drawing hook the event being processed this frame.
//! A hook that handles an input event marks it consumed so later hooks
//! and the original draw call ignore it.

/// What kind of event the current frame is processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Plain redraw, no input attached
    Repaint,
    MouseDown,
    MouseUp,
    KeyDown,
}

/// Mouse button carried by mouse events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// The event a drawing hook sees for the current frame
#[derive(Debug, Clone)]
pub struct UiEvent {
    pub kind: EventKind,
    /// Set for mouse events, `None` otherwise
    pub button: Option<MouseButton>,
    /// Whether the modifier key is held while this event fires
    pub modifier_held: bool,
    consumed: bool,
}

impl UiEvent {
    /// A plain repaint event with no input attached
    pub fn repaint() -> Self {
        Self {
            kind: EventKind::Repaint,
            button: None,
            modifier_held: false,
            consumed: false,
        }
    }

    /// A mouse-down event for the given button
    pub fn mouse_down(button: MouseButton) -> Self {
        Self {
            kind: EventKind::MouseDown,
            button: Some(button),
            modifier_held: false,
            consumed: false,
        }
    }

    /// Mark the modifier key as held
    pub fn with_modifier(mut self) -> Self {
        self.modifier_held = true;
        self
    }

    /// True for a right-button mouse-down that has not been consumed
    pub fn is_right_mouse_down(&self) -> bool {
        !self.consumed
            && self.kind == EventKind::MouseDown
            && self.button == Some(MouseButton::Right)
    }

    /// Mark this event as handled. Idempotent.
    pub fn consume(&mut self) {
        self.consumed = true;
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_mouse_down_detection() {
        assert!(UiEvent::mouse_down(MouseButton::Right).is_right_mouse_down());
        assert!(!UiEvent::mouse_down(MouseButton::Left).is_right_mouse_down());
        assert!(!UiEvent::repaint().is_right_mouse_down());
    }

    #[test]
    fn test_consumed_event_no_longer_matches() {
        let mut event = UiEvent::mouse_down(MouseButton::Right);
        event.consume();
        assert!(event.is_consumed());
        assert!(!event.is_right_mouse_down());

        // Consuming twice is fine
        event.consume();
        assert!(event.is_consumed());
    }

    #[test]
    fn test_with_modifier() {
        let event = UiEvent::mouse_down(MouseButton::Right).with_modifier();
        assert!(event.modifier_held);
        assert!(!UiEvent::mouse_down(MouseButton::Right).modifier_held);
    }
}
