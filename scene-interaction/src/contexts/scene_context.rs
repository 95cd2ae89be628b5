/// Signals raised by an on-screen movement control, such as a virtual joystick on mobile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    /// The user started moving with the control
    MovementBegin { right: f32 },
    /// The user let go of the control
    MovementEnd { right: f32 },
}

/// Scene-wide state: whether the scene is frozen, and events waiting to be handled.
#[derive(Debug, Default, Clone)]
pub struct SceneContext {
    frozen: bool,
    pending_events: Vec<SceneEvent>,
}

impl SceneContext {
    /// While frozen, pins are not enforced.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    /// Queue an event. Events are handled in order at the start of the next avatar update.
    pub fn emit(&mut self, event: SceneEvent) {
        self.pending_events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
