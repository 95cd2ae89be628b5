use std::collections::HashMap;

use glam::Vec2;

/// Symbolic actions the host's input layer resolves each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CursorRightGrab,
    CursorRightDrop,
    CursorLeftGrab,
    CursorLeftDrop,
    RightHandGrab,
    RightHandDrop,
    LeftHandGrab,
    LeftHandDrop,
    /// Locomotion vector, `x` to the right and `y` forward
    CharacterAcceleration,
}

impl Action {
    pub fn path(self) -> &'static str {
        match self {
            Action::CursorRightGrab => "/actions/cursor/right/grab",
            Action::CursorRightDrop => "/actions/cursor/right/drop",
            Action::CursorLeftGrab => "/actions/cursor/left/grab",
            Action::CursorLeftDrop => "/actions/cursor/left/drop",
            Action::RightHandGrab => "/actions/rightHand/grab",
            Action::RightHandDrop => "/actions/rightHand/drop",
            Action::LeftHandGrab => "/actions/leftHand/grab",
            Action::LeftHandDrop => "/actions/leftHand/drop",
            Action::CharacterAcceleration => "/actions/characterAcceleration",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionValue {
    Button(bool),
    Axis(Vec2),
}

/// Read access to the current value of an action.
pub trait UserInput {
    /// The current value of `action`, or `None` if the input layer has nothing for it.
    fn get(&self, action: Action) -> Option<ActionValue>;

    /// Is `action` active? Any axis value counts as active.
    fn pressed(&self, action: Action) -> bool {
        match self.get(action) {
            Some(ActionValue::Button(pressed)) => pressed,
            Some(ActionValue::Axis(_)) => true,
            None => false,
        }
    }

    fn axis(&self, action: Action) -> Option<Vec2> {
        match self.get(action) {
            Some(ActionValue::Axis(value)) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone)]
/// Context that holds the resolved value of each action for the current frame.
/// The host writes to it before ticking; systems only read.
pub struct InputContext {
    values: HashMap<Action, ActionValue>,
}

impl InputContext {
    pub fn set_button(&mut self, action: Action, pressed: bool) {
        self.values.insert(action, ActionValue::Button(pressed));
    }

    pub fn set_axis(&mut self, action: Action, value: Vec2) {
        self.values.insert(action, ActionValue::Axis(value));
    }

    /// Forget the value of `action`, as if the input layer never reported it.
    pub fn clear(&mut self, action: Action) {
        self.values.remove(&action);
    }

    /// Forget everything. Call between frames if the host only reports active actions.
    pub fn reset(&mut self) {
        self.values.clear();
    }
}

impl UserInput for InputContext {
    fn get(&self, action: Action) -> Option<ActionValue> {
        self.values.get(&action).copied()
    }
}
