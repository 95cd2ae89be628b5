use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    animation_mixer::{AnimationClip, AnimationMixer},
    contexts::SceneEvent,
};

/// The clips an avatar model is expected to ship with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvatarClip {
    /// Standing still
    Idle,
    /// Walking forward
    Walking,
    /// Walking backward
    WalkingBackward,
    /// Strafing left at walking speed
    WalkingLeft,
    /// Strafing right at walking speed
    WalkingRight,
    /// Running forward
    Running,
    /// Running backward
    RunningBackward,
    /// Strafing left at running speed
    RunningLeft,
    /// Strafing right at running speed
    RunningRight,
    /// Flying
    Flying,
}

impl AvatarClip {
    /// The name of the clip in the model file
    pub fn name(self) -> &'static str {
        match self {
            AvatarClip::Idle => "Idle",
            AvatarClip::Walking => "Walking",
            AvatarClip::WalkingBackward => "WalkingBackwards",
            AvatarClip::WalkingLeft => "LeftStrafeWalk",
            AvatarClip::WalkingRight => "RightStrafeWalk",
            AvatarClip::Running => "Running",
            AvatarClip::RunningBackward => "RunningBackward",
            AvatarClip::RunningLeft => "LeftStrafe",
            AvatarClip::RunningRight => "RightStrafe",
            AvatarClip::Flying => "Fly",
        }
    }
}

/// Marker component for the rig of the locally controlled avatar.
/// An `AvatarAnimation` on this entity or any of its descendants reads local input.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvatarRig;

/// The declared properties of an [`AvatarAnimation`]: the locomotion vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarAnimationSchema {
    /// Forward (positive) or backward (negative) movement
    pub front: f32,
    /// Rightward (positive) or leftward (negative) movement
    pub right: f32,
}

impl AvatarAnimationSchema {
    /// Create a new locomotion vector
    pub fn new(front: f32, right: f32) -> Self {
        Self { front, right }
    }
}

/// Component that blends an avatar's locomotion clips from its locomotion vector.
/// Added with `attach_avatar_animation`, updated by `avatar_animation_system`.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarAnimation {
    data: AvatarAnimationSchema,
    mixer: AnimationMixer,
    is_me: bool,
    is_mobile: bool,
}

impl AvatarAnimation {
    pub(crate) fn new(data: AvatarAnimationSchema, is_me: bool) -> Self {
        Self {
            data,
            mixer: Default::default(),
            is_me,
            is_mobile: false,
        }
    }

    /// The current locomotion vector
    pub fn data(&self) -> AvatarAnimationSchema {
        self.data
    }

    /// The mixer playing this avatar's clips
    pub fn mixer(&self) -> &AnimationMixer {
        &self.mixer
    }

    /// Does this component belong to the locally controlled avatar?
    pub fn is_me(&self) -> bool {
        self.is_me
    }

    /// Has movement been driven by scene events instead of analog input?
    /// Once set, this stays set for the lifetime of the component.
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Is the avatar standing still?
    pub fn is_idle(&self) -> bool {
        self.data.front == 0. && self.data.right == 0.
    }

    /// The raw weight of `clip`, if the avatar has it
    pub fn weight(&self, clip: AvatarClip) -> Option<f32> {
        self.mixer.action(clip.name()).map(|a| a.weight())
    }

    /// Apply a new locomotion vector. Weights are only recomputed if it differs from the
    /// current one.
    pub fn set_locomotion(&mut self, data: AvatarAnimationSchema) {
        if data == self.data {
            return;
        }
        self.data = data;
        self.refresh();
    }

    /// Apply a movement event from the scene. Ignored unless this is the local avatar.
    pub fn handle_event(&mut self, event: &SceneEvent, mobile_forward: f32) {
        if !self.is_me {
            return;
        }

        match *event {
            SceneEvent::MovementBegin { right } => {
                if !self.is_mobile {
                    trace!("[AVATAR_ANIMATION] Switching to externally driven movement");
                }
                self.is_mobile = true;
                self.set_locomotion(AvatarAnimationSchema::new(mobile_forward, right));
            }
            SceneEvent::MovementEnd { right } => {
                self.set_locomotion(AvatarAnimationSchema::new(0., right));
            }
        }
    }

    /// Register `clips` as playing with no weight, then give the idle clip full weight.
    pub(crate) fn bind_clips(&mut self, clips: &[AnimationClip]) {
        for clip in clips {
            self.mixer.clip_action(clip).play().set_effective_weight(0.);
        }
        self.set_effective_weight(AvatarClip::Idle.name(), 1.);
    }

    pub(crate) fn advance(&mut self, delta: f32) {
        self.mixer.update(delta);
    }

    /// Recompute clip weights from the current locomotion vector.
    pub(crate) fn refresh(&mut self) {
        if self.is_idle() {
            self.idle();
        } else {
            self.walking();
        }
    }

    fn idle(&mut self) {
        let idle = AvatarClip::Idle.name();
        for action in self.mixer.actions_mut() {
            if action.clip().name != idle {
                action.set_effective_weight(0.);
            }
        }
        self.set_effective_weight(idle, 1.);
    }

    // The idle clip keeps whatever weight it had. Negative weights are left for the mixer.
    fn walking(&mut self) {
        let AvatarAnimationSchema { front, right } = self.data;
        for (clip, weight) in [
            (AvatarClip::Walking, front),
            (AvatarClip::WalkingBackward, -front),
            (AvatarClip::WalkingLeft, -right),
            (AvatarClip::WalkingRight, right),
        ] {
            self.set_effective_weight(clip.name(), weight);
        }
    }

    fn set_effective_weight(&mut self, name: &str, weight: f32) {
        if let Some(action) = self.mixer.action_mut(name) {
            action.set_effective_weight(weight);
        }
    }
}
