use std::time::Instant;

use crate::{
    config::InteractionConfig,
    contexts::{InputContext, NetworkContext, PermissionsContext, SceneContext},
    systems::{avatar_animation_system, hold_system},
};

/// Builder for `Scene`.
#[derive(Default)]
pub struct SceneBuilder {
    config: Option<InteractionConfig>,
}

impl SceneBuilder {
    /// Create a `SceneBuilder`
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the configuration used by the systems
    pub fn config(&mut self, config: InteractionConfig) -> &mut Self {
        self.config = Some(config);
        self
    }

    /// Build the `Scene`
    pub fn build(&mut self) -> Scene {
        Scene {
            world: Default::default(),
            input_context: Default::default(),
            network_context: Default::default(),
            permissions_context: Default::default(),
            scene_context: Default::default(),
            config: self.config.take().unwrap_or_default(),
            last_tick: None,
        }
    }
}

/// Owns the world and every context the systems read, and runs them once per tick.
///
/// Hosts update the contexts from their own input, networking and permission layers, then
/// call [`Scene::tick`].
pub struct Scene {
    /// All entities in the scene
    pub world: hecs::World,
    /// Resolved action values for this frame
    pub input_context: InputContext,
    /// Network pin state
    pub network_context: NetworkContext,
    /// The local user's room permissions
    pub permissions_context: PermissionsContext,
    /// Frozen flag and pending scene events
    pub scene_context: SceneContext,
    /// Configuration for the systems
    pub config: InteractionConfig,
    last_tick: Option<Instant>,
}

impl Default for Scene {
    fn default() -> Self {
        SceneBuilder::new().build()
    }
}

impl Scene {
    /// Create a scene with the default configuration
    pub fn new() -> Self {
        Default::default()
    }

    /// Run every system, measuring elapsed time from the previous call.
    /// The first tick advances animations by zero.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = self
            .last_tick
            .map(|last_tick| now.duration_since(last_tick).as_secs_f32())
            .unwrap_or(0.);
        self.last_tick = Some(now);

        self.tick_with_delta(delta);
    }

    /// Run every system with an explicit elapsed time, in seconds.
    pub fn tick_with_delta(&mut self, delta: f32) {
        hold_system(self);
        avatar_animation_system(self, delta);
    }
}
