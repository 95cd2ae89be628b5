#![deny(missing_docs)]

//! Interaction plumbing for shared VR scenes.
//!
//! Two systems live here. The hold system decides, once per tick, which of four input
//! channels (two remote cursors and two tracked hands) may take hold of a `Holdable`
//! entity, honouring network pins and move permissions. The avatar animation system
//! blends an avatar's locomotion clips from a 2D input vector.
//!
//! Both are plain functions over a [`hecs::World`]. External state (input, network pins,
//! permissions, scene mode) is passed in through small traits and "contexts", so a host can
//! plug in its own implementations or drive everything through [`Scene`].
//!
//! ```no_run
//! use scene_interaction::{components::{Channel, Holdable}, contexts::Action, Scene};
//!
//! let mut scene = Scene::new();
//! let cup = scene.world.spawn((Holdable,));
//! Channel::HandRight.hover(&mut scene.world, cup).unwrap();
//! scene.input_context.set_button(Action::RightHandGrab, true);
//! scene.tick();
//! assert!(Channel::HandRight.holds(&scene.world, cup));
//! ```

pub use hecs;
pub use interaction_error::InteractionError;
pub use scene::{Scene, SceneBuilder};

/// Clip actions and the mixer that plays them
pub mod animation_mixer;
/// Components are data attached to entities in the world
pub mod components;
/// Configuration for the systems in this crate
pub mod config;
/// Contexts wrap the external state the systems consult each tick
pub mod contexts;
mod interaction_error;
mod scene;
/// Systems are functions called each tick to update the simulation
pub mod systems;
/// Scene graph helpers
pub mod util;

/// Result type used by the fallible setup operations in this crate
pub type InteractionResult<T> = std::result::Result<T, InteractionError>;
