#![allow(missing_docs)]
pub mod avatar_animation;
pub mod hold;

pub use avatar_animation::{
    attach_avatar_animation, avatar_animation_system, avatar_animation_system_inner,
};
pub use hold::{hold_system, hold_system_inner};
