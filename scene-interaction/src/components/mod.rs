/// Named clips carried by a scene node
pub mod animation_clips;
/// Locomotion clip blending for avatars
pub mod avatar_animation;
/// The input channels that can hold an entity
pub mod channel;
/// Hover and hold tags
pub mod holdable;
/// Scene graph containment
pub mod parent;
/// Metadata of the scene node an entity wraps
pub mod scene_element;

pub use animation_clips::AnimationClips;
pub use avatar_animation::{AvatarAnimation, AvatarAnimationSchema, AvatarClip, AvatarRig};
pub use channel::Channel;
pub use holdable::{
    Held, HeldHandLeft, HeldHandRight, HeldRemoteLeft, HeldRemoteRight, Holdable,
    HoveredHandLeft, HoveredHandRight, HoveredRemoteLeft, HoveredRemoteRight,
    LoadedByMediaLoader,
};
pub use parent::Parent;
pub use scene_element::SceneElement;
