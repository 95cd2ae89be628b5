use crate::animation_mixer::AnimationClip;

/// The animation clips imported with a scene node.
///
/// Avatar models usually carry these on the model's root node rather than on the entity that
/// drives the animation, so `attach_avatar_animation` searches up the scene graph for them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationClips(pub Vec<AnimationClip>);

impl AnimationClips {
    /// Is the clip list empty?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
