use hecs::{Entity, World};
use log::debug;

use crate::{
    animation_mixer::AnimationClip,
    components::{
        channel::has, AnimationClips, AvatarAnimation, AvatarAnimationSchema, AvatarRig,
    },
    config::AvatarConfig,
    contexts::{Action, SceneEvent, UserInput},
    util::{ancestors, parent_of},
    InteractionResult, Scene,
};

/// Add an [`AvatarAnimation`] to `entity`.
///
/// Clips are taken from the closest node, starting at `entity` itself, that carries a
/// non-empty [`AnimationClips`]. The root of the graph is never used as a source. Every clip
/// starts playing with no weight, except "Idle" which gets full weight. The component is
/// treated as the local avatar if `entity` or one of its ancestors is the [`AvatarRig`].
pub fn attach_avatar_animation(
    world: &mut World,
    entity: Entity,
    schema: AvatarAnimationSchema,
) -> InteractionResult<()> {
    world.entity(entity)?;

    let is_me = ancestors(world, entity).any(|e| has::<AvatarRig>(world, e));
    let mut avatar_animation = AvatarAnimation::new(schema, is_me);
    if let Some(clips) = find_animation_clips(world, entity) {
        avatar_animation.bind_clips(&clips);
    }
    avatar_animation.refresh();

    debug!(
        "[AVATAR_ANIMATION] Attached to {entity:?} with {} clips, local: {is_me}",
        avatar_animation.mixer().len()
    );
    world.insert_one(entity, avatar_animation)?;

    Ok(())
}

fn find_animation_clips(world: &World, entity: Entity) -> Option<Vec<AnimationClip>> {
    for node in ancestors(world, entity) {
        parent_of(world, node)?;

        if let Ok(clips) = world.get::<&AnimationClips>(node) {
            if !clips.is_empty() {
                return Some(clips.0.clone());
            }
        }
    }

    None
}

/// Avatar animation system
/// Applies pending movement events, advances each avatar's clips and feeds the local
/// avatar's locomotion input into its blend.
pub fn avatar_animation_system(scene: &mut Scene, delta: f32) {
    let events = scene.scene_context.take_events();
    avatar_animation_system_inner(
        &mut scene.world,
        &scene.input_context,
        &events,
        &scene.config.avatar,
        delta,
    );
}

pub fn avatar_animation_system_inner(
    world: &mut World,
    input: &impl UserInput,
    events: &[SceneEvent],
    config: &AvatarConfig,
    delta: f32,
) {
    for (_, avatar_animation) in world.query_mut::<&mut AvatarAnimation>() {
        for event in events {
            avatar_animation.handle_event(event, config.mobile_forward);
        }

        avatar_animation.advance(delta);

        if !avatar_animation.is_me() || avatar_animation.is_mobile() {
            continue;
        }

        if let Some(acceleration) = input.axis(Action::CharacterAcceleration) {
            avatar_animation.set_locomotion(AvatarAnimationSchema::new(
                acceleration.y,
                acceleration.x,
            ));
        }
    }
}
