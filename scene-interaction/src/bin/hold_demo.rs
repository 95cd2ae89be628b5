use anyhow::Result;
use glam::Vec2;
use log::info;
use scene_interaction::{
    animation_mixer::AnimationClip,
    components::{
        AnimationClips, AvatarAnimation, AvatarClip, AvatarRig, Channel, Holdable,
        LoadedByMediaLoader, Parent,
    },
    config::InteractionConfig,
    contexts::{Action, SceneEvent},
    systems::attach_avatar_animation,
    SceneBuilder,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => InteractionConfig::from_file(path)?,
        None => InteractionConfig::default(),
    };
    let mut scene = SceneBuilder::new().config(config).build();

    // A cup on the table and a video that was dropped into a pinned loader.
    let root = scene.world.spawn(());
    let cup = scene.world.spawn((Holdable, Parent(root)));
    let loader = scene.world.spawn((Holdable, Parent(root)));
    let video = scene
        .world
        .spawn((Holdable, LoadedByMediaLoader, Parent(loader)));
    scene.network_context.pin(loader);

    let rig = scene.world.spawn((AvatarRig, Parent(root)));
    let clips = [
        AvatarClip::Idle,
        AvatarClip::Walking,
        AvatarClip::WalkingBackward,
        AvatarClip::WalkingLeft,
        AvatarClip::WalkingRight,
    ]
    .map(|c| AnimationClip::new(c.name(), 1.2))
    .to_vec();
    let avatar = scene.world.spawn((Parent(rig), AnimationClips(clips)));
    attach_avatar_animation(&mut scene.world, avatar, Default::default())?;

    info!("Right hand reaches for the cup, left cursor points at the video");
    Channel::HandRight.hover(&mut scene.world, cup)?;
    Channel::RemoteLeft.hover(&mut scene.world, video)?;
    scene.input_context.set_button(Action::RightHandGrab, true);
    scene.input_context.set_button(Action::CursorLeftGrab, true);
    scene
        .input_context
        .set_axis(Action::CharacterAcceleration, Vec2::new(0.3, 0.8));
    scene.tick();
    info!(
        "cup held: {}, video held: {}",
        Channel::HandRight.holds(&scene.world, cup),
        Channel::RemoteLeft.holds(&scene.world, video)
    );

    info!("Right hand lets go, virtual joystick takes over movement");
    scene.input_context.reset();
    scene.input_context.set_button(Action::RightHandDrop, true);
    scene.scene_context.emit(SceneEvent::MovementBegin { right: 0. });
    scene.tick();
    info!("cup held: {}", Channel::HandRight.holds(&scene.world, cup));

    let avatar_animation = scene.world.get::<&AvatarAnimation>(avatar)?;
    for action in avatar_animation.mixer().actions() {
        info!(
            "{:>18}: weight {:>5.2} (effective {:.2})",
            action.clip().name,
            action.weight(),
            action.effective_weight()
        );
    }

    Ok(())
}
