use hecs::{Entity, World};
use log::{debug, trace};

use crate::{
    components::{
        channel::{has, is_held_by_any},
        Channel, Held, LoadedByMediaLoader, SceneElement,
    },
    config::HoldConfig,
    contexts::{MovePermission, PinOracle, SceneContext, UserInput},
    util::{ancestors, parent_of},
    Scene,
};

/// Hold system
/// Lets each channel grab the `Holdable` entity it is hovering and drop the one it holds.
///
/// Grabs for all four channels are resolved before any drops.
pub fn hold_system(scene: &mut Scene) {
    hold_system_inner(
        &mut scene.world,
        &scene.input_context,
        &scene.network_context,
        &scene.permissions_context,
        &scene.scene_context,
        &scene.config.hold,
    );
}

pub fn hold_system_inner(
    world: &mut World,
    input: &impl UserInput,
    pins: &impl PinOracle,
    permissions: &impl MovePermission,
    scene_context: &SceneContext,
    config: &HoldConfig,
) {
    for channel in Channel::ALL {
        grab(world, input, pins, permissions, scene_context, config, channel);
    }

    for channel in Channel::ALL {
        release(world, input, channel);
    }
}

/// Is `entity` pinned in place, either by the network or by its scene node?
///
/// Media spawned by a loader isn't networked itself; its loader parent is, so that is where
/// the pin lives.
pub fn is_pinned(
    world: &World,
    entity: Entity,
    pins: &impl PinOracle,
    config: &HoldConfig,
) -> bool {
    if pins.is_pinned(entity) || is_scene_element_pinned(world, entity) {
        return true;
    }

    if config.pin_inherits_from_ancestors {
        return ancestors(world, entity)
            .skip(1)
            .any(|ancestor| pins.is_pinned(ancestor));
    }

    has::<LoadedByMediaLoader>(world, entity)
        && parent_of(world, entity)
            .map(|parent| pins.is_pinned(parent))
            .unwrap_or(false)
}

/// May the local user take hold of `entity`? Entities that don't wrap a scene node always can.
pub fn has_permission_to_grab(
    world: &World,
    entity: Entity,
    permissions: &impl MovePermission,
) -> bool {
    world
        .get::<&SceneElement>(entity)
        .map(|element| permissions.can_move(&element))
        .unwrap_or(true)
}

fn is_scene_element_pinned(world: &World, entity: Entity) -> bool {
    world
        .get::<&SceneElement>(entity)
        .map(|element| element.pinned)
        .unwrap_or(false)
}

fn grab(
    world: &mut World,
    input: &impl UserInput,
    pins: &impl PinOracle,
    permissions: &impl MovePermission,
    scene_context: &SceneContext,
    config: &HoldConfig,
    channel: Channel,
) {
    let hovered = match channel.first_hovered(world) {
        Some(entity) => entity,
        None => return,
    };

    if !input.pressed(channel.grab_action()) {
        return;
    }

    if !scene_context.is_frozen() && is_pinned(world, hovered, pins, config) {
        trace!("[HOLD] {channel:?} can't grab {hovered:?}, it is pinned");
        return;
    }

    if !has_permission_to_grab(world, hovered, permissions) {
        trace!("[HOLD] {channel:?} can't grab {hovered:?}, no permission to move it");
        return;
    }

    if channel.hold(world, hovered).is_err() {
        return;
    }
    let _ = world.insert_one(hovered, Held);
    debug!("[HOLD] {channel:?} grabbed {hovered:?}");
}

fn release(world: &mut World, input: &impl UserInput, channel: Channel) {
    let held = match channel.first_held(world) {
        Some(entity) => entity,
        None => return,
    };

    if !input.pressed(channel.drop_action()) {
        return;
    }

    // TODO: Also release when network ownership of the entity is lost.
    channel.release(world, held);

    if !is_held_by_any(world, held) {
        let _ = world.remove_one::<Held>(held);
    }
    debug!("[HOLD] {channel:?} dropped {held:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        components::{Holdable, Parent},
        contexts::{Action, InputContext, NetworkContext, PermissionsContext},
    };

    #[derive(Default)]
    struct Fixture {
        world: World,
        input_context: InputContext,
        network_context: NetworkContext,
        permissions_context: PermissionsContext,
        scene_context: SceneContext,
        config: HoldConfig,
    }

    impl Fixture {
        fn tick(&mut self) {
            hold_system_inner(
                &mut self.world,
                &self.input_context,
                &self.network_context,
                &self.permissions_context,
                &self.scene_context,
                &self.config,
            );
            assert_held_invariant(&self.world);
        }

        fn spawn_hovered(&mut self, channel: Channel) -> Entity {
            let entity = self.world.spawn((Holdable,));
            channel.hover(&mut self.world, entity).unwrap();
            entity
        }

        fn press(&mut self, action: Action) {
            self.input_context.set_button(action, true);
        }

        fn held(&self, entity: Entity) -> bool {
            has::<Held>(&self.world, entity)
        }
    }

    fn assert_held_invariant(world: &World) {
        for (entity, _) in world.query::<()>().iter() {
            assert_eq!(
                has::<Held>(world, entity),
                is_held_by_any(world, entity),
                "Held out of step with channel tags on {entity:?}"
            );
        }
    }

    #[test]
    pub fn test_grab_requires_input() {
        let mut fixture = Fixture::default();
        let entity = fixture.spawn_hovered(Channel::RemoteRight);

        fixture.tick();
        assert!(!Channel::RemoteRight.holds(&fixture.world, entity));
        assert!(!fixture.held(entity));

        fixture.press(Action::CursorRightGrab);
        fixture.tick();
        assert!(Channel::RemoteRight.holds(&fixture.world, entity));
        assert!(fixture.held(entity));
    }

    #[test]
    pub fn test_grab_requires_holdable() {
        let mut fixture = Fixture::default();
        let entity = fixture.world.spawn(());
        Channel::HandLeft.hover(&mut fixture.world, entity).unwrap();
        fixture.press(Action::LeftHandGrab);

        fixture.tick();
        assert!(!Channel::HandLeft.holds(&fixture.world, entity));
        assert!(!fixture.held(entity));
    }

    #[test]
    pub fn test_grab_only_uses_matching_channel() {
        let mut fixture = Fixture::default();
        let entity = fixture.spawn_hovered(Channel::HandRight);
        fixture.press(Action::CursorRightGrab);
        fixture.press(Action::LeftHandGrab);

        fixture.tick();
        assert!(!is_held_by_any(&fixture.world, entity));

        fixture.press(Action::RightHandGrab);
        fixture.tick();
        assert!(Channel::HandRight.holds(&fixture.world, entity));
        assert!(!Channel::RemoteRight.holds(&fixture.world, entity));
    }

    #[test]
    pub fn test_pinned_entity_cannot_be_grabbed() {
        let mut fixture = Fixture::default();
        let entity = fixture.spawn_hovered(Channel::RemoteLeft);
        fixture.network_context.pin(entity);
        fixture.press(Action::CursorLeftGrab);

        fixture.tick();
        assert!(!Channel::RemoteLeft.holds(&fixture.world, entity));
        assert!(!fixture.held(entity));
    }

    #[test]
    pub fn test_frozen_scene_ignores_pins() {
        let mut fixture = Fixture::default();
        let entity = fixture.spawn_hovered(Channel::RemoteLeft);
        fixture.network_context.pin(entity);
        fixture.scene_context.set_frozen(true);
        fixture.press(Action::CursorLeftGrab);

        fixture.tick();
        assert!(Channel::RemoteLeft.holds(&fixture.world, entity));
        assert!(fixture.held(entity));
    }

    #[test]
    pub fn test_pinned_scene_element_cannot_be_grabbed() {
        let mut fixture = Fixture::default();
        let entity = fixture.spawn_hovered(Channel::HandRight);
        fixture
            .world
            .insert_one(
                entity,
                SceneElement {
                    pinned: true,
                    ..SceneElement::new(7)
                },
            )
            .unwrap();
        fixture.press(Action::RightHandGrab);

        fixture.tick();
        assert!(!fixture.held(entity));

        fixture.scene_context.set_frozen(true);
        fixture.tick();
        assert!(fixture.held(entity));
    }

    #[test]
    pub fn test_media_with_pinned_loader_cannot_be_grabbed() {
        let mut fixture = Fixture::default();
        let loader = fixture.world.spawn((Holdable,));
        let media = fixture.spawn_hovered(Channel::RemoteRight);
        fixture
            .world
            .insert(media, (LoadedByMediaLoader, Parent(loader)))
            .unwrap();
        fixture.network_context.pin(loader);
        fixture.press(Action::CursorRightGrab);

        assert!(!fixture.network_context.is_pinned(media));
        fixture.tick();
        assert!(!Channel::RemoteRight.holds(&fixture.world, media));

        fixture.network_context.unpin(loader);
        fixture.tick();
        assert!(Channel::RemoteRight.holds(&fixture.world, media));
    }

    #[test]
    pub fn test_pinned_parent_ignored_without_loader_tag() {
        let mut fixture = Fixture::default();
        let parent = fixture.world.spawn(());
        let child = fixture.spawn_hovered(Channel::RemoteRight);
        fixture.world.insert_one(child, Parent(parent)).unwrap();
        fixture.network_context.pin(parent);
        fixture.press(Action::CursorRightGrab);

        fixture.tick();
        assert!(Channel::RemoteRight.holds(&fixture.world, child));
    }

    #[test]
    pub fn test_pin_inherited_from_ancestors() {
        let mut fixture = Fixture::default();
        fixture.config.pin_inherits_from_ancestors = true;
        let root = fixture.world.spawn(());
        let middle = fixture.world.spawn((Parent(root),));
        let leaf = fixture.spawn_hovered(Channel::HandLeft);
        fixture.world.insert_one(leaf, Parent(middle)).unwrap();
        fixture.network_context.pin(root);
        fixture.press(Action::LeftHandGrab);

        fixture.tick();
        assert!(!Channel::HandLeft.holds(&fixture.world, leaf));

        fixture.network_context.unpin(root);
        fixture.tick();
        assert!(Channel::HandLeft.holds(&fixture.world, leaf));
    }

    #[test]
    pub fn test_grab_requires_permission() {
        let mut fixture = Fixture::default();
        fixture.permissions_context = PermissionsContext {
            local_user: Some("alice".to_string()),
            can_move_objects: false,
        };
        let theirs = fixture.spawn_hovered(Channel::RemoteRight);
        fixture
            .world
            .insert_one(theirs, SceneElement::owned_by(1, "bob"))
            .unwrap();
        let plain = fixture.spawn_hovered(Channel::HandRight);
        fixture.press(Action::CursorRightGrab);
        fixture.press(Action::RightHandGrab);

        fixture.tick();
        assert!(!fixture.held(theirs));
        assert!(Channel::HandRight.holds(&fixture.world, plain));
    }

    #[test]
    pub fn test_drop_releases_only_that_channel() {
        let mut fixture = Fixture::default();
        let entity = fixture.world.spawn((Holdable,));
        Channel::RemoteRight.hover(&mut fixture.world, entity).unwrap();
        Channel::HandLeft.hover(&mut fixture.world, entity).unwrap();
        fixture.press(Action::CursorRightGrab);
        fixture.press(Action::LeftHandGrab);
        fixture.tick();
        assert!(Channel::RemoteRight.holds(&fixture.world, entity));
        assert!(Channel::HandLeft.holds(&fixture.world, entity));

        fixture.input_context.reset();
        fixture.press(Action::CursorRightDrop);
        fixture.tick();
        assert!(!Channel::RemoteRight.holds(&fixture.world, entity));
        assert!(Channel::HandLeft.holds(&fixture.world, entity));
        assert!(fixture.held(entity));

        fixture.input_context.reset();
        fixture.press(Action::LeftHandDrop);
        fixture.tick();
        assert!(!Channel::HandLeft.holds(&fixture.world, entity));
        assert!(!fixture.held(entity));
    }

    #[test]
    pub fn test_held_persists_without_drop_input() {
        let mut fixture = Fixture::default();
        let entity = fixture.spawn_hovered(Channel::HandRight);
        fixture.press(Action::RightHandGrab);
        fixture.tick();

        Channel::HandRight.unhover(&mut fixture.world, entity);
        fixture.input_context.reset();
        fixture.tick();
        fixture.tick();
        assert!(Channel::HandRight.holds(&fixture.world, entity));
        assert!(fixture.held(entity));
    }

    #[test]
    pub fn test_grab_and_drop_on_different_channels_same_tick() {
        let mut fixture = Fixture::default();
        let first = fixture.spawn_hovered(Channel::RemoteLeft);
        fixture.press(Action::CursorLeftGrab);
        fixture.tick();

        let second = fixture.spawn_hovered(Channel::HandRight);
        fixture.input_context.reset();
        fixture.press(Action::RightHandGrab);
        fixture.press(Action::CursorLeftDrop);
        fixture.tick();

        assert!(!fixture.held(first));
        assert!(Channel::HandRight.holds(&fixture.world, second));
        assert!(fixture.held(second));
    }

    #[test]
    pub fn test_inconsistent_tags_are_left_alone() {
        let mut fixture = Fixture::default();
        let entity = fixture.world.spawn((Holdable,));
        Channel::RemoteRight.hold(&mut fixture.world, entity).unwrap();

        hold_system_inner(
            &mut fixture.world,
            &fixture.input_context,
            &fixture.network_context,
            &fixture.permissions_context,
            &fixture.scene_context,
            &fixture.config,
        );
        assert!(Channel::RemoteRight.holds(&fixture.world, entity));
        assert!(!fixture.held(entity));
    }
}
