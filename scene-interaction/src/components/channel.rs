use hecs::{Component, Entity, NoSuchEntity, World};

use crate::{
    components::{
        HeldHandLeft, HeldHandRight, HeldRemoteLeft, HeldRemoteRight, Holdable, HoveredHandLeft,
        HoveredHandRight, HoveredRemoteLeft, HoveredRemoteRight,
    },
    contexts::Action,
};

/// One of the input sources that can take hold of an entity.
///
/// Each channel has its own hover and hold tag, so an entity can be held by several channels
/// at once, but a channel holds at most one entity.
#[derive(Debug, PartialEq, Clone, Copy, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    /// Cursor cast from the right controller
    RemoteRight,
    /// Cursor cast from the left controller
    RemoteLeft,
    /// Right tracked hand
    HandRight,
    /// Left tracked hand
    HandLeft,
}

impl Channel {
    /// Every channel, in the order the hold system evaluates them.
    pub const ALL: [Channel; 4] = [
        Channel::RemoteRight,
        Channel::RemoteLeft,
        Channel::HandRight,
        Channel::HandLeft,
    ];

    /// The action that grabs with this channel
    pub fn grab_action(self) -> Action {
        match self {
            Channel::RemoteRight => Action::CursorRightGrab,
            Channel::RemoteLeft => Action::CursorLeftGrab,
            Channel::HandRight => Action::RightHandGrab,
            Channel::HandLeft => Action::LeftHandGrab,
        }
    }

    /// The action that drops whatever this channel holds
    pub fn drop_action(self) -> Action {
        match self {
            Channel::RemoteRight => Action::CursorRightDrop,
            Channel::RemoteLeft => Action::CursorLeftDrop,
            Channel::HandRight => Action::RightHandDrop,
            Channel::HandLeft => Action::LeftHandDrop,
        }
    }

    /// The first `Holdable` entity this channel is hovering, in query order.
    pub fn first_hovered(self, world: &World) -> Option<Entity> {
        match self {
            Channel::RemoteRight => first_holdable_with::<HoveredRemoteRight>(world),
            Channel::RemoteLeft => first_holdable_with::<HoveredRemoteLeft>(world),
            Channel::HandRight => first_holdable_with::<HoveredHandRight>(world),
            Channel::HandLeft => first_holdable_with::<HoveredHandLeft>(world),
        }
    }

    /// The first `Holdable` entity this channel holds, in query order.
    pub fn first_held(self, world: &World) -> Option<Entity> {
        match self {
            Channel::RemoteRight => first_holdable_with::<HeldRemoteRight>(world),
            Channel::RemoteLeft => first_holdable_with::<HeldRemoteLeft>(world),
            Channel::HandRight => first_holdable_with::<HeldHandRight>(world),
            Channel::HandLeft => first_holdable_with::<HeldHandLeft>(world),
        }
    }

    /// Is `entity` tagged as hovered by this channel?
    pub fn hovers(self, world: &World, entity: Entity) -> bool {
        match self {
            Channel::RemoteRight => has::<HoveredRemoteRight>(world, entity),
            Channel::RemoteLeft => has::<HoveredRemoteLeft>(world, entity),
            Channel::HandRight => has::<HoveredHandRight>(world, entity),
            Channel::HandLeft => has::<HoveredHandLeft>(world, entity),
        }
    }

    /// Is `entity` tagged as held by this channel?
    pub fn holds(self, world: &World, entity: Entity) -> bool {
        match self {
            Channel::RemoteRight => has::<HeldRemoteRight>(world, entity),
            Channel::RemoteLeft => has::<HeldRemoteLeft>(world, entity),
            Channel::HandRight => has::<HeldHandRight>(world, entity),
            Channel::HandLeft => has::<HeldHandLeft>(world, entity),
        }
    }

    /// Tag `entity` as hovered by this channel. Normally done by the targeting system.
    pub fn hover(self, world: &mut World, entity: Entity) -> Result<(), NoSuchEntity> {
        match self {
            Channel::RemoteRight => world.insert_one(entity, HoveredRemoteRight),
            Channel::RemoteLeft => world.insert_one(entity, HoveredRemoteLeft),
            Channel::HandRight => world.insert_one(entity, HoveredHandRight),
            Channel::HandLeft => world.insert_one(entity, HoveredHandLeft),
        }
    }

    /// Remove this channel's hover tag from `entity`. Returns whether it was present.
    pub fn unhover(self, world: &mut World, entity: Entity) -> bool {
        match self {
            Channel::RemoteRight => world.remove_one::<HoveredRemoteRight>(entity).is_ok(),
            Channel::RemoteLeft => world.remove_one::<HoveredRemoteLeft>(entity).is_ok(),
            Channel::HandRight => world.remove_one::<HoveredHandRight>(entity).is_ok(),
            Channel::HandLeft => world.remove_one::<HoveredHandLeft>(entity).is_ok(),
        }
    }

    /// Add only this channel's hold tag to `entity`. The generic `Held` tag is left alone.
    pub fn hold(self, world: &mut World, entity: Entity) -> Result<(), NoSuchEntity> {
        match self {
            Channel::RemoteRight => world.insert_one(entity, HeldRemoteRight),
            Channel::RemoteLeft => world.insert_one(entity, HeldRemoteLeft),
            Channel::HandRight => world.insert_one(entity, HeldHandRight),
            Channel::HandLeft => world.insert_one(entity, HeldHandLeft),
        }
    }

    /// Remove only this channel's hold tag from `entity`. Returns whether it was present.
    pub fn release(self, world: &mut World, entity: Entity) -> bool {
        match self {
            Channel::RemoteRight => world.remove_one::<HeldRemoteRight>(entity).is_ok(),
            Channel::RemoteLeft => world.remove_one::<HeldRemoteLeft>(entity).is_ok(),
            Channel::HandRight => world.remove_one::<HeldHandRight>(entity).is_ok(),
            Channel::HandLeft => world.remove_one::<HeldHandLeft>(entity).is_ok(),
        }
    }
}

/// Is `entity` held by any channel?
pub fn is_held_by_any(world: &World, entity: Entity) -> bool {
    Channel::ALL
        .iter()
        .any(|channel| channel.holds(world, entity))
}

pub(crate) fn has<T: Component>(world: &World, entity: Entity) -> bool {
    world
        .entity(entity)
        .map(|entity_ref| entity_ref.has::<T>())
        .unwrap_or(false)
}

fn first_holdable_with<T: Component>(world: &World) -> Option<Entity> {
    world
        .query::<(&Holdable, &T)>()
        .iter()
        .next()
        .map(|(entity, _)| entity)
}
