use hecs::{Entity, World};

use crate::components::Parent;

/// The parent of `entity`, if it has one that is still alive
pub fn parent_of(world: &World, entity: Entity) -> Option<Entity> {
    world
        .get::<&Parent>(entity)
        .ok()
        .map(|parent| parent.0)
        .filter(|parent| world.contains(*parent))
}

/// Walk up the scene graph from `entity`, yielding `entity` first and the root last.
pub fn ancestors(world: &World, entity: Entity) -> Ancestors<'_> {
    Ancestors {
        world,
        next: Some(entity),
        remaining: world.len(),
    }
}

/// Iterator returned by [`ancestors`].
///
/// A well formed graph can't be deeper than the number of entities in the world, so the walk
/// stops there. This keeps a `Parent` cycle from looping forever.
pub struct Ancestors<'a> {
    world: &'a World,
    next: Option<Entity>,
    remaining: u32,
}

impl Iterator for Ancestors<'_> {
    type Item = Entity;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = parent_of(self.world, current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_ancestors() {
        let mut world = World::new();
        let root = world.spawn(());
        let middle = world.spawn((Parent(root),));
        let leaf = world.spawn((Parent(middle),));

        let chain: Vec<_> = ancestors(&world, leaf).collect();
        assert_eq!(chain, vec![leaf, middle, root]);
        assert_eq!(parent_of(&world, root), None);
    }

    #[test]
    pub fn test_ancestors_stops_on_cycle() {
        let mut world = World::new();
        let a = world.spawn(());
        let b = world.spawn((Parent(a),));
        world.insert_one(a, Parent(b)).unwrap();

        assert_eq!(ancestors(&world, a).count(), 2);
    }

    #[test]
    pub fn test_ancestors_of_despawned_parent() {
        let mut world = World::new();
        let parent = world.spawn(());
        let child = world.spawn((Parent(parent),));
        world.despawn(parent).unwrap();

        let chain: Vec<_> = ancestors(&world, child).collect();
        assert_eq!(chain, vec![child]);
        assert_eq!(parent_of(&world, child), None);
    }
}
