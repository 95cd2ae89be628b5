use std::collections::HashSet;

use hecs::Entity;

/// Answers whether the network has pinned an entity in place.
pub trait PinOracle {
    fn is_pinned(&self, entity: Entity) -> bool;
}

/// In-memory pin state, mirroring what the networking layer has replicated.
#[derive(Debug, Default, Clone)]
pub struct NetworkContext {
    pinned: HashSet<Entity>,
}

impl NetworkContext {
    pub fn pin(&mut self, entity: Entity) {
        self.pinned.insert(entity);
    }

    pub fn unpin(&mut self, entity: Entity) {
        self.pinned.remove(&entity);
    }
}

impl PinOracle for NetworkContext {
    fn is_pinned(&self, entity: Entity) -> bool {
        self.pinned.contains(&entity)
    }
}
