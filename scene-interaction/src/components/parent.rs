use hecs::Entity;

/// Component added to indicate that an entity has a parent in the scene graph.
/// An entity without one is a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent(pub Entity);
