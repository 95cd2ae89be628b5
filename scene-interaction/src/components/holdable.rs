/// Marks an entity as something that can be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Holdable;

/// Added while at least one channel holds the entity.
/// Kept in step with the channel specific tags by `hold_system`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Held;

/// The right remote cursor is pointing at this entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoveredRemoteRight;

/// The left remote cursor is pointing at this entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoveredRemoteLeft;

/// The right hand is touching this entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoveredHandRight;

/// The left hand is touching this entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoveredHandLeft;

/// Held by the right remote cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldRemoteRight;

/// Held by the left remote cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldRemoteLeft;

/// Held by the right hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldHandRight;

/// Held by the left hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldHandLeft;

/// Added to media spawned by a loader entity. The loader is the entity's [`super::Parent`]
/// and is the one that is networked, so pins are looked up on it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadedByMediaLoader;
