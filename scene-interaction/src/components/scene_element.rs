/// Component added to entities that wrap a node in the host's scene graph.
///
/// Entities carrying one defer to `MovePermission` before they can be held, and can be
/// pinned through the node itself in addition to the network pin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SceneElement {
    /// Identifier of the node in the host scene graph
    pub node_id: usize,
    /// The user that created the node, if known
    pub owner: Option<String>,
    /// Whether the node's pinnable state is set
    pub pinned: bool,
}

impl SceneElement {
    /// Shortcut helper to create an unowned, unpinned element
    pub fn new(node_id: usize) -> Self {
        Self {
            node_id,
            ..Default::default()
        }
    }

    /// Shortcut helper to create an element owned by `owner`
    pub fn owned_by(node_id: usize, owner: impl Into<String>) -> Self {
        Self {
            node_id,
            owner: Some(owner.into()),
            pinned: false,
        }
    }
}
