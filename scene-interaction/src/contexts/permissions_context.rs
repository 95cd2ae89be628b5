use crate::components::SceneElement;

/// Decides whether the local user may move a scene node.
pub trait MovePermission {
    fn can_move(&self, element: &SceneElement) -> bool;
}

/// Room permissions for the local user.
///
/// Users can always move what they created. Anything else needs the room-wide move
/// permission.
#[derive(Debug, Clone)]
pub struct PermissionsContext {
    pub local_user: Option<String>,
    pub can_move_objects: bool,
}

impl Default for PermissionsContext {
    fn default() -> Self {
        Self {
            local_user: None,
            can_move_objects: true,
        }
    }
}

impl MovePermission for PermissionsContext {
    fn can_move(&self, element: &SceneElement) -> bool {
        if self.can_move_objects {
            return true;
        }

        match (&element.owner, &self.local_user) {
            (Some(owner), Some(local_user)) => owner == local_user,
            _ => false,
        }
    }
}
