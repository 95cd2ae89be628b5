#![allow(missing_docs)]
pub mod input_context;
pub mod network_context;
pub mod permissions_context;
pub mod scene_context;

pub use input_context::{Action, ActionValue, InputContext, UserInput};
pub use network_context::{NetworkContext, PinOracle};
pub use permissions_context::{MovePermission, PermissionsContext};
pub use scene_context::{SceneContext, SceneEvent};
