use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{InteractionError, InteractionResult};

/// Configuration for every system in the crate
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Settings for `hold_system`
    pub hold: HoldConfig,
    /// Settings for `avatar_animation_system`
    pub avatar: AvatarConfig,
}

/// Settings for `hold_system`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HoldConfig {
    /// Treat an entity as pinned if any of its ancestors is pinned by the network.
    ///
    /// When off, only media spawned by a loader looks at its parent's pin.
    pub pin_inherits_from_ancestors: bool,
}

/// Settings for `avatar_animation_system`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// The forward value applied when an on-screen control starts moving the avatar
    pub mobile_forward: f32,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self { mobile_forward: 4.0 }
    }
}

impl InteractionConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> InteractionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse configuration from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> InteractionResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> InteractionResult<()> {
        if !self.avatar.mobile_forward.is_finite() {
            return Err(InteractionError::InvalidValue {
                field: "avatar.mobile_forward",
                message: format!("{} is not a finite number", self.avatar.mobile_forward),
            });
        }

        Ok(())
    }
}
