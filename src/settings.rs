//! Host-facing pet settings
//!
//! The values a settings screen would let a user pick. The simulation only
//! ever receives them as plain values; storing them is the host's job.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::{PetColor, PetKind, PetSize, Theme};

/// Pet panel settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pet_kind: PetKind,
    pub pet_color: PetColor,
    pub pet_size: PetSize,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pet_kind: PetKind::Dog,
            pet_color: PetColor::Brown,
            pet_size: PetSize::Medium,
            theme: Theme::None,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build settings from loosely typed names, as a dropdown would hand them over
    pub fn from_names(
        kind: &str,
        color: &str,
        size: &str,
        theme: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            pet_kind: kind.parse()?,
            pet_color: color.parse()?,
            pet_size: size.parse()?,
            theme: theme.parse()?,
        })
    }

    /// Name given to the pet spawned from these settings, e.g. "brown dog"
    pub fn default_pet_name(&self) -> String {
        format!("{} {}", self.pet_color, self.pet_kind)
    }
}
