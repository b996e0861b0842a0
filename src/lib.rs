//! Pocket Pets - virtual pets that live in a side panel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pets, ball physics, floor model, world loop)
//! - `tuning`: Data-driven behaviour constants
//! - `settings`: Plain-value pet/theme configuration from the host
//! - `assets`: Sprite and background keys for the renderer

pub mod assets;
pub mod error;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use settings::Settings;
pub use sim::{PanelSize, PetWorld, WorldEvent};
pub use tuning::Tuning;

/// Frame cadence constants
pub mod consts {
    /// Display refresh the simulation is tuned for
    pub const TICKS_PER_SECOND: u32 = 60;
}
