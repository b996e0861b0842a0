//! Deterministic simulation module
//!
//! All pet and ball behaviour lives here. This module must stay pure:
//! - One call to `PetWorld::tick` per frame, no internal timers
//! - Seeded RNG only
//! - Stable iteration order (insertion order of pets)
//! - No rendering or platform dependencies

pub mod ball;
pub mod floor;
pub mod pet;
pub mod world;

use serde::{Deserialize, Serialize};

pub use ball::Ball;
pub use floor::{FloorOffset, PetSize, Theme, floor_offset, floor_offset_by_name};
pub use pet::{BallInView, Pet, PetColor, PetEvent, PetKind, PetState, Sprite};
pub use world::{EntityId, PetWorld, WorldEvent};

/// Panel dimensions in pixels, supplied by the host every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSize {
    pub width: f32,
    pub height: f32,
}

impl PanelSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
