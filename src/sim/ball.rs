//! Thrown ball
//!
//! Screen coordinates: x grows right, y grows down. `pos` is the ball's
//! top-left anchor, so the ball rests on the floor when `pos.y == floor_y - radius`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::PanelSize;
use super::floor::PetSize;
use crate::tuning::Tuning;

/// A bouncing ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Size class the ball was thrown for (drives radius and floor line)
    pub size: PetSize,
}

impl Ball {
    /// Launch a ball from `origin` with a random sideways push and a strong upward loft
    pub fn throw<R: Rng>(
        id: u32,
        origin: Vec2,
        size: PetSize,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Self {
        let spread = tuning.launch_spread_x;
        let vx = if spread > 0.0 {
            rng.random_range(-spread..=spread)
        } else {
            0.0
        };

        Self {
            id,
            pos: origin,
            vel: Vec2::new(vx, tuning.launch_speed_y),
            radius: size.ball_radius(),
            size,
        }
    }

    /// Y coordinate the ball rests at for a given floor line
    #[inline]
    pub fn rest_y(&self, floor_y: f32) -> f32 {
        floor_y - self.radius
    }

    /// Whether the ball is on (or within `buffer` of) its resting line
    #[inline]
    pub fn is_grounded(&self, floor_y: f32, buffer: f32) -> bool {
        self.pos.y >= self.rest_y(floor_y) - buffer
    }

    /// Advance one frame: gravity, integration, floor and wall bounces
    pub fn tick(&mut self, panel: PanelSize, floor_y: f32, tuning: &Tuning) {
        self.vel.y += tuning.gravity;
        self.pos += self.vel;

        // Floor bounce loses energy
        let rest_y = self.rest_y(floor_y);
        if self.pos.y > rest_y {
            self.pos.y = rest_y;
            self.vel.y *= -tuning.restitution;
        }

        // Walls are perfectly elastic; clamp so the ball never leaves the panel
        let max_x = (panel.width - self.radius).max(0.0);
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x > max_x {
            self.pos.x = max_x;
            self.vel.x = -self.vel.x.abs();
        }
    }
}
