//! Pets and their behaviour state machine
//!
//! A pet alternates between idling and walking on a fixed dwell timer. When a
//! ball lands it may notice it, chase it down at a faster pace, and catch it.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::PanelSize;
use super::ball::Ball;
use super::floor::{FloorOffset, PetSize};
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Species of pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetKind {
    #[default]
    Dog,
    Crab,
    Clippy,
    Chicken,
    Fox,
}

impl PetKind {
    pub const ALL: [PetKind; 5] = [
        PetKind::Dog,
        PetKind::Crab,
        PetKind::Clippy,
        PetKind::Chicken,
        PetKind::Fox,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetKind::Dog => "dog",
            PetKind::Crab => "crab",
            PetKind::Clippy => "clippy",
            PetKind::Chicken => "chicken",
            PetKind::Fox => "fox",
        }
    }
}

impl fmt::Display for PetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownKind(s.to_string()))
    }
}

/// Color variant of a pet's sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetColor {
    #[default]
    Brown,
    Black,
    Red,
    Green,
    Yellow,
    Gray,
    White,
}

impl PetColor {
    pub const ALL: [PetColor; 7] = [
        PetColor::Brown,
        PetColor::Black,
        PetColor::Red,
        PetColor::Green,
        PetColor::Yellow,
        PetColor::Gray,
        PetColor::White,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetColor::Brown => "brown",
            PetColor::Black => "black",
            PetColor::Red => "red",
            PetColor::Green => "green",
            PetColor::Yellow => "yellow",
            PetColor::Gray => "gray",
            PetColor::White => "white",
        }
    }
}

impl fmt::Display for PetColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetColor::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownColor(s.to_string()))
    }
}

/// Behaviour state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PetState {
    #[default]
    Idle,
    Walk,
    /// Running after the ball (drawn with the run sprite)
    Chase,
}

/// Animation a renderer should show for a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Idle,
    Walk,
    Run,
    WithBall,
}

impl Sprite {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sprite::Idle => "idle",
            Sprite::Walk => "walk",
            Sprite::Run => "run",
            Sprite::WithBall => "with_ball",
        }
    }
}

/// Something a pet did this tick that its owner has to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetEvent {
    CaughtBall,
}

/// The ball as seen by a pet during one tick, along with the floor it bounces on
#[derive(Debug, Clone, Copy)]
pub struct BallInView<'a> {
    pub ball: &'a Ball,
    pub floor_y: f32,
}

impl BallInView<'_> {
    #[inline]
    fn is_grounded(&self, buffer: f32) -> bool {
        self.ball.is_grounded(self.floor_y, buffer)
    }
}

/// A pet entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: u32,
    pub kind: PetKind,
    pub color: PetColor,
    pub size: PetSize,
    pub name: String,
    /// Floor offset for the current theme at this pet's size
    pub floor: FloorOffset,
    /// Top-left of the sprite; y follows the floor line
    pub pos: Vec2,
    /// +1 facing right, -1 facing left
    pub direction: f32,
    pub state: PetState,
    /// Ticks spent in the current idle/walk phase
    pub dwell_ticks: u32,
    /// Showing off a caught ball (cleared on the next idle/walk toggle)
    pub holding_ball: bool,
}

impl Pet {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        kind: PetKind,
        color: PetColor,
        size: PetSize,
        name: impl Into<String>,
        floor: FloorOffset,
        spawn_x: f32,
        initial_state: PetState,
    ) -> Self {
        Self {
            id,
            kind,
            color,
            size,
            name: name.into(),
            floor,
            // y is derived from the floor once a panel height is known
            pos: Vec2::new(spawn_x, 0.0),
            direction: 1.0,
            state: initial_state,
            dwell_ticks: 0,
            holding_ball: false,
        }
    }

    /// Base walking speed for this pet's size
    #[inline]
    pub fn speed(&self) -> f32 {
        self.size.base_speed()
    }

    #[inline]
    pub fn footprint(&self) -> f32 {
        self.size.footprint()
    }

    /// Rightmost x the sprite can occupy inside a panel
    #[inline]
    pub fn max_x(&self, panel: PanelSize) -> f32 {
        (panel.width - self.footprint()).max(0.0)
    }

    /// Y coordinate of this pet's floor line inside a panel
    #[inline]
    pub fn floor_y(&self, panel: PanelSize) -> f32 {
        self.floor.floor_y(panel.height)
    }

    /// Sprite top when standing on the floor line of a panel
    #[inline]
    pub fn y(&self, panel: PanelSize) -> f32 {
        self.floor_y(panel) - self.footprint()
    }

    /// Snap `pos.y` onto the floor line of a panel
    pub fn place_on_floor(&mut self, panel: PanelSize) {
        self.pos.y = self.y(panel);
    }

    /// Swap the floor offset in place (theme change); only the floor changes
    pub fn set_floor(&mut self, floor: FloorOffset) {
        self.floor = floor;
    }

    pub fn sprite(&self) -> Sprite {
        match self.state {
            PetState::Walk => Sprite::Walk,
            PetState::Chase => Sprite::Run,
            PetState::Idle if self.holding_ball => Sprite::WithBall,
            PetState::Idle => Sprite::Idle,
        }
    }

    /// Sprite should be drawn flipped horizontally
    #[inline]
    pub fn is_mirrored(&self) -> bool {
        self.direction < 0.0
    }

    /// Advance one frame
    pub fn tick<R: Rng>(
        &mut self,
        panel: PanelSize,
        ball: Option<BallInView<'_>>,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<PetEvent> {
        self.place_on_floor(panel);

        match (self.state, ball) {
            (PetState::Chase, Some(view)) => {
                let floor_y = self.floor_y(panel);
                return self.chase(panel, floor_y, view, tuning);
            }
            (PetState::Chase, None) => {
                // Ball is gone (caught by someone else or removed)
                log::debug!("Pet {} lost the ball, going idle", self.id);
                self.state = PetState::Idle;
            }
            (_, Some(view)) => {
                // Watching the ball: hold still until it lands and the pet reacts
                if view.is_grounded(tuning.floor_buffer)
                    && rng.random::<f32>() < tuning.catch_probability
                {
                    log::debug!("Pet {} starts chasing ball {}", self.id, view.ball.id);
                    self.state = PetState::Chase;
                }
                return None;
            }
            (_, None) => {}
        }

        self.dwell(panel, tuning);
        None
    }

    /// Run toward the ball and try to catch it
    fn chase(
        &mut self,
        panel: PanelSize,
        floor_y: f32,
        view: BallInView<'_>,
        tuning: &Tuning,
    ) -> Option<PetEvent> {
        let speed = self.speed() * tuning.chase_speed_multiplier;
        let dx = view.ball.pos.x - self.pos.x;
        let x_distance = dx.abs();

        if x_distance > tuning.hold_distance {
            self.direction = if dx > 0.0 { 1.0 } else { -1.0 };
            self.pos.x = (self.pos.x + speed * self.direction).clamp(0.0, self.max_x(panel));
        }

        let grounded = view.is_grounded(tuning.floor_buffer);
        let catch_on_floor = grounded && x_distance < tuning.floor_catch_distance;
        let catch_in_air = !grounded
            && x_distance < tuning.air_catch_distance
            && (view.ball.pos.y - (floor_y - self.footprint())).abs() < tuning.air_catch_height;

        if catch_on_floor || catch_in_air {
            log::debug!(
                "Pet {} caught ball {} ({})",
                self.id,
                view.ball.id,
                if grounded { "floor" } else { "air" }
            );
            self.state = PetState::Idle;
            self.holding_ball = true;
            return Some(PetEvent::CaughtBall);
        }

        None
    }

    /// Idle/walk cycle
    fn dwell(&mut self, panel: PanelSize, tuning: &Tuning) {
        self.dwell_ticks += 1;
        if self.dwell_ticks >= tuning.dwell_ticks {
            self.holding_ball = false;
            self.state = match self.state {
                PetState::Idle => PetState::Walk,
                _ => PetState::Idle,
            };
            self.dwell_ticks = 0;
            log::debug!("Pet {} now {:?}", self.id, self.state);
        }

        if self.state == PetState::Walk {
            let max_x = self.max_x(panel);
            self.pos.x += self.speed() * self.direction;
            if self.pos.x > max_x {
                self.pos.x = max_x;
                self.direction = -1.0;
            } else if self.pos.x < 0.0 {
                self.pos.x = 0.0;
                self.direction = 1.0;
            }
        }
    }
}
