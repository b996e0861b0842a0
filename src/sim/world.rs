//! Per-frame orchestration of all pets and the ball
//!
//! `PetWorld` is the only owner of entities. Hosts call the management
//! methods between frames and `tick` once per display refresh.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::PanelSize;
use super::ball::Ball;
use super::floor::{PetSize, Theme, floor_offset};
use super::pet::{BallInView, Pet, PetColor, PetEvent, PetKind};
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Identifier handed back for spawned pets and thrown balls
pub type EntityId = u32;

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    BallCaught { pet: EntityId, ball: EntityId },
}

/// The simulation: pets in stable insertion order plus at most one ball
#[derive(Debug, Clone)]
pub struct PetWorld {
    seed: u64,
    rng: Pcg32,
    tuning: Tuning,
    theme: Theme,
    pets: Vec<Pet>,
    ball: Option<Ball>,
    /// Last panel size reported by `tick`
    panel: Option<PanelSize>,
    time_ticks: u64,
    next_id: EntityId,
}

impl PetWorld {
    pub fn new(seed: u64, theme: Theme, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning: tuning.sanitized(),
            theme,
            pets: Vec::new(),
            ball: None,
            panel: None,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Open a panel from host settings: apply the theme and spawn the configured pet
    pub fn open(seed: u64, settings: &Settings, tuning: Tuning) -> Self {
        let mut world = Self::new(seed, settings.theme, tuning);
        world.spawn_pet(
            settings.pet_kind,
            settings.pet_color,
            settings.pet_size,
            settings.default_pet_name(),
        );
        log::info!("Pet panel opened (seed {}, theme {})", seed, settings.theme);
        world
    }

    fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn panel(&self) -> Option<PanelSize> {
        self.panel
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn pet(&self, id: EntityId) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    /// Add a pet at the horizontal centre of the panel
    pub fn spawn_pet(
        &mut self,
        kind: PetKind,
        color: PetColor,
        size: PetSize,
        name: impl Into<String>,
    ) -> EntityId {
        let id = self.next_entity_id();
        let spawn_x = match self.panel {
            Some(panel) => panel.width / 2.0,
            None => self.tuning.default_spawn_x,
        };
        let mut pet = Pet::new(
            id,
            kind,
            color,
            size,
            name,
            floor_offset(self.theme, size),
            spawn_x,
            self.tuning.initial_state,
        );
        if let Some(panel) = self.panel {
            pet.place_on_floor(panel);
        }
        log::info!("Spawned pet {} '{}' ({} {} {})", id, pet.name, size, color, kind);
        self.pets.push(pet);
        id
    }

    /// Remove a pet; returns false if it was already gone
    pub fn remove_pet(&mut self, id: EntityId) -> bool {
        match self.pets.iter().position(|p| p.id == id) {
            Some(index) => {
                self.pets.remove(index);
                log::info!("Removed pet {}", id);
                true
            }
            None => false,
        }
    }

    pub fn remove_all_pets(&mut self) {
        if !self.pets.is_empty() {
            log::info!("Removing all {} pets", self.pets.len());
        }
        self.pets.clear();
    }

    /// Replace every pet with a single new one
    pub fn reset_and_spawn(
        &mut self,
        kind: PetKind,
        color: PetColor,
        size: PetSize,
        name: impl Into<String>,
    ) -> EntityId {
        self.remove_all_pets();
        self.spawn_pet(kind, color, size, name)
    }

    /// Throw a new ball from the panel centre, replacing any ball in flight
    pub fn throw_ball(&mut self, size: PetSize) -> EntityId {
        if let Some(old) = self.remove_ball() {
            log::debug!("Ball {} replaced by a new throw", old.id);
        }

        let id = self.next_entity_id();
        let origin = match self.panel {
            Some(panel) => Vec2::new(panel.width / 2.0, panel.height / 2.0),
            None => Vec2::new(self.tuning.default_spawn_x, 0.0),
        };
        let ball = Ball::throw(id, origin, size, &self.tuning, &mut self.rng);
        log::info!("Threw ball {} ({}) with velocity {:?}", id, size, ball.vel);
        self.ball = Some(ball);
        id
    }

    /// Detach the ball, if any
    pub fn remove_ball(&mut self) -> Option<Ball> {
        self.ball.take()
    }

    /// Switch theme and move every pet onto the new floor without resetting it
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        for pet in &mut self.pets {
            pet.set_floor(floor_offset(theme, pet.size));
            if let Some(panel) = self.panel {
                pet.place_on_floor(panel);
            }
        }
        log::info!("Theme set to {}", theme);
    }

    /// Advance the whole simulation by one frame
    pub fn tick(&mut self, panel: PanelSize) -> Vec<WorldEvent> {
        self.panel = Some(panel);
        self.time_ticks += 1;

        let mut events = Vec::new();
        // Balls bounce on the floor drawn for their own size class
        let ball_floor_y = self
            .ball
            .as_ref()
            .map(|b| floor_offset(self.theme, b.size).floor_y(panel.height));

        for pet in &mut self.pets {
            let view = match (&self.ball, ball_floor_y) {
                (Some(ball), Some(floor_y)) => Some(BallInView { ball, floor_y }),
                _ => None,
            };

            let event = pet.tick(panel, view, &self.tuning, &mut self.rng);
            if event == Some(PetEvent::CaughtBall) {
                if let Some(ball) = self.ball.take() {
                    log::info!("Pet {} '{}' caught ball {}", pet.id, pet.name, ball.id);
                    events.push(WorldEvent::BallCaught {
                        pet: pet.id,
                        ball: ball.id,
                    });
                }
            }
        }

        if let Some(ball) = self.ball.as_mut() {
            let floor_y = floor_offset(self.theme, ball.size).floor_y(panel.height);
            ball.tick(panel, floor_y, &self.tuning);
        }

        events
    }

    /// Drop every entity (panel close); the world can be reused afterwards
    pub fn teardown(&mut self) {
        self.remove_all_pets();
        self.remove_ball();
        log::info!("Pet panel torn down after {} ticks", self.time_ticks);
    }
}
