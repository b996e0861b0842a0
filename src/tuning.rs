//! Data-driven behaviour tuning
//!
//! Every magic number the pets and the ball react to lives here so hosts can
//! adjust feel without touching simulation code.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::PetState;

/// Tunable simulation constants (distances in pixels, times in ticks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ball ===
    /// Downward acceleration added to ball velocity every tick
    pub gravity: f32,
    /// Fraction of vertical speed kept after a floor bounce
    pub restitution: f32,
    /// Initial vertical velocity of a throw (negative is up)
    pub launch_speed_y: f32,
    /// Horizontal launch velocity is uniform in [-spread, spread]
    pub launch_spread_x: f32,

    // === Chase ===
    /// Per-tick chance a pet notices a grounded ball
    pub catch_probability: f32,
    /// Slack above the ball's resting line that still counts as "on the floor"
    pub floor_buffer: f32,
    /// Horizontal distance at which a chasing pet stops stepping
    pub hold_distance: f32,
    /// Horizontal reach for grabbing a grounded ball
    pub floor_catch_distance: f32,
    /// Horizontal reach for grabbing an airborne ball
    pub air_catch_distance: f32,
    /// Vertical slack around the pet's head height for airborne catches
    pub air_catch_height: f32,
    /// Chase speed as a multiple of base walking speed
    pub chase_speed_multiplier: f32,

    // === Idle/walk cycle ===
    /// Ticks spent in Idle or Walk before toggling
    pub dwell_ticks: u32,
    /// State a freshly spawned pet starts in
    pub initial_state: PetState,
    /// Spawn x used before any panel width is known
    pub default_spawn_x: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            restitution: 0.7,
            launch_speed_y: -10.0,
            launch_spread_x: 5.0,

            catch_probability: 0.8,
            floor_buffer: 5.0,
            hold_distance: 10.0,
            floor_catch_distance: 25.0,
            air_catch_distance: 35.0,
            air_catch_height: 20.0,
            chase_speed_multiplier: 1.5,

            dwell_ticks: 180,
            initial_state: PetState::Idle,
            default_spawn_x: 50.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that every value is physically meaningful
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &str) -> ConfigError {
            ConfigError::InvalidTuning {
                field,
                reason: reason.to_string(),
            }
        }

        if !(0.0..=1.0).contains(&self.catch_probability) {
            return Err(invalid("catch_probability", "must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(invalid("restitution", "must be within [0, 1]"));
        }
        if self.gravity < 0.0 || !self.gravity.is_finite() {
            return Err(invalid("gravity", "must be a finite non-negative number"));
        }
        if self.launch_spread_x < 0.0 {
            return Err(invalid("launch_spread_x", "must not be negative"));
        }
        let distances = [
            ("floor_buffer", self.floor_buffer),
            ("hold_distance", self.hold_distance),
            ("floor_catch_distance", self.floor_catch_distance),
            ("air_catch_distance", self.air_catch_distance),
            ("air_catch_height", self.air_catch_height),
        ];
        for (field, value) in distances {
            if value < 0.0 || !value.is_finite() {
                return Err(invalid(field, "must be a finite non-negative distance"));
            }
        }
        if self.chase_speed_multiplier <= 0.0 {
            return Err(invalid("chase_speed_multiplier", "must be positive"));
        }
        if self.dwell_ticks == 0 {
            return Err(invalid("dwell_ticks", "must be at least one tick"));
        }
        if self.initial_state == PetState::Chase {
            return Err(invalid("initial_state", "pets must start idle or walking"));
        }
        Ok(())
    }

    /// Validated copy of `self`, or the defaults if any value is out of range
    pub fn sanitized(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Rejecting tuning ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "catch_probability": 0.85, "initial_state": "Walk" }"#)
            .unwrap();
        assert_eq!(tuning.catch_probability, 0.85);
        assert_eq!(tuning.initial_state, PetState::Walk);
        assert_eq!(tuning.dwell_ticks, 180);
        assert_eq!(tuning.floor_buffer, 5.0);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = Tuning::from_json(r#"{ "catch_probability": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTuning {
                field: "catch_probability",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_chase_start() {
        let tuning = Tuning {
            initial_state: PetState::Chase,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
        assert_eq!(tuning.sanitized(), Tuning::default());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ nope"),
            Err(ConfigError::Json(_))
        ));
    }
}
