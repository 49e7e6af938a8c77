//! Physics tuning
//!
//! Every knob the wheel and bike read lives here, defaulting to `consts`.
//! Loaded from JSON; anything missing from the file keeps its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable physics parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    // === World ===
    /// Gravity along +y (px/s²)
    pub gravity: f32,
    /// Linear air drag coefficient
    pub air_drag: f32,

    // === Bike ===
    pub wheel_radius: f32,
    /// Drive-wheel acceleration at full throttle (px/s²)
    pub engine_acceleration: f32,
    /// How far above the anchor the bike starts
    pub start_lift: f32,
    pub left_wheel_offset: f32,
    pub right_wheel_offset: f32,

    // === Demo patrol ===
    pub patrol_right_bound: f32,
    pub drive_velocity: Vec2,
    pub demo_right_wheel_velocity: Vec2,
    pub demo_left_wheel_spin: f32,

    // === Stepping ===
    /// Fixed updates per second in normal play
    pub update_rate: f32,
    /// Fixed updates per second in slow motion
    pub slow_motion_update_rate: f32,
    pub max_substeps: u32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            air_drag: AIR_DRAG,

            wheel_radius: WHEEL_RADIUS,
            engine_acceleration: ENGINE_ACCELERATION,
            start_lift: START_LIFT,
            left_wheel_offset: LEFT_WHEEL_OFFSET,
            right_wheel_offset: RIGHT_WHEEL_OFFSET,

            patrol_right_bound: PATROL_RIGHT_BOUND,
            drive_velocity: Vec2::from(DEMO_DRIVE_VELOCITY),
            demo_right_wheel_velocity: Vec2::from(DEMO_RIGHT_WHEEL_VELOCITY),
            demo_left_wheel_spin: DEMO_LEFT_WHEEL_SPIN,

            update_rate: TARGET_UPDATE_RATE,
            slow_motion_update_rate: SLOW_MOTION_UPDATE_RATE,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl PhysicsSettings {
    /// Parse settings, replacing non-positive sizes and rates with defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Replace values the physics cannot run with by their defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        positive_or_default("wheel_radius", &mut self.wheel_radius, defaults.wheel_radius);
        positive_or_default("update_rate", &mut self.update_rate, defaults.update_rate);
        positive_or_default(
            "slow_motion_update_rate",
            &mut self.slow_motion_update_rate,
            defaults.slow_motion_update_rate,
        );
        if self.max_substeps == 0 {
            log::warn!("max_substeps must be at least 1; using {}", defaults.max_substeps);
            self.max_substeps = defaults.max_substeps;
        }
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded physics settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid physics settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default physics settings");
                Self::default()
            }
        }
    }

    /// Milliseconds per fixed step for the given rate
    pub fn step_ms(rate: f32) -> f32 {
        1000.0 / rate
    }
}

fn positive_or_default(name: &str, value: &mut f32, default: f32) {
    // Also catches NaN
    if !(*value > 0.0) {
        log::warn!("{} must be positive, got {}; using {}", name, value, default);
        *value = default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let s = PhysicsSettings::default();
        assert_eq!(s.gravity, 9.81);
        assert_eq!(s.wheel_radius, 30.0);
        assert_eq!(s.engine_acceleration, 50.0);
        assert_eq!(s.patrol_right_bound, 380.0);
        assert_eq!(s.drive_velocity, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = PhysicsSettings::from_json(r#"{ "gravity": 20.0, "max_substeps": 4 }"#).unwrap();
        assert_eq!(s.gravity, 20.0);
        assert_eq!(s.max_substeps, 4);
        assert_eq!(s.air_drag, AIR_DRAG);
    }

    #[test]
    fn test_json_round_trip() {
        let s = PhysicsSettings {
            wheel_radius: 24.0,
            ..Default::default()
        };
        let parsed = PhysicsSettings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(parsed, s);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(PhysicsSettings::from_json("{ gravity: }").is_err());
    }

    #[test]
    fn test_non_positive_values_fall_back_to_defaults() {
        let s = PhysicsSettings::from_json(
            r#"{ "wheel_radius": 0.0, "update_rate": -5.0, "slow_motion_update_rate": 0.0, "max_substeps": 0, "gravity": 12.0 }"#,
        )
        .unwrap();
        assert_eq!(s.wheel_radius, WHEEL_RADIUS);
        assert_eq!(s.update_rate, TARGET_UPDATE_RATE);
        assert_eq!(s.slow_motion_update_rate, SLOW_MOTION_UPDATE_RATE);
        assert_eq!(s.max_substeps, MAX_SUBSTEPS);
        // Valid values are kept
        assert_eq!(s.gravity, 12.0);
    }

    #[test]
    fn test_zero_radius_file_yields_a_working_bike() {
        use crate::sim::{Bike, Level, Stepper};

        let path = std::env::temp_dir().join("broken-bonez-zero-radius.json");
        std::fs::write(&path, r#"{ "wheel_radius": 0.0, "update_rate": 0.0 }"#).unwrap();
        let s = PhysicsSettings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(s.wheel_radius, WHEEL_RADIUS);

        let mut stepper = Stepper::new(s.update_rate, s.update_rate, s.max_substeps);
        assert_eq!(stepper.consume(20.0), 1);

        let mut bike = Bike::with_settings(Vec2::new(0.0, 800.0), s);
        let level = Level::flat(600.0, 2000.0, 100.0);
        for _ in 0..2000 {
            bike.update(16.0, &level);
        }
        assert!(bike.left_wheel.is_grounded());
        assert!(bike.left_wheel.angular_velocity.is_finite());
        assert!(bike.right_wheel.angular_velocity.is_finite());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let s = PhysicsSettings::load("/nonexistent/broken-bonez/settings.json");
        assert_eq!(s, PhysicsSettings::default());
    }
}
