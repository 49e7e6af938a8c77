//! Simulation state
//!
//! Everything the frame loop advances: the bike, the level it rides on, the
//! fixed-step clock and the slow-motion switch.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bike::Bike;
use super::level::Level;
use super::tick::Stepper;
use super::wheel::{ContactState, Wheel};
use crate::settings::PhysicsSettings;

/// Read-only view of one wheel for drawing, camera follow or recording
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelSnapshot {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub radius: f32,
    pub contact: ContactState,
}

impl From<&Wheel> for WheelSnapshot {
    fn from(wheel: &Wheel) -> Self {
        Self {
            pos: wheel.pos,
            velocity: wheel.velocity,
            rotation: wheel.rotation,
            radius: wheel.radius,
            contact: wheel.contact,
        }
    }
}

/// Bike kinematics at one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BikeSnapshot {
    pub tick: u64,
    pub time_ms: f64,
    pub pos: Vec2,
    pub left_wheel: WheelSnapshot,
    pub right_wheel: WheelSnapshot,
}

impl BikeSnapshot {
    /// Midpoint between the wheel hubs, for camera follow
    pub fn center(&self) -> Vec2 {
        (self.left_wheel.pos + self.right_wheel.pos) * 0.5
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub bike: Bike,
    pub level: Level,
    pub stepper: Stepper,
    /// Simulated time since the last new game
    pub time_ms: f64,
    /// Fixed steps since the last new game
    pub ticks: u64,
    pub slow_motion: bool,
}

impl GameState {
    pub fn new(level: Level, anchor: Vec2, settings: PhysicsSettings) -> Self {
        let stepper = Stepper::new(
            settings.update_rate,
            settings.update_rate,
            settings.max_substeps,
        );
        Self {
            bike: Bike::with_settings(anchor, settings),
            level,
            stepper,
            time_ms: 0.0,
            ticks: 0,
            slow_motion: false,
        }
    }

    /// Restart the run on the same level
    pub fn new_game(&mut self) {
        self.bike.reset();
        self.set_slow_motion(false);
        self.stepper.clear();
        self.time_ms = 0.0;
        self.ticks = 0;
        log::info!("New game");
    }

    /// Switch between normal and slow-motion update rates
    pub fn set_slow_motion(&mut self, enabled: bool) {
        self.slow_motion = enabled;
        let settings = self.bike.settings();
        let rate = if enabled {
            settings.slow_motion_update_rate
        } else {
            settings.update_rate
        };
        self.stepper.set_update_rate(rate);
    }

    /// Viewport changed: re-anchor the bike at the bottom-left
    pub fn update_size(&mut self, _width: f32, height: f32) {
        let anchor = Vec2::new(self.bike.anchor.x, height);
        self.bike.update_start_pos(anchor);
    }

    pub fn snapshot(&self) -> BikeSnapshot {
        BikeSnapshot {
            tick: self.ticks,
            time_ms: self.time_ms,
            pos: self.bike.pos,
            left_wheel: WheelSnapshot::from(self.bike.left_wheel()),
            right_wheel: WheelSnapshot::from(self.bike.right_wheel()),
        }
    }
}
