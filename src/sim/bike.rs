//! The bike: two independent wheels sharing an engine input
//!
//! The wheels are not tied together; there is no axle or suspension
//! constraint. The left (rear) wheel is the drive wheel. With no throttle the
//! bike's reference point patrols back and forth for demo mode.

use glam::Vec2;

use super::level::LevelQuery;
use super::wheel::Wheel;
use crate::renderer::{View, colors};
use crate::settings::PhysicsSettings;

/// Where the debug readout is drawn
const DEBUG_TEXT_POS: Vec2 = Vec2::new(20.0, 60.0);

#[derive(Debug, Clone)]
pub struct Bike {
    /// Drive wheel
    pub left_wheel: Wheel,
    pub right_wheel: Wheel,

    /// Reference point (bottom-left of the bike)
    pub pos: Vec2,
    /// Reference point at the last (re)start; left patrol bound
    pub start_pos: Vec2,
    /// Anchor the start position was derived from
    pub anchor: Vec2,

    /// Patrol drive velocity, px per update
    pub velocity: Vec2,
    /// Last throttle strength passed to `set_acceleration`
    pub throttle: f32,

    settings: PhysicsSettings,
}

impl Bike {
    pub fn new(anchor: Vec2) -> Self {
        Self::with_settings(anchor, PhysicsSettings::default())
    }

    pub fn with_settings(anchor: Vec2, settings: PhysicsSettings) -> Self {
        let wheel = Wheel::with_params(settings.wheel_radius, settings.gravity, settings.air_drag);
        let mut bike = Self {
            left_wheel: wheel.clone(),
            right_wheel: wheel,
            pos: Vec2::ZERO,
            start_pos: Vec2::ZERO,
            anchor,
            velocity: settings.drive_velocity,
            throttle: 0.0,
            settings,
        };
        bike.apply_demo_seeds();
        bike.update_start_pos(anchor);
        bike
    }

    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    pub fn left_wheel(&self) -> &Wheel {
        &self.left_wheel
    }

    pub fn right_wheel(&self) -> &Wheel {
        &self.right_wheel
    }

    /// Re-derive the bike and wheel positions from an anchor point
    ///
    /// The anchor usually comes from the viewport height, which may not be
    /// known when the bike is built, so this is expected to be called again
    /// once it is.
    pub fn update_start_pos(&mut self, anchor: Vec2) {
        self.anchor = anchor;
        self.pos = Vec2::new(anchor.x, anchor.y - self.settings.start_lift);
        self.start_pos = self.pos;
        log::debug!("Updated start pos: {}", self.pos);

        self.left_wheel
            .set_pos(self.pos.x + self.settings.left_wheel_offset, self.pos.y);
        self.right_wheel
            .set_pos(self.pos.x + self.settings.right_wheel_offset, self.pos.y);
    }

    /// Put the bike back at its anchor with the initial motion
    pub fn reset(&mut self) {
        self.left_wheel.reset();
        self.right_wheel.reset();
        self.throttle = 0.0;
        self.velocity = self.settings.drive_velocity;
        self.apply_demo_seeds();
        self.update_start_pos(self.anchor);
    }

    fn apply_demo_seeds(&mut self) {
        self.right_wheel.velocity = self.settings.demo_right_wheel_velocity;
        self.left_wheel.angular_velocity = self.settings.demo_left_wheel_spin;
    }

    /// Advance one frame
    pub fn update<L: LevelQuery + ?Sized>(&mut self, dt_ms: f32, level: &L) {
        if self.throttle <= 0.0 {
            self.patrol();
        }

        self.left_wheel.update(dt_ms, level);
        self.right_wheel.update(dt_ms, level);
    }

    /// Move the reference point and turn around at either patrol bound
    fn patrol(&mut self) {
        self.pos += self.velocity;

        let past_right = self.pos.x >= self.settings.patrol_right_bound && self.velocity.x > 0.0;
        let back_at_start = self.pos.x <= self.start_pos.x && self.velocity.x < 0.0;
        if past_right || back_at_start {
            // Half turn
            self.velocity = -self.velocity;
        }
    }

    /// Set engine throttle
    ///
    /// `strength` is expected in 0..=1 where 1 is full power. Values outside
    /// that range are not rejected; they scale the drive acceleration linearly.
    pub fn set_acceleration(&mut self, strength: f32) {
        self.throttle = strength;
        let accel = self.settings.engine_acceleration * strength;
        self.left_wheel.set_acceleration(accel, 0.0);
        log::debug!("Acceleration is now {}", accel);
    }

    /// One-line readout of the drive wheel's kinematics
    pub fn debug_info(&self) -> String {
        let w = &self.left_wheel;
        format!(
            "Bike[LWV: ({:.1}, {:.1}), LWA: ({:.1}, {:.1}), LWP: ({:.1}, {:.1})]",
            w.velocity.x, w.velocity.y, w.acceleration.x, w.acceleration.y, w.pos.x, w.pos.y
        )
    }

    pub fn draw<V: View + ?Sized>(&self, view: &mut V) {
        self.left_wheel.draw(view);
        self.right_wheel.draw(view);
        view.draw_text(&self.debug_info(), DEBUG_TEXT_POS, colors::DEBUG_TEXT);
    }
}
