//! A single wheel: circular rigid body with ground contact
//!
//! Units: positions in px, velocities in px/s, accelerations in px/s²,
//! rotation in radians. `update` takes the frame time in milliseconds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::LevelQuery;
use super::shapes::{Circle, Rect};
use super::vector::VectorExt;
use crate::consts::{AIR_DRAG, GRAVITY, WHEEL_RADIUS};
use crate::ms_to_secs;
use crate::renderer::{Fill, View, colors};

/// Whether the wheel touched ground on its last update
///
/// Re-derived from the level query every frame; there is no hysteresis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContactState {
    #[default]
    Airborne,
    Grounded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wheel {
    pub pos: Vec2,
    pub velocity: Vec2,
    /// Applied acceleration (engine), excluding gravity
    pub base_acceleration: Vec2,
    /// Acceleration used on the last update: base + gravity
    pub acceleration: Vec2,

    pub rotation: f32,
    pub angular_velocity: f32,
    pub angular_acceleration: f32,

    pub radius: f32,
    pub gravity: f32,
    pub air_drag: f32,

    pub contact: ContactState,
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new(WHEEL_RADIUS)
    }
}

impl Wheel {
    pub fn new(radius: f32) -> Self {
        Self::with_params(radius, GRAVITY, AIR_DRAG)
    }

    pub fn with_params(radius: f32, gravity: f32, air_drag: f32) -> Self {
        debug_assert!(radius > 0.0, "wheel radius must be positive, got {radius}");
        Self {
            pos: Vec2::ZERO,
            velocity: Vec2::ZERO,
            base_acceleration: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            rotation: 0.0,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            radius,
            gravity,
            air_drag,
            contact: ContactState::Airborne,
        }
    }

    /// Collision proxy centered on the current position
    #[inline]
    pub fn bounding_circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    /// Set the applied (non-gravity) acceleration
    pub fn set_acceleration(&mut self, x: f32, y: f32) {
        self.base_acceleration = Vec2::new(x, y);
    }

    /// Clear all motion, keeping position and physical parameters
    pub fn reset(&mut self) {
        self.velocity = Vec2::ZERO;
        self.base_acceleration = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
        self.rotation = 0.0;
        self.angular_velocity = 0.0;
        self.angular_acceleration = 0.0;
        self.contact = ContactState::Airborne;
    }

    /// Advance one frame, then resolve ground contact
    pub fn update<L: LevelQuery + ?Sized>(&mut self, dt_ms: f32, level: &L) {
        self.integrate(ms_to_secs(dt_ms));
        self.contact = self.resolve_ground_contact(level);
    }

    /// Semi-implicit Euler step with gravity and linear air drag
    ///
    /// Acceleration is rebuilt from `base_acceleration` every call, so nothing
    /// accumulates across frames.
    pub fn integrate(&mut self, dt_secs: f32) {
        self.acceleration = self.base_acceleration + Vec2::new(0.0, self.gravity);
        let air_resistance = -self.air_drag * self.velocity;
        let resultant = self.acceleration + air_resistance;

        self.velocity.mult_add(resultant, dt_secs);
        self.pos.mult_add(self.velocity, dt_secs);

        self.angular_velocity += self.angular_acceleration * dt_secs;
        self.rotation += self.angular_velocity * dt_secs;
    }

    /// Ask the level whether the wheel is on the ground and respond if so
    pub fn resolve_ground_contact<L: LevelQuery + ?Sized>(&mut self, level: &L) -> ContactState {
        if !level.intersects_ground(&self.bounding_circle()) {
            return ContactState::Airborne;
        }

        let nearest = level.nearest_solid(self.pos);
        debug_assert!(
            nearest.is_some(),
            "level reported ground under {} but has no nearest solid",
            self.pos
        );
        self.respond_to_nearest(nearest.as_ref());
        ContactState::Grounded
    }

    /// Ground response for whatever solid the level found; none is a no-op
    pub(crate) fn respond_to_nearest(&mut self, nearest: Option<&Rect>) {
        match nearest {
            Some(solid) => self.apply_ground_response(solid),
            None => log::warn!("No solid near wheel at {}; skipping ground response", self.pos),
        }
    }

    /// Rest the wheel on top of `solid`
    ///
    /// Positional snap with an inelastic vertical stop. Spin comes from linear
    /// speed alone (rolling without slipping); the contact tangent is ignored,
    /// so the spin is never negative.
    pub fn apply_ground_response(&mut self, solid: &Rect) {
        self.pos.y = solid.top() - self.radius;
        self.velocity.y = 0.0;
        if self.radius > 0.0 {
            self.angular_velocity = self.velocity.length() / self.radius;
        } else {
            log::warn!("Wheel radius {} is not positive; keeping spin", self.radius);
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.contact == ContactState::Grounded
    }

    /// End of the spoke drawn from the hub; rotation 0 points along +x
    pub fn spoke_end(&self) -> Vec2 {
        let mut spoke = Vec2::new(self.radius, 0.0);
        spoke.rotate_by(self.rotation);
        self.pos + spoke
    }

    pub fn draw<V: View + ?Sized>(&self, view: &mut V) {
        view.draw_circle(self.pos, self.radius, colors::WHEEL, Fill::Solid);
        view.draw_line(self.pos, self.spoke_end(), colors::WHEEL_SPOKE);

        let circle = self.bounding_circle();
        view.draw_circle(circle.center(), circle.radius(), colors::BOUNDING_CIRCLE, Fill::Outline);
    }
}
