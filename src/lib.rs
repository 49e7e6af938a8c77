//! Broken Bonez - 2D side-scrolling motorcycle physics
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (wheels, bike, collisions, level queries)
//! - `renderer`: Narrow drawing seam consumed by the bike and its wheels
//! - `settings`: Data-driven physics tuning

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::PhysicsSettings;

/// Physics configuration constants
///
/// Screen space: y grows downward, so gravity is positive.
pub mod consts {
    /// Gravitational acceleration (px/s²)
    pub const GRAVITY: f32 = 9.81;
    /// Linear air drag coefficient (fraction of velocity removed per second)
    pub const AIR_DRAG: f32 = 0.1;

    /// Wheel defaults
    pub const WHEEL_RADIUS: f32 = 30.0;
    /// Drive-wheel x acceleration at full throttle (px/s²)
    pub const ENGINE_ACCELERATION: f32 = 50.0;

    /// Bike layout relative to its anchor
    pub const START_LIFT: f32 = 300.0;
    pub const LEFT_WHEEL_OFFSET: f32 = 25.0;
    pub const RIGHT_WHEEL_OFFSET: f32 = 200.0;

    /// Demo patrol: right-side world bound where the drive direction flips
    pub const PATROL_RIGHT_BOUND: f32 = 380.0;
    /// Demo patrol drive velocity (px per update)
    pub const DEMO_DRIVE_VELOCITY: (f32, f32) = (5.0, 0.0);
    /// Demo seeds applied at construction
    pub const DEMO_RIGHT_WHEEL_VELOCITY: (f32, f32) = (20.0, 0.0);
    pub const DEMO_LEFT_WHEEL_SPIN: f32 = 2.0;

    /// Simulation rates (updates per second)
    pub const TARGET_UPDATE_RATE: f32 = 60.0;
    pub const SLOW_MOTION_UPDATE_RATE: f32 = 200.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Convert a frame duration in milliseconds to seconds
#[inline]
pub fn ms_to_secs(dt_ms: f32) -> f32 {
    dt_ms / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_to_secs() {
        assert!((ms_to_secs(16.0) - 0.016).abs() < 1e-7);
    }
}
