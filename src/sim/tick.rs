//! Frame stepping
//!
//! `tick` advances the state by one step. `Stepper` turns variable frame
//! times into fixed steps.

use super::state::GameState;
use crate::consts::TARGET_UPDATE_RATE;
use crate::settings::PhysicsSettings;

/// Longest frame the stepper will catch up on (ms)
const MAX_FRAME_MS: f32 = 100.0;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// New throttle strength (0..=1), if it changed this frame
    pub throttle: Option<f32>,
    /// Slow motion on/off, if it changed this frame
    pub slow_motion: Option<bool>,
    /// Restart the run before stepping
    pub restart: bool,
}

/// Advance the game state by one step of `dt_ms`
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if input.restart {
        state.new_game();
    }
    if let Some(strength) = input.throttle {
        state.bike.set_acceleration(strength);
    }
    if let Some(enabled) = input.slow_motion {
        state.set_slow_motion(enabled);
    }

    state.bike.update(dt_ms, &state.level);

    state.time_ms += f64::from(dt_ms);
    state.ticks += 1;
}

/// Fixed-timestep accumulator
///
/// Wall-clock time is consumed in `wall_step_ms` chunks; each chunk advances
/// the simulation by `sim_step_ms`. The two are equal at normal speed. Raising
/// the update rate shrinks the simulated step, which is how slow motion works.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stepper {
    accumulator_ms: f32,
    wall_step_ms: f32,
    sim_step_ms: f32,
    max_substeps: u32,
}

impl Stepper {
    /// Non-positive rates fall back to `TARGET_UPDATE_RATE`
    pub fn new(target_rate: f32, update_rate: f32, max_substeps: u32) -> Self {
        Self {
            accumulator_ms: 0.0,
            wall_step_ms: PhysicsSettings::step_ms(usable_rate(target_rate)),
            sim_step_ms: PhysicsSettings::step_ms(usable_rate(update_rate)),
            max_substeps: max_substeps.max(1),
        }
    }

    /// A non-positive rate is ignored
    pub fn set_update_rate(&mut self, rate: f32) {
        if rate > 0.0 {
            self.sim_step_ms = PhysicsSettings::step_ms(rate);
        } else {
            log::warn!("Ignoring non-positive update rate {}", rate);
        }
    }

    /// Simulated milliseconds per step
    pub fn sim_step_ms(&self) -> f32 {
        self.sim_step_ms
    }

    pub fn accumulated_ms(&self) -> f32 {
        self.accumulator_ms
    }

    pub fn clear(&mut self) {
        self.accumulator_ms = 0.0;
    }

    /// Add a frame's wall time and return how many fixed steps to run
    pub fn consume(&mut self, frame_ms: f32) -> u32 {
        self.accumulator_ms += frame_ms.clamp(0.0, MAX_FRAME_MS);

        let mut substeps = 0;
        while self.accumulator_ms >= self.wall_step_ms && substeps < self.max_substeps {
            self.accumulator_ms -= self.wall_step_ms;
            substeps += 1;
        }
        substeps
    }
}

fn usable_rate(rate: f32) -> f32 {
    if rate > 0.0 {
        rate
    } else {
        log::warn!("Update rate {} is not positive; using {}", rate, TARGET_UPDATE_RATE);
        TARGET_UPDATE_RATE
    }
}

impl GameState {
    /// Run however many fixed steps a frame of `frame_ms` calls for
    ///
    /// Restart and slow motion take effect before any step of this frame.
    /// Throttle is applied on the first step only.
    pub fn update(&mut self, frame_ms: f32, input: &TickInput) -> u32 {
        if input.restart {
            self.new_game();
        }
        if let Some(enabled) = input.slow_motion {
            self.set_slow_motion(enabled);
        }

        let steps = self.stepper.consume(frame_ms);
        let dt = self.stepper.sim_step_ms();
        let first = TickInput {
            throttle: input.throttle,
            ..Default::default()
        };
        let idle = TickInput::default();
        for i in 0..steps {
            tick(self, if i == 0 { &first } else { &idle }, dt);
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::Level;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(
            Level::flat(600.0, 2000.0, 100.0),
            Vec2::new(0.0, 800.0),
            PhysicsSettings::default(),
        )
    }

    #[test]
    fn test_stepper_fixed_steps() {
        let mut stepper = Stepper::new(100.0, 100.0, 8);
        assert_eq!(stepper.consume(25.0), 2);
        assert!((stepper.accumulated_ms() - 5.0).abs() < 1e-4);
        assert_eq!(stepper.consume(5.0), 1);
    }

    #[test]
    fn test_stepper_caps_substeps() {
        let mut stepper = Stepper::new(100.0, 100.0, 3);
        // Frame is clamped to 100 ms, then capped at 3 steps
        assert_eq!(stepper.consume(5000.0), 3);
        assert!((stepper.accumulated_ms() - 70.0).abs() < 1e-3);
    }

    #[test]
    fn test_stepper_ignores_negative_frames() {
        let mut stepper = Stepper::new(60.0, 60.0, 8);
        assert_eq!(stepper.consume(-10.0), 0);
        assert_eq!(stepper.accumulated_ms(), 0.0);
    }

    #[test]
    fn test_tick_applies_input() {
        let mut state = state();
        let input = TickInput {
            throttle: Some(1.0),
            slow_motion: Some(true),
            ..Default::default()
        };
        tick(&mut state, &input, 16.0);
        assert_eq!(state.bike.throttle, 1.0);
        assert_eq!(state.bike.left_wheel.base_acceleration, Vec2::new(50.0, 0.0));
        assert!(state.slow_motion);
        assert_eq!(state.ticks, 1);
        assert!((state.time_ms - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_restart_resets_clock() {
        let mut state = state();
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), 16.0);
        }
        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input, 16.0);
        assert_eq!(state.ticks, 1);
        assert!((state.time_ms - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_slow_motion_advances_less_sim_time() {
        let mut normal = state();
        let mut slow = state();
        slow.set_slow_motion(true);

        for _ in 0..60 {
            normal.update(1000.0 / 60.0, &TickInput::default());
            slow.update(1000.0 / 60.0, &TickInput::default());
        }
        assert_eq!(normal.ticks, slow.ticks);
        assert!(slow.time_ms < normal.time_ms * 0.5);
    }

    #[test]
    fn test_slow_motion_applies_to_the_same_frame() {
        let mut state = state();
        let input = TickInput {
            slow_motion: Some(true),
            ..Default::default()
        };
        let steps = state.update(1000.0 / 60.0, &input);
        assert_eq!(steps, 1);
        assert_eq!(state.ticks, 1);
        assert!((state.time_ms - 5.0).abs() < 1e-4);

        let input = TickInput {
            slow_motion: Some(false),
            ..Default::default()
        };
        state.update(1000.0 / 60.0, &input);
        assert!((state.time_ms - (5.0 + 1000.0 / 60.0)).abs() < 1e-3);
    }

    #[test]
    fn test_update_applies_throttle_and_restart() {
        let mut state = state();
        for _ in 0..10 {
            state.update(1000.0 / 60.0, &TickInput::default());
        }
        let input = TickInput {
            throttle: Some(1.0),
            restart: true,
            ..Default::default()
        };
        state.update(1000.0 / 60.0, &input);
        assert_eq!(state.ticks, 1);
        assert_eq!(state.bike.throttle, 1.0);
    }

    #[test]
    fn test_stepper_falls_back_on_zero_rate() {
        let mut stepper = Stepper::new(0.0, -1.0, 8);
        assert!((stepper.sim_step_ms() - 1000.0 / 60.0).abs() < 1e-4);
        assert_eq!(stepper.consume(20.0), 1);

        stepper.set_update_rate(0.0);
        assert!((stepper.sim_step_ms() - 1000.0 / 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = state();
        let mut state2 = state();

        let inputs = [
            TickInput::default(),
            TickInput {
                throttle: Some(0.8),
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                throttle: Some(0.0),
                ..Default::default()
            },
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input, 16.0);
                tick(&mut state2, input, 16.0);
            }
        }

        assert_eq!(state1.snapshot(), state2.snapshot());
    }
}
