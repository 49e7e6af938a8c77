//! Broken Bonez headless demo
//!
//! Runs the demo-mode bike over a generated level and logs where it ends up.
//!
//! Usage: `broken-bonez [settings.json] [seed]`

use glam::Vec2;

use broken_bonez::PhysicsSettings;
use broken_bonez::renderer::CommandList;
use broken_bonez::sim::{GameState, Level, TickInput};

/// Demo viewport
const VIEW_WIDTH: f32 = 1280.0;
const VIEW_HEIGHT: f32 = 720.0;
/// Frames to simulate (about ten seconds at 60 fps)
const DEMO_FRAMES: u32 = 600;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Broken Bonez (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => PhysicsSettings::load(path),
        None => PhysicsSettings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);

    let ground_top = VIEW_HEIGHT - 120.0;
    let level = Level::generate(seed, ground_top, 80.0, 32, 24.0);
    let mut state = GameState::new(level, Vec2::new(0.0, VIEW_HEIGHT), settings);
    state.update_size(VIEW_WIDTH, VIEW_HEIGHT);

    let frame_ms = 1000.0 / 60.0;
    let mut view = CommandList::new();
    for frame in 0..DEMO_FRAMES {
        // Open the throttle halfway through, then slow down for the last second
        let input = TickInput {
            throttle: (frame == DEMO_FRAMES / 2).then_some(1.0),
            slow_motion: (frame == DEMO_FRAMES - 60).then_some(true),
            restart: false,
        };
        state.update(frame_ms, &input);

        if frame % 60 == 0 {
            view.clear();
            state.bike.draw(&mut view);
            for line in view.texts() {
                log::debug!("{}", line);
            }
        }
    }

    let snap = state.snapshot();
    log::info!(
        "After {} ticks ({:.0} ms simulated): left wheel {} ({:?}), right wheel {} ({:?})",
        snap.tick,
        snap.time_ms,
        snap.left_wheel.pos,
        snap.left_wheel.contact,
        snap.right_wheel.pos,
        snap.right_wheel.contact,
    );

    match serde_json::to_string_pretty(&snap) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}
