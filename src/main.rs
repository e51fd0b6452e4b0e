//! Holo Invaders entry point
//!
//! Windowing and GPU presentation live outside this crate, so the native
//! binary runs a headless session: an autopilot moves the pointer onto the
//! lowest invader and clicks on a fixed cadence until the run time is up.
//!
//! Usage: `holo-invaders [seconds]`

use std::path::PathBuf;
use std::time::Duration;

use holo_invaders::platform::{Clock, InputEvent, MonotonicClock};
use holo_invaders::renderer::frame_vertices;
use holo_invaders::sim::Rnd;
use holo_invaders::{Game, Settings};

/// Default run length when no argument is given
const DEFAULT_RUN_SECONDS: u64 = 20;
/// Autopilot click cadence (ms)
const CLICK_INTERVAL_MS: u64 = 300;
/// Triangle fan resolution for holograms
const CIRCLE_SEGMENTS: u32 = 24;

fn main() {
    env_logger::init();

    let settings_path = std::env::var_os(Settings::ENV_VAR).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());

    let run_ms = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(DEFAULT_RUN_SECONDS)
        .saturating_mul(1000);

    let rnd = Rnd::from_clock_millis();
    let mut game = Game::new(settings, rnd, MonotonicClock::new());
    log::info!("Holo Invaders (headless) starting, running for {} ms", run_ms);

    let mut vertices = Vec::new();
    let mut next_click_ms = CLICK_INTERVAL_MS;
    let mut hits = 0u32;

    while !game.is_quit() {
        let frame = game.advance();
        frame_vertices(frame, CIRCLE_SEGMENTS, &mut vertices);

        // Track the invader closest to the ground (largest screen y)
        let target = frame
            .holograms
            .iter()
            .max_by(|a, b| a.y.total_cmp(&b.y))
            .map(|h| (h.x, h.y));

        if let Some((x, y)) = target {
            game.handle(InputEvent::PointerMoved { x, y });
        }

        let now = game.clock().now_ms();
        if now >= next_click_ms {
            next_click_ms = now + CLICK_INTERVAL_MS;
            if let Some(hit) = game.handle(InputEvent::PointerDown) {
                hits += 1;
                log::info!(
                    "Hit slot {} for {} points, score {}",
                    hit.slot,
                    hit.value,
                    game.state().score
                );
            }
            game.handle(InputEvent::PointerUp);
        }

        if now >= run_ms {
            game.handle(InputEvent::Close);
        }

        log::trace!("{} vertices this frame", vertices.len());
        std::thread::sleep(Duration::from_millis(1));
    }

    log::info!(
        "Holo Invaders finished: {} hits, score {}, {} invaders still attacking",
        hits,
        game.state().score,
        game.state().attack()
    );
}
