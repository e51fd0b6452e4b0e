//! Variable timestep physics step
//!
//! Invaders fall at a constant, size-dependent speed (no gravity here).
//! The step receives the real elapsed time since its previous call, so it
//! must stay correct for zero and for very large gaps (e.g. after a stall).

use super::state::{GameState, Status};
use crate::settings::Settings;

/// Fall speed for a hull size: smaller ships fall faster
///
/// Linear in hull size. With a degenerate size range (min == max) every
/// ship falls at `min_speed`.
pub fn fall_speed(hull_size: f64, settings: &Settings) -> f64 {
    let range = settings.max_hull_size - settings.min_hull_size;
    if range <= 0.0 {
        return settings.min_speed;
    }
    let q = (settings.max_speed - settings.min_speed) / range;
    let speed = settings.max_hull_size - (hull_size - settings.min_hull_size);
    settings.min_speed + speed * q
}

/// Advance every live invader by `elapsed_ms`
///
/// Ships whose altitude drops below zero reached the ground: the slot is
/// freed with no score penalty. A zero-length step changes nothing.
pub fn step(state: &mut GameState, elapsed_ms: u64) {
    if elapsed_ms == 0 {
        return;
    }
    state.elapsed_ms = state.elapsed_ms.saturating_add(elapsed_ms);

    let settings = &state.settings;
    let fleet = &mut state.fleet;
    let dt = elapsed_ms as f64;

    for index in 0..fleet.capacity() {
        let landed = match fleet.get_mut(index) {
            Some(ship) if ship.is_alive() => {
                let speed = fall_speed(ship.hull_size, settings);
                ship.altitude -= speed * dt * settings.attack_speed;
                ship.status = Status::Active;
                ship.frame_id = ship.frame_id.wrapping_add(1);
                ship.altitude < 0.0
            }
            _ => false,
        };

        if landed {
            fleet.retire(index);
            log::debug!("Invader in slot {} reached the ground, attack {}", index, fleet.attack());
        }
    }
}
