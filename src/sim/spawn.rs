//! Teleport new invaders in at the top of the screen

use super::collision::detect_collision;
use super::state::{GameState, Paint};

/// What a single teleport attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// A new invader is descending from this slot
    Spawned(usize),
    /// Radar detected an inevitable collision; the slot stays empty
    Rejected(usize),
    /// No free slot
    Full,
}

/// Try to teleport one invader into the first free slot
///
/// On collision the attempt is abandoned without trying other slots; the
/// next timer tick will try again. Colors are only drawn for ships that
/// actually appear.
pub fn spawn(state: &mut GameState) -> SpawnOutcome {
    let Some(index) = state.fleet.first_empty() else {
        return SpawnOutcome::Full;
    };

    let settings = &state.settings;
    let hull_size =
        state.rnd.next_f64(settings.max_hull_size - settings.min_hull_size) + settings.min_hull_size;
    // Fit inside the screen
    let position = state.rnd.next_f64(settings.viewport_width - hull_size);
    // Teleported up in the sky to land on our heads
    let altitude = settings.viewport_height - hull_size / 2.0;

    if let Some(ship) = state.fleet.get_mut(index) {
        ship.hull_size = hull_size;
        ship.position = position;
        ship.altitude = altitude;
    }

    if detect_collision(&state.fleet, index) {
        state.fleet.clear(index);
        log::debug!(
            "Teleport into slot {} abandoned (hull {:.1} at x={:.1})",
            index,
            hull_size,
            position
        );
        return SpawnOutcome::Rejected(index);
    }

    // Random color, but not too dark: the background is black
    let war_paint = Paint::new(
        state.rnd.next_f64(0.5) + 0.5,
        state.rnd.next_f64(0.5) + 0.5,
        state.rnd.next_f64(0.5) + 0.5,
        state.rnd.next_f64(0.5) + 0.5, // slightly transparent
    );
    if let Some(ship) = state.fleet.get_mut(index) {
        ship.war_paint = war_paint;
    }
    state.fleet.activate(index);

    log::debug!(
        "Invader teleported into slot {} (hull {:.1} at x={:.1}), attack {}",
        index,
        hull_size,
        position,
        state.fleet.attack()
    );
    SpawnOutcome::Spawned(index)
}
