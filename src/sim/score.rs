//! Pointer hit testing and scoring
//!
//! The pointer is treated as a tiny hull and run through the same distance
//! check as ship-to-ship collisions. The first live slot that matches wins,
//! even if a later slot is closer to the pointer.

use glam::DVec2;

use super::collision::circles_overlap;
use super::state::GameState;
use crate::settings::Settings;

/// A successful click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Slot that was freed
    pub slot: usize,
    /// Points awarded before wraparound
    pub value: u32,
}

/// Points for destroying a ship of the given size
///
/// Quadratic in the distance from the largest size: the smallest ship is
/// worth about 100 with default tuning, the largest is worth 1. Intermediate
/// results are truncated to integers; both the integer division and the
/// truncation of `max_hull_size - hull_size` are part of the scoring table.
pub fn value_of(hull_size: f64, settings: &Settings) -> u32 {
    let span = settings.max_hull_size - settings.min_hull_size;
    if span <= 0.0 {
        return 1;
    }
    let coeff = settings.max_hull_size / span;
    let range = span as i64;
    if range == 0 {
        return 1;
    }
    let x = (settings.max_hull_size - hull_size) as i64;
    let x = ((x * x / range) as f64 * coeff) as i64;
    if x < 1 {
        return 1;
    }
    u32::try_from(x).unwrap_or(u32::MAX)
}

/// Handle a click at `point` (world space: x from left, y up from ground)
///
/// Kills at most one ship and adds its value to the score, modulo the
/// configured wraparound.
pub fn hit_test(state: &mut GameState, point: DVec2) -> Option<Hit> {
    let pointer_hull = state.settings.pointer_hull_size;
    let (slot, hull_size) = state
        .fleet
        .iter_active()
        .find(|(_, ship)| circles_overlap(point, pointer_hull, ship.center(), ship.hull_size))
        .map(|(i, ship)| (i, ship.hull_size))?;

    state.fleet.retire(slot);
    let value = value_of(hull_size, &state.settings);
    let modulus = u64::from(state.settings.score_modulus.max(1));
    state.score = ((u64::from(state.score) + u64::from(value)) % modulus) as u32;

    log::debug!(
        "Hit slot {} for {} points, score {}, attack {}",
        slot,
        value,
        state.score,
        state.fleet.attack()
    );
    Some(Hit { slot, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::spawn;
    use crate::sim::state::Invader;
    use crate::sim::tick::step;
    use proptest::prelude::*;

    #[test]
    fn test_value_extremes() {
        let settings = Settings::default();
        assert_eq!(value_of(100.0, &settings), 1);
        assert_eq!(value_of(10.0, &settings), 100);
    }

    #[test]
    fn test_value_truncates_intermediates() {
        let settings = Settings::default();
        // X = 50 -> 2500 / 90 = 27 (integer) -> 27 * 1.111.. = 30.0 -> 30
        assert_eq!(value_of(50.0, &settings), 30);
        // X = 0.5 truncates to 0 before squaring
        assert_eq!(value_of(99.5, &settings), 1);
        // X = 29.9 truncates to 29 -> 841 / 90 = 9 -> 10.0 -> 10
        assert_eq!(value_of(70.1, &settings), 10);
    }

    #[test]
    fn test_value_is_non_increasing_in_size() {
        let settings = Settings::default();
        let mut last = u32::MAX;
        for size in 10..=100 {
            let v = value_of(size as f64, &settings);
            assert!(v >= 1);
            assert!(v <= last);
            last = v;
        }
    }

    #[test]
    fn test_value_degenerate_range() {
        let settings = Settings {
            min_hull_size: 25.0,
            max_hull_size: 25.0,
            ..Settings::default()
        };
        assert_eq!(value_of(25.0, &settings), 1);
    }

    #[test]
    fn test_hit_removes_and_scores() {
        let mut state = GameState::with_seed(Settings::default(), 1);
        state.fleet.place(3, Invader::new(200.0, 300.0, 10.0));

        let hit = hit_test(&mut state, DVec2::new(203.0, 301.0));

        assert_eq!(hit, Some(Hit { slot: 3, value: 100 }));
        assert_eq!(state.score, 100);
        assert_eq!(state.attack(), 0);
        assert_eq!(state.fleet.count_active(), 0);
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut state = GameState::with_seed(Settings::default(), 1);
        state.fleet.place(0, Invader::new(200.0, 300.0, 10.0));
        state.score = 12;

        // Distance 6.5 equals (3 + 10) / 2: strict comparison misses
        assert_eq!(hit_test(&mut state, DVec2::new(206.5, 300.0)), None);
        assert_eq!(state.score, 12);
        assert_eq!(state.attack(), 1);
    }

    #[test]
    fn test_hit_prefers_lower_index() {
        let mut state = GameState::with_seed(Settings::default(), 1);
        // Slot 1 is centered on the pointer, slot 0 only just covers it
        state.fleet.place(0, Invader::new(100.0, 100.0, 60.0));
        state.fleet.place(1, Invader::new(125.0, 100.0, 20.0));

        let hit = hit_test(&mut state, DVec2::new(125.0, 100.0));

        assert_eq!(hit.map(|h| h.slot), Some(0));
        assert_eq!(state.fleet.get(1).map(|s| s.is_alive()), Some(true));
        assert_eq!(state.attack(), 1);
    }

    #[test]
    fn test_score_wraps() {
        let mut state = GameState::with_seed(Settings::default(), 1);
        state.score = 9_900;
        state.fleet.place(0, Invader::new(50.0, 50.0, 10.0));

        hit_test(&mut state, DVec2::new(50.0, 50.0));
        assert_eq!(state.score, 0);

        state.score = 9_950;
        state.fleet.place(0, Invader::new(50.0, 50.0, 10.0));
        hit_test(&mut state, DVec2::new(50.0, 50.0));
        assert_eq!(state.score, 50);
    }

    proptest! {
        #[test]
        fn prop_attack_matches_slots(
            seed in any::<i32>(),
            ops in prop::collection::vec((0u8..3, 0u64..400, 0.0f64..800.0, 0.0f64..600.0), 1..200),
        ) {
            let mut state = GameState::with_seed(Settings::default(), seed);
            for (op, elapsed, x, y) in ops {
                match op {
                    0 => { spawn(&mut state); }
                    1 => step(&mut state, elapsed),
                    _ => { hit_test(&mut state, DVec2::new(x, y)); }
                }
                prop_assert_eq!(state.attack(), state.fleet.count_active());
                prop_assert!(state.attack() <= state.fleet.capacity());
                prop_assert!(state.score < state.settings.score_modulus);
            }
        }
    }
}
