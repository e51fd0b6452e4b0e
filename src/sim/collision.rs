//! Collision detection between invaders
//!
//! Extremely simple distance check: two hulls collide when their centers are
//! closer than the average of their diameters. Used at teleport time so new
//! ships never appear on top of each other (they may still overlap later).

use glam::DVec2;

use super::state::Fleet;
use crate::distance;

/// Check whether two circles (given by center and diameter) overlap
///
/// Strict comparison: touching exactly at the threshold is not a collision.
#[inline]
pub fn circles_overlap(a: DVec2, a_hull: f64, b: DVec2, b_hull: f64) -> bool {
    distance(a, b) < (a_hull + b_hull) / 2.0
}

/// Check the invader in slot `the_one` against every other live invader
///
/// The slot itself may be empty (a teleport candidate); other empty slots are
/// skipped. Out-of-range indices never collide.
pub fn detect_collision(fleet: &Fleet, the_one: usize) -> bool {
    let Some(a) = fleet.get(the_one) else {
        return false;
    };
    fleet
        .iter_active()
        .filter(|(i, _)| *i != the_one)
        .any(|(_, b)| circles_overlap(a.center(), a.hull_size, b.center(), b.hull_size))
}
