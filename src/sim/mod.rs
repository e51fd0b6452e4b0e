//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, advanced by the spawner alone
//! - Stable iteration order (by slot index)
//! - No allocation after the fleet is built
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, detect_collision};
pub use rng::Rnd;
pub use score::{Hit, hit_test, value_of};
pub use spawn::{SpawnOutcome, spawn};
pub use state::{Fleet, GameState, Invader, Paint, Status};
pub use tick::{fall_speed, step};
