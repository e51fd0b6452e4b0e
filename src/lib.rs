//! Holo Invaders - falling hologram invaders arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (slots, spawning, physics, collisions, scoring)
//! - `renderer`: Per-frame display list and vertex generation
//! - `platform`: Clock, input events and the periodic spawn trigger
//! - `settings`: Data-driven game balance
//! - `game`: Cooperative event-loop session tying the above together

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

use glam::DVec2;

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Viewport size, fixed for the lifetime of the process
    pub const VIEWPORT_WIDTH: f64 = 800.0;
    pub const VIEWPORT_HEIGHT: f64 = 600.0;

    /// How many invaders may be on screen at once
    pub const MAXIMUM_ATTACK: usize = 10;

    /// Invader diameter range
    pub const MIN_HULL_SIZE: f64 = 10.0;
    pub const MAX_HULL_SIZE: f64 = 100.0;

    /// Fall speed range (pixels per millisecond)
    pub const MIN_SPEED: f64 = 0.05;
    pub const MAX_SPEED: f64 = 0.2;

    /// Global speed multiplier, AKA difficulty level
    pub const ATTACK_SPEED: f64 = 1.5;

    /// Diameter assumed for the mouse pointer when hit testing
    pub const POINTER_HULL_SIZE: f64 = 3.0;

    /// Cadence of the teleport timer (ms)
    pub const SPAWN_INTERVAL_MS: u64 = 500;

    /// Score wraps around at this value (9999 should be enough for anyone)
    pub const SCORE_MODULUS: u32 = 10_000;

    /// PRNG warm-up draws after seeding
    pub const RNG_WARMUP: u32 = 10_000;
}

/// Euclidean distance between two centers
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    (a - b).length()
}
