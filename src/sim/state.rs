//! Game state and core simulation types
//!
//! The fleet is a fixed, preallocated slot array: no allocation or
//! deallocation happens during the game loop, retired slots are reused in place.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::rng::Rnd;
use crate::settings::Settings;

/// Slot status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    /// Free slot, ready for a teleport
    #[default]
    Empty,
    /// Teleported in, not yet stepped
    JustSpawned,
    /// Descending
    Active,
}

impl Status {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Status::Empty
    }
}

/// Four-channel color, each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Paint {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Paint {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// GPU-friendly RGBA
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.red as f32,
            self.green as f32,
            self.blue as f32,
            self.alpha as f32,
        ]
    }
}

/// A falling invader
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Invader {
    pub status: Status,
    /// Animation frame reference (cosmetic)
    pub frame_id: u32,
    /// Displacement from the left edge of the screen to the center
    pub position: f64,
    /// Distance from the ground to the center
    pub altitude: f64,
    /// Diameter
    pub hull_size: f64,
    pub war_paint: Paint,
}

impl Invader {
    /// Build a descending invader (mostly for scenario setup)
    pub fn new(position: f64, altitude: f64, hull_size: f64) -> Self {
        Self {
            status: Status::JustSpawned,
            frame_id: 0,
            position,
            altitude,
            hull_size,
            war_paint: Paint::default(),
        }
    }

    /// Center in world space (x from left, y up from the ground)
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.position, self.altitude)
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.hull_size / 2.0
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.status.is_empty()
    }
}

/// Fixed-capacity store of invader slots
///
/// `attack` always equals the number of non-empty slots. Every status
/// change goes through [`Fleet::place`], [`Fleet::activate`] or
/// [`Fleet::retire`] so the counter cannot drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fleet {
    slots: Box<[Invader]>,
    attack: usize,
}

impl Fleet {
    /// Preallocate `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Invader::default(); capacity].into_boxed_slice(),
            attack: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Current attack power (invaders on screen)
    #[inline]
    pub fn attack(&self) -> usize {
        self.attack
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.attack >= self.capacity()
    }

    /// Recount non-empty slots (consistency check for `attack`)
    pub fn count_active(&self) -> usize {
        self.slots.iter().filter(|s| s.is_alive()).count()
    }

    pub fn get(&self, index: usize) -> Option<&Invader> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Invader> {
        self.slots.get_mut(index)
    }

    pub fn slots(&self) -> &[Invader] {
        &self.slots
    }

    /// Non-empty slots in index order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Invader)> {
        self.slots.iter().enumerate().filter(|(_, s)| s.is_alive())
    }

    /// Lowest-index free slot
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.is_alive())
    }

    /// Put a prepared invader into a free slot. Returns false if the slot is
    /// out of range or occupied.
    pub fn place(&mut self, index: usize, invader: Invader) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if !slot.is_alive() => {
                *slot = Invader {
                    status: Status::JustSpawned,
                    ..invader
                };
                self.attack += 1;
                true
            }
            _ => false,
        }
    }

    /// Mark a free slot whose fields were filled in place as just spawned
    pub fn activate(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if !slot.is_alive() => {
                slot.status = Status::JustSpawned;
                self.attack += 1;
                true
            }
            _ => false,
        }
    }

    /// Return a slot to the pool. Returns the retired invader, if any.
    pub fn retire(&mut self, index: usize) -> Option<Invader> {
        let slot = self.slots.get_mut(index)?;
        if !slot.is_alive() {
            return None;
        }
        let retired = std::mem::take(slot);
        self.attack -= 1;
        Some(retired)
    }

    /// Reset a free slot's scratch fields (abandoned teleport)
    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            if !slot.is_alive() {
                *slot = Invader::default();
            }
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Tuning this run was built with
    pub settings: Settings,
    /// All invader slots
    pub fleet: Fleet,
    /// Spawner-only RNG
    pub rnd: Rnd,
    /// User's score, always below `settings.score_modulus`
    pub score: u32,
    /// Total simulated time (ms)
    pub elapsed_ms: u64,
}

impl GameState {
    /// Create a new game state with the given RNG
    pub fn new(settings: Settings, rnd: Rnd) -> Self {
        let fleet = Fleet::new(settings.maximum_attack);
        Self {
            settings,
            fleet,
            rnd,
            score: 0,
            elapsed_ms: 0,
        }
    }

    /// Create a new game state seeded deterministically
    pub fn with_seed(settings: Settings, seed: i32) -> Self {
        Self::new(settings, Rnd::seed(seed))
    }

    /// Current attack power
    #[inline]
    pub fn attack(&self) -> usize {
        self.fleet.attack()
    }
}
