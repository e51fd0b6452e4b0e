//! Simple custom pseudo-random number generator
//!
//! Four-word additive feedback recurrence. Fast and reproducible, not
//! cryptographically secure. Only the spawner advances it, so physics and
//! hit testing stay deterministic relative to spawn order.

use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::consts::RNG_WARMUP;

/// Gameplay RNG state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rnd {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Rnd {
    /// Seed the generator and warm it up to decorrelate from the seed
    pub fn seed(x: i32) -> Self {
        let word = x.wrapping_mul(10_000_000).wrapping_add(10) as u32;
        let mut rnd = Self {
            a: word,
            b: word,
            c: word,
            d: word,
        };
        for _ in 0..RNG_WARMUP {
            rnd.next_u32();
        }
        rnd
    }

    /// Seed from the wall clock (millisecond reading), as done once at startup
    pub fn from_clock_millis() -> Self {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        // Only the low bits matter; the seed derivation wraps anyway
        Self::seed(millis as i32)
    }

    /// Next raw 32-bit value
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.a = self.a.wrapping_add(1);
        self.b = self.b.wrapping_add(self.a);
        self.c = self.c.wrapping_add(self.b);
        self.d = self.d.wrapping_add(self.c);
        self.a
            .wrapping_add(self.b)
            .wrapping_add(self.c)
            .wrapping_add(self.d)
    }

    /// Uniform double between zero and `max`
    #[inline]
    pub fn next_f64(&mut self, max: f64) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) / max)
    }
}

impl RngCore for Rnd {
    fn next_u32(&mut self) -> u32 {
        Rnd::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(Rnd::next_u32(self));
        let hi = u64::from(Rnd::next_u32(self));
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = Rnd::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Rnd {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seed(i32::from_le_bytes(seed))
    }
}
