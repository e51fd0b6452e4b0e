//! Time sources and the teleport timer

use std::cell::Cell;
use std::time::Instant;

/// Monotonic millisecond clock
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock backed monotonic time since construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-driven clock for tests and replays
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Low-frequency periodic trigger for teleports
///
/// Like a window-system timer message, expirations that pile up during a
/// stall coalesce into a single firing.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ms: u64,
    accumulated_ms: u64,
}

impl SpawnTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Feed elapsed time; returns true when the timer fired
    pub fn advance(&mut self, elapsed_ms: u64) -> bool {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        if self.accumulated_ms < self.interval_ms {
            return false;
        }
        self.accumulated_ms %= self.interval_ms;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(5);
        assert_eq!(clock.now_ms(), 5);
        clock.advance(20);
        assert_eq!(clock.now_ms(), 25);
    }

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn test_spawn_timer_fires_on_interval() {
        let mut timer = SpawnTimer::new(500);
        assert!(!timer.advance(200));
        assert!(!timer.advance(299));
        assert!(timer.advance(1));
        assert!(!timer.advance(499));
        assert!(timer.advance(1));
    }

    #[test]
    fn test_spawn_timer_coalesces_stall() {
        let mut timer = SpawnTimer::new(500);
        assert!(timer.advance(5_250));
        // Remainder carries over, the missed firings do not
        assert!(!timer.advance(249));
        assert!(timer.advance(1));
    }

    #[test]
    fn test_spawn_timer_zero_interval_clamped() {
        let mut timer = SpawnTimer::new(0);
        assert_eq!(timer.interval_ms(), 1);
        assert!(timer.advance(1));
    }
}
