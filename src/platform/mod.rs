//! Platform abstraction layer
//!
//! Everything the simulation receives from its environment:
//! - Time (monotonic millisecond clock)
//! - Input events (pointer, keys, window close)
//! - The periodic teleport trigger

pub mod input;
pub mod time;

pub use input::{InputEvent, screen_to_world};
pub use time::{Clock, ManualClock, MonotonicClock, SpawnTimer};
