//! Input events delivered to the game session

use glam::DVec2;

/// One input or window event, already translated from the windowing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved; viewport pixels, origin top-left
    PointerMoved { x: f64, y: f64 },
    /// Primary button pressed at the last known pointer position
    PointerDown,
    PointerUp,
    /// Any key quits
    KeyDown,
    /// Periodic teleport timer fired; only sessions built with
    /// `Game::with_external_timer` act on it
    SpawnTimer,
    /// Window closed
    Close,
}

/// Map a top-left-origin pointer position into world space (y up from the ground)
#[inline]
pub fn screen_to_world(x: f64, y: f64, viewport_height: f64) -> DVec2 {
    DVec2::new(x, viewport_height - y)
}
