//! Per-frame display list
//!
//! Everything a presentation backend needs to draw one frame, in screen
//! space (origin top-left, y down). Buffers are reused between frames.

use glam::DVec2;

use super::font::number_pixels;
use crate::sim::{GameState, Paint};

/// Size of the pointer marker (px)
pub const CROSSHAIR_SIZE: f64 = 10.0;

/// Score is printed in the lower left corner; this is the top-left cell of
/// its least significant digit
pub const SCORE_ANCHOR_X: f64 = 160.0;
pub const SCORE_ANCHOR_FROM_BOTTOM: f64 = 60.0;

/// One invader drawn as a filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hologram {
    pub slot: usize,
    /// Center, screen space
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
    pub paint: Paint,
}

/// Pointer marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crosshair {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Display list for one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub holograms: Vec<Hologram>,
    pub crosshair: Option<Crosshair>,
    pub score: u32,
    /// Lit glyph cells of the score (cell centers)
    pub score_cells: Vec<DVec2>,
}

impl Frame {
    /// Preallocate for a fleet of `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            holograms: Vec::with_capacity(capacity),
            crosshair: None,
            score: 0,
            // 4 digits, at most 12 lit cells each
            score_cells: Vec::with_capacity(48),
        }
    }

    /// Build a fresh frame from the current state
    pub fn capture(state: &GameState, cursor: DVec2) -> Self {
        let mut frame = Self::with_capacity(state.fleet.capacity());
        frame.update(state, cursor);
        frame
    }

    /// Refill this frame from the current state, reusing its buffers
    pub fn update(&mut self, state: &GameState, cursor: DVec2) {
        let height = state.settings.viewport_height;

        self.holograms.clear();
        self.holograms
            .extend(state.fleet.iter_active().map(|(slot, ship)| Hologram {
                slot,
                x: ship.position,
                y: height - ship.altitude,
                diameter: ship.radius() * 2.0,
                paint: ship.war_paint,
            }));

        self.crosshair = Some(Crosshair {
            x: cursor.x,
            y: cursor.y,
            size: CROSSHAIR_SIZE,
        });

        self.score = state.score;
        self.score_cells.clear();
        number_pixels(
            DVec2::new(SCORE_ANCHOR_X, height - SCORE_ANCHOR_FROM_BOTTOM),
            state.score,
            &mut self.score_cells,
        );
    }
}
