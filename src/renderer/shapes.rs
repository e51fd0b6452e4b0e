//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::frame::Frame;
use super::vertex::{Vertex, colors};

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32, out: &mut Vec<Vertex>) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Generate vertices for a square point of side `size` centered on `center`
pub fn point(center: Vec2, size: f32, color: [f32; 4], out: &mut Vec<Vertex>) {
    let h = size / 2.0;
    let (x0, y0, x1, y1) = (center.x - h, center.y - h, center.x + h, center.y + h);

    // Two triangles
    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x0, y1, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
}

/// Triangulate a whole frame: holograms, then crosshair, then score
pub fn frame_vertices(frame: &Frame, circle_segments: u32, out: &mut Vec<Vertex>) {
    out.clear();

    for h in &frame.holograms {
        circle(
            Vec2::new(h.x as f32, h.y as f32),
            (h.diameter / 2.0) as f32,
            h.paint.to_rgba(),
            circle_segments,
            out,
        );
    }

    if let Some(c) = frame.crosshair {
        point(Vec2::new(c.x as f32, c.y as f32), c.size as f32, colors::CROSSHAIR, out);
    }

    let cell = super::font::CELL_SIZE as f32;
    for p in &frame.score_cells {
        point(p.as_vec2(), cell, colors::SCORE, out);
    }
}
