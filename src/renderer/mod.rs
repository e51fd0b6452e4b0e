//! Frame output
//!
//! The simulation is presented as a display list ([`Frame`]) that any
//! backend can draw; [`shapes`] turns it into plain triangle vertices.

pub mod font;
pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Crosshair, Frame, Hologram};
pub use shapes::frame_vertices;
pub use vertex::Vertex;
