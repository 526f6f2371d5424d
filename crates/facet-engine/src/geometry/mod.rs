//! Procedural shape geometry.
//!
//! Every generator here is a pure function of its inputs: it takes a bounding
//! box (or center) plus a parameter struct and returns an ordered primitive
//! sequence. Nothing is cached between calls, and no input combination panics;
//! out-of-range values are clamped and zero-area pieces are dropped.
//!
//! - [`sloped`]: rounded rectangle with independent top/bottom radii and a
//!   slanted top-right corner
//! - [`eye`]: robot-face eye built from four corner circles and slope wedges
//! - [`star`]: five-pointed star polygon

mod arc;
mod params;

pub mod eye;
pub mod sloped;
pub mod star;

pub use arc::{Corner, Sector};
pub use eye::{EyeConfig, EyeShape};
pub use params::{ShapeParameters, MAX_SEGMENTS, MIN_SEGMENTS};
pub use sloped::{CornerCenters, SlopedRect};
pub use star::{StarConfig, StarShape};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::shapes::QuadCmd;
use crate::scene::DrawCmd;

/// Quads whose absolute area is below this are considered collapsed.
pub(crate) const AREA_EPSILON: f32 = 1e-4;

/// Appends a filled quad unless it has collapsed to a line or point.
pub(crate) fn push_solid_quad(out: &mut Vec<DrawCmd>, points: [Vec2; 4], color: Color) {
    let quad = QuadCmd::new(points, color);
    if quad.signed_area().abs() > AREA_EPSILON {
        out.push(DrawCmd::Quad(quad));
    }
}
