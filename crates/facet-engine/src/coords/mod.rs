//! Coordinate and geometry types shared by the shape generators and the scene.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are in degrees and follow the same +Y-down convention: 0° points
//! right, 90° points down, 180° left, 270° up.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
