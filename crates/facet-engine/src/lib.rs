//! Facet engine crate.
//!
//! Procedural 2D shape geometry (sloped rounded rectangles, eyes, stars),
//! a z-ordered draw stream, and CPU tessellation into GPU-ready meshes.

pub mod coords;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod tessellate;
