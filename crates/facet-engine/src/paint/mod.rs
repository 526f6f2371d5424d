//! Paint types.
//!
//! Colors are passed through untouched from the caller to the draw stream and
//! on into mesh vertices.

mod color;

pub use color::Color;
