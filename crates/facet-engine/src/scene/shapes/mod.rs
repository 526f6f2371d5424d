pub(crate) mod line;
pub(crate) mod quad;
pub(crate) mod rect;
pub(crate) mod sector;

mod eye;
mod sloped_rect;
mod star;

pub use line::LineCmd;
pub use quad::{QuadCmd, TriangleCmd};
pub use rect::RectCmd;
pub use sector::{ArcCmd, SectorCmd};

use crate::paint::Color;

/// Line style for outline primitives.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub thickness: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(thickness: f32, color: Color) -> Self {
        Self { thickness, color }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(1.0, Color::BLACK)
    }
}
