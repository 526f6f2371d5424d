use crate::geometry::StarShape;
use crate::paint::Color;
use crate::scene::{DrawList, Stroke, ZIndex};

impl DrawList {
    #[inline]
    pub fn push_star_fill(&mut self, z: ZIndex, star: &StarShape, color: Color) {
        self.extend(z, star.fill(color));
    }

    #[inline]
    pub fn push_star_outline(&mut self, z: ZIndex, star: &StarShape, stroke: Stroke) {
        self.extend(z, star.outline(stroke));
    }
}
