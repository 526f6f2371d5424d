use crate::coords::Rect;
use crate::geometry::{ShapeParameters, SlopedRect};
use crate::paint::Color;
use crate::scene::{DrawList, Stroke, ZIndex};

impl DrawList {
    /// Records the fill pieces of a sloped rounded rectangle.
    pub fn push_sloped_rect_fill(&mut self, z: ZIndex, rect: Rect, params: &ShapeParameters, color: Color) {
        self.extend(z, SlopedRect::new(rect, params).fill(color));
    }

    /// Records the outline of a sloped rounded rectangle.
    pub fn push_sloped_rect_outline(&mut self, z: ZIndex, rect: Rect, params: &ShapeParameters, stroke: Stroke) {
        self.extend(z, SlopedRect::new(rect, params).outline(stroke));
    }
}
