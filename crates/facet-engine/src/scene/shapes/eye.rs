use crate::geometry::EyeShape;
use crate::paint::Color;
use crate::scene::{DrawList, Stroke, ZIndex};

impl DrawList {
    #[inline]
    pub fn push_eye_fill(&mut self, z: ZIndex, eye: &EyeShape, color: Color) {
        self.extend(z, eye.fill(color));
    }

    #[inline]
    pub fn push_eye_outline(&mut self, z: ZIndex, eye: &EyeShape, stroke: Stroke) {
        self.extend(z, eye.wireframe(stroke));
    }
}
