use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Stroke, ZIndex};

/// Filled axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }
}

impl DrawList {
    /// Records a filled rectangle.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, color)));
    }

    /// Records the border of `rect` as four line segments.
    pub fn push_rect_outline(&mut self, z: ZIndex, rect: Rect, stroke: Stroke) {
        let c = rect.corners();
        for i in 0..4 {
            self.push_line(z, c[i], c[(i + 1) % 4], stroke);
        }
    }
}
