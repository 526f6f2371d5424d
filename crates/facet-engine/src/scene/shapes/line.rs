use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Stroke, ZIndex};

/// Straight stroked segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    pub thickness: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, stroke: Stroke) -> Self {
        Self { start, end, thickness: stroke.thickness, color: stroke.color }
    }
}

impl DrawList {
    /// Records a stroked line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, start: Vec2, end: Vec2, stroke: Stroke) {
        self.push(z, DrawCmd::Line(LineCmd::new(start, end, stroke)));
    }
}
