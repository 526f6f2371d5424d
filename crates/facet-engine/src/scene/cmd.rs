use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::quad::{QuadCmd, TriangleCmd};
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::sector::{ArcCmd, SectorCmd};

/// Renderer-agnostic drawing primitive.
///
/// Fill primitives: `Rect`, `Quad`, `Triangle`, `Sector`.
/// Stroke primitives: `Line`, `Arc`.
///
/// Extending the scene:
/// - add a payload module under `scene::shapes::*`
/// - add a new variant here
/// - teach `tessellate::Tessellator` to triangulate it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Quad(QuadCmd),
    Triangle(TriangleCmd),
    Sector(SectorCmd),
    Line(LineCmd),
    Arc(ArcCmd),
}

impl DrawCmd {
    #[inline]
    pub fn is_fill(&self) -> bool {
        matches!(self, DrawCmd::Rect(_) | DrawCmd::Quad(_) | DrawCmd::Triangle(_) | DrawCmd::Sector(_))
    }

    #[inline]
    pub fn is_stroke(&self) -> bool {
        !self.is_fill()
    }

    /// True when every coordinate and scalar in the payload is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            DrawCmd::Rect(c) => c.rect.is_finite(),
            DrawCmd::Quad(c) => c.points.iter().all(|p| p.is_finite()),
            DrawCmd::Triangle(c) => c.points.iter().all(|p| p.is_finite()),
            DrawCmd::Sector(c) => c.sector.is_finite(),
            DrawCmd::Line(c) => c.start.is_finite() && c.end.is_finite() && c.thickness.is_finite(),
            DrawCmd::Arc(c) => c.sector.is_finite() && c.thickness.is_finite(),
        }
    }
}
