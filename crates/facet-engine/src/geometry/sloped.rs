//! Rounded rectangle with a slanted top-right corner.
//!
//! The outline is four quarter arcs joined by straight tangent segments. The
//! top pair of corners shares `radius_top`, the bottom pair `radius_bottom`,
//! and the top-right corner is pulled left by `slope_factor * height`.
//!
//! Because the region is not a plain rounded box once slope and unequal radii
//! are in play, the interior is filled as a union of pieces:
//!
//! ```text
//!   ╭──────top──────╮        1. central band (full width)
//!   │L│   central   │R│      2. bottom band
//!   │ │    band     │ │      3. top quad, or full-width fallback rect
//!   ╰──────bottom───╯        4. left strip   5. right quad   6. corner sectors
//! ```
//!
//! Sectors go last so they cover seams left by the straight pieces.

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::shapes::{ArcCmd, LineCmd, RectCmd, SectorCmd};
use crate::scene::{DrawCmd, Stroke};

use super::{push_solid_quad, Corner, Sector, ShapeParameters};

/// Centers the four quarter arcs sweep around.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CornerCenters {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl CornerCenters {
    #[inline]
    pub fn get(&self, corner: Corner) -> Vec2 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }
}

/// Resolved layout of a sloped rounded rectangle.
///
/// Holds the clamped radii and every derived coordinate; [`fill`](Self::fill)
/// and [`outline`](Self::outline) both read from it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SlopedRect {
    pub rect: Rect,
    pub radius_top: f32,
    pub radius_bottom: f32,
    /// Horizontal pull of the top-right corner, `slope_factor * height`.
    pub slope_shift: f32,
    /// Y where the straight vertical edges begin below the top arcs.
    pub y_top_straight: f32,
    /// Y where the straight vertical edges end above the bottom arcs.
    pub y_bottom_straight: f32,
    /// X of the unrounded top-right corner after slope.
    pub x_top_right_sloped: f32,
    pub centers: CornerCenters,
    pub segments: u32,
}

impl SlopedRect {
    pub fn new(rect: Rect, params: &ShapeParameters) -> Self {
        let max_radius = rect.half_min_side();

        // `min` then `max` rather than `clamp`: max_radius may be negative or NaN.
        let radius_top = params.radius_top.max(0.0).min(max_radius).max(0.0);
        let radius_bottom = params.radius_bottom.max(0.0).min(max_radius).max(0.0);

        let slope_shift = params.slope_factor * rect.height();

        let y_top_straight = rect.y() + radius_top;
        let y_bottom_straight = rect.bottom() - radius_bottom;
        let x_top_right_sloped = rect.right() - slope_shift;

        let centers = CornerCenters {
            top_left: Vec2::new(rect.x() + radius_top, y_top_straight),
            top_right: Vec2::new(x_top_right_sloped - radius_top, y_top_straight),
            bottom_right: Vec2::new(rect.right() - radius_bottom, y_bottom_straight),
            bottom_left: Vec2::new(rect.x() + radius_bottom, y_bottom_straight),
        };

        Self {
            rect,
            radius_top,
            radius_bottom,
            slope_shift,
            y_top_straight,
            y_bottom_straight,
            x_top_right_sloped,
            centers,
            segments: params.effective_segments(),
        }
    }

    #[inline]
    pub fn radius(&self, corner: Corner) -> f32 {
        if corner.is_top() { self.radius_top } else { self.radius_bottom }
    }

    /// Horizontal room between the two top arc centers.
    ///
    /// Zero or negative means the top arcs meet or cross, and the top quad
    /// would invert.
    #[inline]
    pub fn top_gap(&self) -> f32 {
        self.centers.top_right.x - self.centers.top_left.x
    }

    /// Quarter sectors for corners with a positive radius, clockwise from top-left.
    pub fn corner_sectors(&self) -> impl Iterator<Item = Sector> + '_ {
        Corner::ALL.into_iter().filter_map(move |corner| {
            let radius = self.radius(corner);
            (radius > 0.0)
                .then(|| Sector::quarter(corner, self.centers.get(corner), radius, self.segments))
        })
    }

    /// Ordered fill primitives covering the interior.
    ///
    /// Zero-area pieces are dropped; the relative order of the rest is fixed.
    pub fn fill(&self, color: Color) -> Vec<DrawCmd> {
        let r = self.rect;
        let c = &self.centers;
        let mut out = FillSink { cmds: Vec::with_capacity(10), color };

        // central band
        out.rect(Rect::new(
            r.x(),
            self.y_top_straight,
            r.width(),
            self.y_bottom_straight - self.y_top_straight,
        ));

        // bottom band
        out.rect(Rect::new(
            c.bottom_left.x,
            self.y_bottom_straight,
            c.bottom_right.x - c.bottom_left.x,
            self.radius_bottom,
        ));

        if self.top_gap() > 0.0 {
            out.quad([
                Vec2::new(c.top_left.x, r.y()),
                Vec2::new(c.top_right.x, r.y()),
                Vec2::new(c.top_right.x, self.y_top_straight),
                Vec2::new(c.top_left.x, self.y_top_straight),
            ]);
        } else {
            out.rect(Rect::new(r.x(), r.y(), r.width(), self.radius_top));
        }

        // left strip
        out.rect(Rect::new(r.x(), c.top_left.y, self.radius_top, c.bottom_left.y - c.top_left.y));

        // right fill, slanted by the slope. A negative slope pushes the
        // top-right center past the bottom-right one; the top edge then starts
        // at the bottom-right center so the quad meets the central band.
        out.quad([
            Vec2::new(c.top_right.x.min(c.bottom_right.x), self.y_top_straight),
            Vec2::new(self.x_top_right_sloped, self.y_top_straight),
            Vec2::new(r.right(), self.y_bottom_straight),
            Vec2::new(c.bottom_right.x, self.y_bottom_straight),
        ]);

        let mut cmds = out.cmds;
        cmds.extend(self.corner_sectors().map(|s| DrawCmd::Sector(SectorCmd::new(s, color))));
        cmds
    }

    /// Ordered stroke primitives: left, top, right and bottom edges, then
    /// the corner arcs.
    pub fn outline(&self, stroke: Stroke) -> Vec<DrawCmd> {
        let c = &self.centers;
        let rt = self.radius_top;
        let rb = self.radius_bottom;

        let edges = [
            (Vec2::new(c.bottom_left.x - rb, c.bottom_left.y), Vec2::new(c.top_left.x - rt, c.top_left.y)),
            (Vec2::new(c.top_left.x, c.top_left.y - rt), Vec2::new(c.top_right.x, c.top_right.y - rt)),
            (Vec2::new(c.top_right.x + rt, c.top_right.y), Vec2::new(c.bottom_right.x + rb, c.bottom_right.y)),
            (Vec2::new(c.bottom_left.x, c.bottom_left.y + rb), Vec2::new(c.bottom_right.x, c.bottom_right.y + rb)),
        ];

        let mut out = Vec::with_capacity(8);
        out.extend(edges.into_iter().map(|(a, b)| DrawCmd::Line(LineCmd::new(a, b, stroke))));
        out.extend(self.corner_sectors().map(|s| DrawCmd::Arc(ArcCmd::new(s, stroke))));
        out
    }
}

/// Fill primitives for `rect` shaped by `params`. See [`SlopedRect::fill`].
pub fn fill(rect: Rect, params: &ShapeParameters, color: Color) -> Vec<DrawCmd> {
    SlopedRect::new(rect, params).fill(color)
}

/// Outline primitives for `rect` shaped by `params`. See [`SlopedRect::outline`].
pub fn outline(rect: Rect, params: &ShapeParameters, stroke: Stroke) -> Vec<DrawCmd> {
    SlopedRect::new(rect, params).outline(stroke)
}

/// Collects fill pieces in emission order, dropping collapsed ones.
struct FillSink {
    cmds: Vec<DrawCmd>,
    color: Color,
}

impl FillSink {
    fn rect(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.cmds.push(DrawCmd::Rect(RectCmd::new(rect, self.color)));
        }
    }

    fn quad(&mut self, points: [Vec2; 4]) {
        push_solid_quad(&mut self.cmds, points, self.color);
    }
}
