//! Robot-face eye.
//!
//! An eye is a quadrilateral through four corner-circle centers, padded out by
//! the corner radii, with optional wedge-shaped bumps on the top and bottom
//! edges. Slopes tilt the top/bottom edges by moving their ends in opposite
//! vertical directions.

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::shapes::{ArcCmd, LineCmd, SectorCmd, TriangleCmd};
use crate::scene::{DrawCmd, Stroke};

use super::{push_solid_quad, Sector, AREA_EPSILON};

/// Rim pieces used for each full corner circle.
pub const EYE_CIRCLE_SEGMENTS: u32 = 36;

/// Default horizontal distance from the face center to each eye center.
pub const EYE_SPACING: f32 = 75.0;

/// Live-editable eye parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EyeConfig {
    pub offset_x: f32,
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
    /// Tilt of the top edge as a fraction of height.
    pub slope_top: f32,
    /// Tilt of the bottom edge as a fraction of height.
    pub slope_bottom: f32,
    pub radius_top: f32,
    pub radius_bottom: f32,
}

impl EyeConfig {
    pub const NEUTRAL: EyeConfig = EyeConfig {
        offset_x: 0.0,
        offset_y: 0.0,
        width: 50.0,
        height: 40.0,
        slope_top: 0.0,
        slope_bottom: 0.0,
        radius_top: 10.0,
        radius_bottom: 10.0,
    };
}

impl Default for EyeConfig {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Resolved eye geometry for one eye.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EyeShape {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
    pub radius_top: f32,
    pub radius_bottom: f32,
    /// Peak of the wedge over the top edge, present when `slope_top != 0`.
    pub top_apex: Option<Vec2>,
    /// Peak of the wedge under the bottom edge, present when `slope_bottom != 0`.
    pub bottom_apex: Option<Vec2>,
}

impl EyeShape {
    /// Lays out an eye centered at `center` (before `cfg`'s offsets).
    ///
    /// When the radii do not fit the slope-adjusted height they are scaled
    /// down together, keeping their ratio.
    pub fn new(center: Vec2, cfg: &EyeConfig) -> Self {
        let dy_top = cfg.height * cfg.slope_top / 2.0;
        let dy_bottom = cfg.height * cfg.slope_bottom / 2.0;
        let total_height = cfg.height + dy_top - dy_bottom;

        let mut rt = cfg.radius_top.max(0.0);
        let mut rb = cfg.radius_bottom.max(0.0);
        let budget = (total_height - 1.0).max(0.0);
        if rt + rb > budget {
            let scale = budget / (rt + rb);
            rt *= scale;
            rb *= scale;
        }

        let cx = center.x + cfg.offset_x;
        let cy = center.y + cfg.offset_y;
        let hw = cfg.width / 2.0;
        let hh = cfg.height / 2.0;

        let top_left = Vec2::new(cx - hw + rt, cy - hh + rt - dy_top);
        let top_right = Vec2::new(cx + hw - rt, cy - hh + rt + dy_top);
        let bottom_left = Vec2::new(cx - hw + rb, cy + hh - rb - dy_bottom);
        let bottom_right = Vec2::new(cx + hw - rb, cy + hh - rb + dy_bottom);

        let top_apex = (cfg.slope_top != 0.0).then(|| {
            Vec2::new((top_left.x + top_right.x) / 2.0, top_left.y - cfg.slope_top * cfg.height)
        });
        let bottom_apex = (cfg.slope_bottom != 0.0).then(|| {
            Vec2::new(
                (bottom_left.x + bottom_right.x) / 2.0,
                bottom_left.y + cfg.slope_bottom * cfg.height,
            )
        });

        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
            radius_top: rt,
            radius_bottom: rb,
            top_apex,
            bottom_apex,
        }
    }

    /// Left and right eyes for a face centered at `face_center`.
    pub fn pair(face_center: Vec2, spacing: f32, cfg: &EyeConfig) -> [EyeShape; 2] {
        [
            EyeShape::new(face_center - Vec2::new(spacing, 0.0), cfg),
            EyeShape::new(face_center + Vec2::new(spacing, 0.0), cfg),
        ]
    }

    /// `(center, radius)` of each corner circle, clockwise from top-left.
    pub fn corner_circles(&self) -> [(Vec2, f32); 4] {
        [
            (self.top_left, self.radius_top),
            (self.top_right, self.radius_top),
            (self.bottom_right, self.radius_bottom),
            (self.bottom_left, self.radius_bottom),
        ]
    }

    fn wedges(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        let top = self.top_apex.map(|apex| [self.top_left, self.top_right, apex]);
        let bottom = self.bottom_apex.map(|apex| [self.bottom_left, self.bottom_right, apex]);
        top.into_iter().chain(bottom)
    }

    /// Fill primitives: center body, edge bands padded by the radii, corner
    /// discs, then slope wedges.
    pub fn fill(&self, color: Color) -> Vec<DrawCmd> {
        let mut out = Vec::with_capacity(11);

        push_solid_quad(&mut out, [self.top_left, self.top_right, self.bottom_right, self.bottom_left], color);

        let corners = self.corner_circles();
        for i in 0..4 {
            let (a, ra) = corners[i];
            let (b, rb) = corners[(i + 1) % 4];
            let edge = b - a;
            let len = edge.length();
            if len.is_nan() || len <= AREA_EPSILON {
                continue;
            }
            let outward = Vec2::new(edge.y, -edge.x) / len;
            push_solid_quad(&mut out, [a, b, b + outward * rb, a + outward * ra], color);
        }

        for (center, radius) in corners {
            if radius > 0.0 {
                let disc = Sector::full_circle(center, radius, EYE_CIRCLE_SEGMENTS);
                out.push(DrawCmd::Sector(SectorCmd::new(disc, color)));
            }
        }

        out.extend(self.wedges().map(|t| DrawCmd::Triangle(TriangleCmd::new(t, color))));
        out
    }

    /// Construction wireframe: the four center-to-center edges, the corner
    /// circles, and the slope wedge outlines.
    pub fn wireframe(&self, stroke: Stroke) -> Vec<DrawCmd> {
        let mut out = Vec::with_capacity(14);

        let edges = [
            (self.top_left, self.top_right),
            (self.bottom_left, self.bottom_right),
            (self.top_left, self.bottom_left),
            (self.top_right, self.bottom_right),
        ];
        out.extend(edges.into_iter().map(|(a, b)| DrawCmd::Line(LineCmd::new(a, b, stroke))));

        for (center, radius) in self.corner_circles() {
            if radius > 0.0 {
                let circle = Sector::full_circle(center, radius, EYE_CIRCLE_SEGMENTS);
                out.push(DrawCmd::Arc(ArcCmd::new(circle, stroke)));
            }
        }

        for [a, b, apex] in self.wedges() {
            for (s, e) in [(a, b), (b, apex), (apex, a)] {
                out.push(DrawCmd::Line(LineCmd::new(s, e, stroke)));
            }
        }
        out
    }
}
