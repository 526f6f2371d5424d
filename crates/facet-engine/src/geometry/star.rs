//! Five-pointed star polygon.

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::shapes::{LineCmd, TriangleCmd};
use crate::scene::{DrawCmd, Stroke};

pub const STAR_POINTS: usize = 5;
const STAR_VERTICES: usize = STAR_POINTS * 2;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StarConfig {
    pub center: Vec2,
    pub outer_radius: f32,
    pub inner_radius: f32,
    /// Clockwise rotation; 0 puts the first point straight up.
    pub rotation_deg: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            center: Vec2::new(400.0, 300.0),
            outer_radius: 100.0,
            inner_radius: 40.0,
            rotation_deg: 0.0,
        }
    }
}

/// Star outline vertices, alternating tip / notch, clockwise from the first tip.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StarShape {
    pub center: Vec2,
    pub vertices: [Vec2; STAR_VERTICES],
}

impl StarShape {
    pub fn new(cfg: &StarConfig) -> Self {
        let outer = cfg.outer_radius.max(0.0);
        let inner = cfg.inner_radius.max(0.0).min(outer);
        let step = 360.0 / STAR_VERTICES as f32;

        let vertices = std::array::from_fn(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            Vec2::on_circle(cfg.center, radius, cfg.rotation_deg - 90.0 + step * i as f32)
        });

        Self { center: cfg.center, vertices }
    }

    /// One triangle per outline edge, fanned from the center.
    pub fn fill(&self, color: Color) -> Vec<DrawCmd> {
        let v = &self.vertices;
        (0..STAR_VERTICES)
            .map(|i| {
                let tri = [self.center, v[i], v[(i + 1) % STAR_VERTICES]];
                DrawCmd::Triangle(TriangleCmd::new(tri, color))
            })
            .collect()
    }

    pub fn outline(&self, stroke: Stroke) -> Vec<DrawCmd> {
        let v = &self.vertices;
        (0..STAR_VERTICES)
            .map(|i| DrawCmd::Line(LineCmd::new(v[i], v[(i + 1) % STAR_VERTICES], stroke)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn first_tip_points_up() {
        let s = StarShape::new(&StarConfig::default());
        assert!(close(s.vertices[0], Vec2::new(400.0, 200.0)));
    }

    #[test]
    fn radii_alternate() {
        let cfg = StarConfig::default();
        let s = StarShape::new(&cfg);
        for (i, v) in s.vertices.iter().enumerate() {
            let d = (*v - cfg.center).length();
            let want = if i % 2 == 0 { 100.0 } else { 40.0 };
            assert!((d - want).abs() < 1e-3, "vertex {i}: {d}");
        }
    }

    #[test]
    fn rotation_moves_first_tip() {
        let cfg = StarConfig { rotation_deg: 90.0, ..StarConfig::default() };
        let s = StarShape::new(&cfg);
        assert!(close(s.vertices[0], Vec2::new(500.0, 300.0)));
    }

    #[test]
    fn inner_radius_never_exceeds_outer() {
        let cfg = StarConfig { inner_radius: 500.0, ..StarConfig::default() };
        let s = StarShape::new(&cfg);
        let d = (s.vertices[1] - cfg.center).length();
        assert!((d - 100.0).abs() < 1e-3);
    }

    #[test]
    fn fill_and_outline_cover_every_edge() {
        let s = StarShape::new(&StarConfig::default());
        let fill = s.fill(Color::GOLD);
        let outline = s.outline(Stroke::new(3.0, Color::BLACK));
        assert_eq!(fill.len(), 10);
        assert_eq!(outline.len(), 10);
        let DrawCmd::Line(last) = &outline[9] else { panic!("expected line") };
        assert_eq!(last.end, s.vertices[0]);
    }
}
