use crate::coords::Vec2;
use crate::geometry::Sector;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Mesh;

/// Turns a [`DrawList`] into a single [`Mesh`] in paint order.
///
/// The mesh buffer is reused across frames.
#[derive(Debug, Default)]
pub struct Tessellator {
    mesh: Mesh,
}

impl Tessellator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last tessellated mesh.
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Tessellates every item of `list` back-to-front.
    ///
    /// Items with non-finite coordinates are skipped.
    pub fn tessellate(&mut self, list: &mut DrawList) -> &Mesh {
        self.mesh.clear();

        let mut skipped = 0usize;
        for item in list.iter_in_paint_order() {
            if !item.cmd.is_finite() {
                skipped += 1;
                continue;
            }
            self.push_cmd(&item.cmd);
        }

        if skipped > 0 {
            log::debug!("tessellate: skipped {skipped} non-finite draw item(s)");
        }

        &self.mesh
    }

    fn push_cmd(&mut self, cmd: &DrawCmd) {
        match cmd {
            DrawCmd::Rect(c) => {
                if !c.rect.is_empty() {
                    self.mesh.add_quad(c.rect.corners(), c.color);
                }
            }
            DrawCmd::Quad(c) => self.mesh.add_quad(c.points, c.color),
            DrawCmd::Triangle(c) => self.mesh.add_triangle(c.points, c.color),
            DrawCmd::Sector(c) => {
                if c.sector.radius > 0.0 {
                    self.mesh.add_fan(c.sector.center, c.sector.rim_points(), c.color);
                }
            }
            DrawCmd::Line(c) => self.push_thick_segment(c.start, c.end, c.thickness, c.color),
            DrawCmd::Arc(c) => self.push_arc(&c.sector, c.thickness, c.color),
        }
    }

    /// Segment widened symmetrically to `thickness`, without caps.
    /// Inputs are finite here; `push_cmd` only sees filtered items.
    fn push_thick_segment(&mut self, a: Vec2, b: Vec2, thickness: f32, color: Color) {
        let dir = b - a;
        let len = dir.length();
        if thickness <= 0.0 || len <= 0.0 {
            return;
        }

        let n = dir.perp() * (thickness * 0.5 / len);
        self.mesh.add_quad([a + n, b + n, b - n, a - n], color);
    }

    fn push_arc(&mut self, sector: &Sector, thickness: f32, color: Color) {
        if sector.radius <= 0.0 {
            return;
        }
        let mut rim = sector.rim_points();
        let Some(mut prev) = rim.next() else { return };
        for p in rim {
            self.push_thick_segment(prev, p, thickness, color);
            prev = p;
        }
    }
}
