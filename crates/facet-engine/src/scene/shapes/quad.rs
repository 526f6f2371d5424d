use crate::coords::Vec2;
use crate::paint::Color;

/// Filled convex quadrilateral, vertices in perimeter order.
///
/// Triangulated as `(0, 1, 2)` + `(0, 2, 3)`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadCmd {
    pub points: [Vec2; 4],
    pub color: Color,
}

impl QuadCmd {
    #[inline]
    pub fn new(points: [Vec2; 4], color: Color) -> Self {
        Self { points, color }
    }

    /// Signed shoelace area. Positive for clockwise order in +Y-down space.
    pub fn signed_area(&self) -> f32 {
        let p = &self.points;
        let mut twice = 0.0;
        for i in 0..4 {
            twice += p[i].cross(p[(i + 1) % 4]);
        }
        twice * 0.5
    }
}

/// Filled triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub color: Color,
}

impl TriangleCmd {
    #[inline]
    pub fn new(points: [Vec2; 3], color: Color) -> Self {
        Self { points, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_area_of_unit_square() {
        let q = QuadCmd::new(
            [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)],
            Color::BLACK,
        );
        assert_eq!(q.signed_area(), 1.0);
    }

    #[test]
    fn collapsed_quad_has_zero_area() {
        let a = Vec2::new(3.0, 3.0);
        let b = Vec2::new(9.0, 3.0);
        let q = QuadCmd::new([a, b, b, a], Color::BLACK);
        assert_eq!(q.signed_area(), 0.0);
    }
}
