use crate::coords::Vec2;

/// One of the four corners of a rectangular outline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Clockwise from the top-left (+Y down).
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Start/end angles in degrees of the quarter arc rounding this corner.
    #[inline]
    pub const fn quarter_angles(self) -> (f32, f32) {
        match self {
            Corner::TopLeft => (180.0, 270.0),
            Corner::TopRight => (270.0, 360.0),
            Corner::BottomRight => (0.0, 90.0),
            Corner::BottomLeft => (90.0, 180.0),
        }
    }

    #[inline]
    pub const fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }
}

/// Circular sector: a pie slice swept from `start_deg` to `end_deg` around `center`.
///
/// Filled, it is a triangle fan from the center; stroked, only the rim is drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sector {
    pub center: Vec2,
    pub radius: f32,
    pub start_deg: f32,
    pub end_deg: f32,
    /// Number of straight pieces approximating the rim.
    pub segments: u32,
}

impl Sector {
    #[inline]
    pub const fn new(center: Vec2, radius: f32, start_deg: f32, end_deg: f32, segments: u32) -> Self {
        Self { center, radius, start_deg, end_deg, segments }
    }

    /// Quarter sector rounding `corner`.
    #[inline]
    pub fn quarter(corner: Corner, center: Vec2, radius: f32, segments: u32) -> Self {
        let (start, end) = corner.quarter_angles();
        Self::new(center, radius, start, end, segments)
    }

    #[inline]
    pub fn full_circle(center: Vec2, radius: f32, segments: u32) -> Self {
        Self::new(center, radius, 0.0, 360.0, segments)
    }

    /// Rim points from `start_deg` to `end_deg` inclusive: `segments + 1` points.
    ///
    /// A zero segment count is treated as one.
    pub fn rim_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        let n = self.segments.max(1);
        let step = (self.end_deg - self.start_deg) / n as f32;
        (0..=n).map(move |i| {
            // Pin the last point to `end_deg` exactly instead of accumulating steps.
            let deg = if i == n { self.end_deg } else { self.start_deg + step * i as f32 };
            Vec2::on_circle(self.center, self.radius, deg)
        })
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.start_deg.is_finite()
            && self.end_deg.is_finite()
    }
}
