use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Extents are not validated. Shape generators treat negative sizes as
/// degenerate input and clamp whatever they derive from them.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` centered on `center`.
    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size * 0.5, size)
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    /// Half of the shorter side. Negative when either extent is negative.
    #[inline]
    pub fn half_min_side(self) -> f32 {
        self.size.x.min(self.size.y) * 0.5
    }

    /// Corners in clockwise order (+Y down): top-left, top-right, bottom-right, bottom-left.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        [
            self.origin,
            Vec2::new(self.right(), self.origin.y),
            Vec2::new(self.right(), self.bottom()),
            Vec2::new(self.origin.x, self.bottom()),
        ]
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        // Written as a negation so NaN extents count as empty.
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── edges ─────────────────────────────────────────────────────────────

    #[test]
    fn right_and_bottom() {
        let rect = r(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
    }

    #[test]
    fn half_min_side_uses_shorter_extent() {
        assert_eq!(r(0.0, 0.0, 200.0, 100.0).half_min_side(), 50.0);
        assert_eq!(r(0.0, 0.0, 30.0, 100.0).half_min_side(), 15.0);
    }

    #[test]
    fn from_center_round_trips_center() {
        let rect = Rect::from_center(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(rect, r(40.0, 45.0, 20.0, 10.0));
        assert_eq!(rect.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn corners_are_clockwise_from_top_left() {
        let c = r(0.0, 0.0, 4.0, 2.0).corners();
        assert_eq!(c[0], Vec2::new(0.0, 0.0));
        assert_eq!(c[1], Vec2::new(4.0, 0.0));
        assert_eq!(c[2], Vec2::new(4.0, 2.0));
        assert_eq!(c[3], Vec2::new(0.0, 2.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_negative_or_nan_size() {
        assert!(r(0.0, 0.0, -1.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, f32::NAN, 5.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
