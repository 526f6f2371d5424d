use crate::coords::Rect;

/// Fewest pieces that still read as a quarter arc.
pub const MIN_SEGMENTS: u32 = 3;
/// Upper bound on per-arc tessellation.
pub const MAX_SEGMENTS: u32 = 360;

/// Shape parameters for a [`SlopedRect`](super::SlopedRect).
///
/// Radii are requests: the generator clamps each against half the shorter
/// side of the bounding box. `slope_factor` is a fraction of the height; the
/// top-right corner moves left by `slope_factor * height`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeParameters {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub slope_factor: f32,
    pub segments: u32,
}

impl ShapeParameters {
    #[inline]
    pub const fn new(radius_top: f32, radius_bottom: f32, slope_factor: f32, segments: u32) -> Self {
        Self { radius_top, radius_bottom, slope_factor, segments }
    }

    /// Uniformly rounded rectangle, no slope.
    ///
    /// `roundness` in `[0, 1]` scales the largest radius `rect` can host.
    pub fn rounded(rect: Rect, roundness: f32, segments: u32) -> Self {
        let radius = roundness.clamp(0.0, 1.0) * rect.half_min_side().max(0.0);
        Self::new(radius, radius, 0.0, segments)
    }

    /// Segment count clamped to `[MIN_SEGMENTS, MAX_SEGMENTS]`.
    #[inline]
    pub fn effective_segments(&self) -> u32 {
        self.segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS)
    }
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self::new(30.0, 40.0, 0.2, 16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_clamp_to_supported_range() {
        assert_eq!(ShapeParameters::new(0.0, 0.0, 0.0, 0).effective_segments(), 3);
        assert_eq!(ShapeParameters::new(0.0, 0.0, 0.0, 2).effective_segments(), 3);
        assert_eq!(ShapeParameters::new(0.0, 0.0, 0.0, 16).effective_segments(), 16);
        assert_eq!(ShapeParameters::new(0.0, 0.0, 0.0, 10_000).effective_segments(), 360);
    }

    #[test]
    fn rounded_scales_half_shorter_side() {
        let rect = Rect::new(0.0, 0.0, 150.0, 100.0);
        let p = ShapeParameters::rounded(rect, 0.4, 16);
        assert_eq!(p.radius_top, 20.0);
        assert_eq!(p.radius_bottom, 20.0);
        assert_eq!(p.slope_factor, 0.0);
    }

    #[test]
    fn rounded_clamps_roundness() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(ShapeParameters::rounded(rect, 3.0, 16).radius_top, 50.0);
        assert_eq!(ShapeParameters::rounded(rect, -1.0, 16).radius_top, 0.0);
    }
}
