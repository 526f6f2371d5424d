//! Key bindings and slider ranges for live shape editing.

use facet_engine::geometry::{EyeConfig, ShapeParameters, StarConfig, MAX_SEGMENTS, MIN_SEGMENTS};

/// Radius change per key press, in logical pixels.
pub const RADIUS_STEP: f32 = 1.0;
/// Slope change per key press.
pub const SLOPE_STEP: f32 = 0.005;

/// Keys the studio reacts to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Q, W, E, R, T, Y, F, G,
}

impl Key {
    /// Maps a script character (either case) to a bound key.
    pub fn from_char(c: char) -> Option<Key> {
        Some(match c.to_ascii_uppercase() {
            'Q' => Key::Q,
            'W' => Key::W,
            'E' => Key::E,
            'R' => Key::R,
            'T' => Key::T,
            'Y' => Key::Y,
            'F' => Key::F,
            'G' => Key::G,
            _ => return None,
        })
    }
}

/// Applies one held key to the sloped-rect parameters.
///
/// Q/W: bottom radius -/+, E/R: top radius -/+, T/Y: slope -/+,
/// F/G: segments -/+. Radii never go below zero and segments stay in
/// `[MIN_SEGMENTS, MAX_SEGMENTS]`. Returns whether anything changed.
pub fn apply_key(params: &mut ShapeParameters, key: Key) -> bool {
    let before = *params;
    match key {
        Key::Q => params.radius_bottom = (params.radius_bottom - RADIUS_STEP).max(0.0),
        Key::W => params.radius_bottom += RADIUS_STEP,
        Key::E => params.radius_top = (params.radius_top - RADIUS_STEP).max(0.0),
        Key::R => params.radius_top += RADIUS_STEP,
        Key::T => params.slope_factor -= SLOPE_STEP,
        Key::Y => params.slope_factor += SLOPE_STEP,
        Key::F => params.segments = params.segments.saturating_sub(1).max(MIN_SEGMENTS),
        Key::G => params.segments = params.segments.saturating_add(1).min(MAX_SEGMENTS),
    }
    *params != before
}

/// Closed value range of a slider.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Slider {
    pub min: f32,
    pub max: f32,
}

impl Slider {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamps `v` into the range. NaN lands on `min`.
    #[inline]
    pub fn clamp(&self, v: f32) -> f32 {
        if v.is_nan() { self.min } else { v.max(self.min).min(self.max) }
    }
}

// ── eye ───────────────────────────────────────────────────────────────────

pub const EYE_OFFSET: Slider = Slider::new(-50.0, 50.0);
pub const EYE_EXTENT: Slider = Slider::new(10.0, 100.0);
pub const EYE_SLOPE: Slider = Slider::new(-1.0, 1.0);
pub const EYE_RADIUS: Slider = Slider::new(0.0, 50.0);

/// Sets an eye field through its slider. `None` for an unknown field.
pub fn set_eye_param(cfg: &mut EyeConfig, field: &str, value: f32) -> Option<f32> {
    let (slot, slider) = match field {
        "offset_x" => (&mut cfg.offset_x, EYE_OFFSET),
        "offset_y" => (&mut cfg.offset_y, EYE_OFFSET),
        "width" => (&mut cfg.width, EYE_EXTENT),
        "height" => (&mut cfg.height, EYE_EXTENT),
        "slope_top" => (&mut cfg.slope_top, EYE_SLOPE),
        "slope_bottom" => (&mut cfg.slope_bottom, EYE_SLOPE),
        "radius_top" => (&mut cfg.radius_top, EYE_RADIUS),
        "radius_bottom" => (&mut cfg.radius_bottom, EYE_RADIUS),
        _ => return None,
    };
    *slot = slider.clamp(value);
    Some(*slot)
}

// ── star ──────────────────────────────────────────────────────────────────

pub const STAR_OUTER: Slider = Slider::new(50.0, 250.0);
pub const STAR_ROTATION: Slider = Slider::new(0.0, 360.0);

/// Inner radius range, which follows the current outer radius.
pub fn star_inner(outer: f32) -> Slider {
    Slider::new(10.0, outer - 10.0)
}

/// Sets a star field through its slider. `None` for an unknown field.
///
/// Changing the outer radius re-clamps the inner one.
pub fn set_star_param(cfg: &mut StarConfig, field: &str, value: f32) -> Option<f32> {
    match field {
        "outer" => {
            cfg.outer_radius = STAR_OUTER.clamp(value);
            cfg.inner_radius = star_inner(cfg.outer_radius).clamp(cfg.inner_radius);
            Some(cfg.outer_radius)
        }
        "inner" => {
            cfg.inner_radius = star_inner(cfg.outer_radius).clamp(value);
            Some(cfg.inner_radius)
        }
        "rotation" => {
            cfg.rotation_deg = STAR_ROTATION.clamp(value);
            Some(cfg.rotation_deg)
        }
        _ => None,
    }
}

// ── rounded ───────────────────────────────────────────────────────────────

pub const ROUNDNESS: Slider = Slider::new(0.0, 1.0);

#[cfg(test)]
mod tests {
    use super::*;

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn from_char_is_case_insensitive() {
        assert_eq!(Key::from_char('q'), Some(Key::Q));
        assert_eq!(Key::from_char('G'), Some(Key::G));
        assert_eq!(Key::from_char('z'), None);
    }

    #[test]
    fn radius_keys_step_and_floor_at_zero() {
        let mut p = ShapeParameters::new(1.0, 0.5, 0.0, 16);
        assert!(apply_key(&mut p, Key::E));
        assert_eq!(p.radius_top, 0.0);
        assert!(!apply_key(&mut p, Key::E));

        assert!(apply_key(&mut p, Key::Q));
        assert_eq!(p.radius_bottom, 0.0);

        apply_key(&mut p, Key::W);
        apply_key(&mut p, Key::R);
        assert_eq!((p.radius_top, p.radius_bottom), (1.0, 1.0));
    }

    #[test]
    fn slope_keys_step_by_small_amount() {
        let mut p = ShapeParameters::default();
        apply_key(&mut p, Key::Y);
        assert!((p.slope_factor - 0.205).abs() < 1e-6);
        apply_key(&mut p, Key::T);
        apply_key(&mut p, Key::T);
        assert!((p.slope_factor - 0.195).abs() < 1e-6);
    }

    #[test]
    fn segment_keys_stay_in_range() {
        let mut p = ShapeParameters::new(10.0, 10.0, 0.0, MIN_SEGMENTS);
        assert!(!apply_key(&mut p, Key::F));
        assert_eq!(p.segments, MIN_SEGMENTS);

        p.segments = MAX_SEGMENTS;
        assert!(!apply_key(&mut p, Key::G));
        assert_eq!(p.segments, MAX_SEGMENTS);
    }

    // ── sliders ───────────────────────────────────────────────────────────

    #[test]
    fn slider_clamps_into_range() {
        let s = Slider::new(10.0, 100.0);
        assert_eq!(s.clamp(5.0), 10.0);
        assert_eq!(s.clamp(500.0), 100.0);
        assert_eq!(s.clamp(f32::NAN), 10.0);
        assert_eq!(s.clamp(55.0), 55.0);
    }

    #[test]
    fn eye_fields_use_their_ranges() {
        let mut cfg = EyeConfig::NEUTRAL;
        assert_eq!(set_eye_param(&mut cfg, "width", 500.0), Some(100.0));
        assert_eq!(set_eye_param(&mut cfg, "slope_top", -3.0), Some(-1.0));
        assert_eq!(set_eye_param(&mut cfg, "offset_y", -20.0), Some(-20.0));
        assert_eq!(set_eye_param(&mut cfg, "pupil", 1.0), None);
        assert_eq!(cfg.width, 100.0);
    }

    #[test]
    fn star_inner_follows_outer() {
        let mut cfg = StarConfig::default();
        assert_eq!(set_star_param(&mut cfg, "inner", 95.0), Some(90.0));
        set_star_param(&mut cfg, "outer", 60.0);
        assert_eq!(cfg.inner_radius, 50.0);
        assert_eq!(set_star_param(&mut cfg, "rotation", 400.0), Some(360.0));
        assert_eq!(set_star_param(&mut cfg, "spikes", 6.0), None);
    }
}
