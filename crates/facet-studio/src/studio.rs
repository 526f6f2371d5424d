//! Headless shape editor: holds the live parameters, applies held keys and
//! slider assignments, and records + tessellates one frame at a time.

use facet_engine::coords::{Rect, Vec2};
use facet_engine::geometry::{
    EyeConfig, EyeShape, ShapeParameters, StarConfig, StarShape, eye::EYE_SPACING,
};
use facet_engine::paint::Color;
use facet_engine::scene::{DrawList, Stroke, ZIndex};
use facet_engine::tessellate::Tessellator;

use crate::config::{ConfigError, ShapeKind, StudioConfig};
use crate::controls::{self, Key, ROUNDNESS};

/// Bounding box of the sloped / rounded rectangle.
pub const SHAPE_RECT: Rect = Rect::new(150.0, 100.0, 500.0, 250.0);
/// Center of the eye pair.
pub const FACE_CENTER: Vec2 = Vec2::new(400.0, 300.0);

/// Colors used per shape.
#[derive(Debug, Copy, Clone)]
pub struct Palette {
    pub rect_fill: Color,
    pub eye_fill: Color,
    pub star_fill: Color,
    pub guide: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            rect_fill: Color::BLUE.with_alpha(200),
            eye_fill: Color::SKYBLUE,
            star_fill: Color::GOLD,
            guide: Color::LIGHTGRAY,
        }
    }
}

/// Counters for one recorded frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub frame: u32,
    pub items: usize,
    pub triangles: usize,
    pub vertices: usize,
}

pub struct Studio {
    shape: ShapeKind,
    params: ShapeParameters,
    eye: EyeConfig,
    star: StarConfig,
    roundness: f32,
    stroke: Stroke,
    palette: Palette,

    list: DrawList,
    tessellator: Tessellator,
}

impl Studio {
    pub fn new(cfg: &StudioConfig) -> Self {
        Self {
            shape: cfg.shape,
            params: ShapeParameters::default(),
            eye: EyeConfig::NEUTRAL,
            star: StarConfig::default(),
            roundness: 0.25,
            stroke: Stroke::new(cfg.stroke, Color::BLACK),
            palette: Palette::default(),
            list: DrawList::new(),
            tessellator: Tessellator::new(),
        }
    }

    #[inline]
    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    /// Applies a `group.field` slider assignment and returns the clamped value.
    pub fn set(&mut self, name: &str, value: f32) -> Result<f32, ConfigError> {
        let unknown = || ConfigError::at("unknown slider", name);
        let (group, field) = name.split_once('.').ok_or_else(unknown)?;

        let applied = match group {
            "eye" => controls::set_eye_param(&mut self.eye, field, value),
            "star" => controls::set_star_param(&mut self.star, field, value),
            "rounded" if field == "roundness" => {
                self.roundness = ROUNDNESS.clamp(value);
                Some(self.roundness)
            }
            _ => None,
        };

        let applied = applied.ok_or_else(unknown)?;
        log::info!("{name} = {applied:.3}");
        Ok(applied)
    }

    /// Applies `key` (if held), then records and tessellates the scene.
    pub fn on_frame(&mut self, frame: u32, key: Option<Key>) -> FrameStats {
        if let Some(key) = key {
            if controls::apply_key(&mut self.params, key) {
                let p = &self.params;
                log::info!(
                    "radius_top={:.0} radius_bottom={:.0} slope={:.3} segments={}",
                    p.radius_top,
                    p.radius_bottom,
                    p.slope_factor,
                    p.segments
                );
            }
        }

        self.list.clear();
        self.record();

        let items = self.list.len();
        let mesh = self.tessellator.tessellate(&mut self.list);
        let stats = FrameStats {
            frame,
            items,
            triangles: mesh.triangle_count(),
            vertices: mesh.vertices.len(),
        };

        log::debug!(
            "frame {}: {} items, {} triangles, {} vertices",
            stats.frame,
            stats.items,
            stats.triangles,
            stats.vertices
        );
        stats
    }

    fn record(&mut self) {
        let guide = Stroke::new(1.0, self.palette.guide);

        match self.shape {
            ShapeKind::Sloped => {
                self.list.push_sloped_rect_fill(ZIndex::FILL, SHAPE_RECT, &self.params, self.palette.rect_fill);
                self.list.push_sloped_rect_outline(ZIndex::OUTLINE, SHAPE_RECT, &self.params, self.stroke);
                self.list.push_rect_outline(ZIndex::GUIDE, SHAPE_RECT, guide);
            }
            ShapeKind::Rounded => {
                let params = ShapeParameters::rounded(SHAPE_RECT, self.roundness, self.params.segments);
                self.list.push_sloped_rect_fill(ZIndex::FILL, SHAPE_RECT, &params, self.palette.rect_fill);
                self.list.push_sloped_rect_outline(ZIndex::OUTLINE, SHAPE_RECT, &params, self.stroke);
                self.list.push_rect_outline(ZIndex::GUIDE, SHAPE_RECT, guide);
            }
            ShapeKind::Eyes => {
                for eye in EyeShape::pair(FACE_CENTER, EYE_SPACING, &self.eye) {
                    self.list.push_eye_fill(ZIndex::FILL, &eye, self.palette.eye_fill);
                    self.list.push_eye_outline(ZIndex::OUTLINE, &eye, self.stroke);
                }
            }
            ShapeKind::Star => {
                let star = StarShape::new(&self.star);
                self.list.push_star_fill(ZIndex::FILL, &star, self.palette.star_fill);
                self.list.push_star_outline(ZIndex::OUTLINE, &star, self.stroke);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn studio(shape: ShapeKind) -> Studio {
        Studio::new(&StudioConfig::default().shape(shape))
    }

    // ── frames ────────────────────────────────────────────────────────────

    #[test]
    fn every_shape_produces_a_mesh() {
        for shape in [ShapeKind::Sloped, ShapeKind::Eyes, ShapeKind::Star, ShapeKind::Rounded] {
            let stats = studio(shape).on_frame(0, None);
            assert!(stats.items > 0, "{shape}");
            assert!(stats.triangles > 0, "{shape}");
        }
    }

    #[test]
    fn sloped_frame_has_fill_outline_and_guide() {
        let mut s = studio(ShapeKind::Sloped);
        s.on_frame(0, None);
        let last = s.list.items().last().map(|it| it.key.z);
        assert_eq!(last, Some(ZIndex::GUIDE));
        let mut order = s.list.iter_in_paint_order();
        assert_eq!(order.next().map(|it| it.key.z), Some(ZIndex::FILL));
    }

    #[test]
    fn frames_do_not_accumulate() {
        let mut s = studio(ShapeKind::Star);
        let a = s.on_frame(0, None);
        let b = s.on_frame(1, None);
        assert_eq!(a.items, b.items);
        assert_eq!(a.triangles, b.triangles);
    }

    #[test]
    fn held_keys_edit_parameters() {
        let mut s = studio(ShapeKind::Sloped);
        s.on_frame(0, Some(Key::R));
        s.on_frame(1, Some(Key::Q));
        assert_eq!(s.params().radius_top, 31.0);
        assert_eq!(s.params().radius_bottom, 39.0);
    }

    #[test]
    fn more_segments_mean_more_triangles() {
        let mut s = studio(ShapeKind::Sloped);
        let before = s.on_frame(0, None);
        let after = s.on_frame(1, Some(Key::G));
        assert!(after.triangles > before.triangles);
    }

    // ── sliders ───────────────────────────────────────────────────────────

    #[test]
    fn set_routes_by_group() {
        let mut s = studio(ShapeKind::Eyes);
        assert_eq!(s.set("eye.height", 5.0).unwrap(), 10.0);
        assert_eq!(s.set("star.outer", 120.0).unwrap(), 120.0);
        assert_eq!(s.set("rounded.roundness", 2.0).unwrap(), 1.0);
    }

    #[test]
    fn set_rejects_unknown_names() {
        let mut s = studio(ShapeKind::Eyes);
        assert!(s.set("eye", 1.0).is_err());
        assert!(s.set("eye.pupil", 1.0).is_err());
        assert!(s.set("rounded.radius", 1.0).is_err());
        assert!(s.set("face.width", 1.0).is_err());
    }
}
