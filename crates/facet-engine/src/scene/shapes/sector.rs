use crate::geometry::Sector;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Stroke, ZIndex};

/// Filled circular sector.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorCmd {
    pub sector: Sector,
    pub color: Color,
}

impl SectorCmd {
    #[inline]
    pub fn new(sector: Sector, color: Color) -> Self {
        Self { sector, color }
    }
}

/// Stroked circular arc. Same geometry as [`SectorCmd`], drawn along the rim only.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub sector: Sector,
    pub thickness: f32,
    pub color: Color,
}

impl ArcCmd {
    #[inline]
    pub fn new(sector: Sector, stroke: Stroke) -> Self {
        Self { sector, thickness: stroke.thickness, color: stroke.color }
    }
}

impl DrawList {
    /// Records a filled sector.
    #[inline]
    pub fn push_sector(&mut self, z: ZIndex, sector: Sector, color: Color) {
        self.push(z, DrawCmd::Sector(SectorCmd::new(sector, color)));
    }

    /// Records a stroked arc.
    #[inline]
    pub fn push_arc(&mut self, z: ZIndex, sector: Sector, stroke: Stroke) {
        self.push(z, DrawCmd::Arc(ArcCmd::new(sector, stroke)));
    }
}
