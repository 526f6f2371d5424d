/// Paint layer for draw items. Higher layers are painted over lower ones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Shape interiors.
    pub const FILL: ZIndex = ZIndex(0);
    /// Shape outlines, stroked on top of their fill.
    pub const OUTLINE: ZIndex = ZIndex(1);
    /// Guides and helper overlays (bounding boxes, corner markers).
    pub const GUIDE: ZIndex = ZIndex(2);
}
