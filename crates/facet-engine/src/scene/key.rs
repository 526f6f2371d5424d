use super::ZIndex;

/// Stable sort key for draw items.
///
/// Field order is significant for the derived `Ord`: items sort by `z`
/// (back-to-front) and, within a layer, by insertion `order`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_dominates_insertion_order() {
        let early_high = SortKey::new(ZIndex::OUTLINE, 0);
        let late_low = SortKey::new(ZIndex::FILL, 99);
        assert!(late_low < early_high);
    }

    #[test]
    fn insertion_order_breaks_ties() {
        assert!(SortKey::new(ZIndex::FILL, 1) < SortKey::new(ZIndex::FILL, 2));
    }
}
