use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a primitive on layer `z`.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Pushes an ordered primitive sequence on layer `z`, keeping its order.
    pub fn extend(&mut self, z: ZIndex, cmds: impl IntoIterator<Item = DrawCmd>) {
        for cmd in cmds {
            self.push(z, cmd);
        }
    }

    /// Iterates items in paint order (back-to-front) without cloning.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices.sort_by_key(|&i| items[i].key);

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;
    use crate::scene::Stroke;

    fn paint_order(list: &mut DrawList) -> Vec<DrawCmd> {
        list.iter_in_paint_order().map(|it| it.cmd.clone()).collect()
    }

    #[test]
    fn outline_layer_paints_after_fill_even_if_pushed_first() {
        let mut list = DrawList::new();
        list.push_line(ZIndex::OUTLINE, Vec2::zero(), Vec2::new(1.0, 0.0), Stroke::default());
        list.push_rect(ZIndex::FILL, Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLUE);

        let order = paint_order(&mut list);
        assert!(order[0].is_fill());
        assert!(order[1].is_stroke());
    }

    #[test]
    fn same_layer_keeps_insertion_order() {
        let mut list = DrawList::new();
        for i in 0..5 {
            list.push_rect(ZIndex::FILL, Rect::new(i as f32, 0.0, 1.0, 1.0), Color::BLUE);
        }
        let xs: Vec<f32> = paint_order(&mut list)
            .into_iter()
            .map(|c| match c {
                DrawCmd::Rect(r) => r.rect.x(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        list.push_rect(ZIndex::FILL, Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLUE);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter_in_paint_order().count(), 0);

        list.push_rect(ZIndex::FILL, Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLUE);
        assert_eq!(list.items()[0].key.order, 0);
    }

    #[test]
    fn push_rect_outline_emits_closed_border() {
        let mut list = DrawList::new();
        list.push_rect_outline(ZIndex::GUIDE, Rect::new(0.0, 0.0, 4.0, 2.0), Stroke::default());
        assert_eq!(list.len(), 4);
        let DrawCmd::Line(first) = &list.items()[0].cmd else { panic!("expected line") };
        let DrawCmd::Line(last) = &list.items()[3].cmd else { panic!("expected line") };
        assert_eq!(first.start, last.end);
    }
}
