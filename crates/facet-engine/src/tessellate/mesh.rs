use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;

/// Mesh vertex: position in logical pixels plus RGBA8 color (12 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [u8; 4],
}

impl Vertex {
    #[inline]
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self { pos: [pos.x, pos.y], color: color.to_array() }
    }
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex data as raw bytes.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes.
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    #[inline]
    fn base(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub(crate) fn add_triangle(&mut self, points: [Vec2; 3], color: Color) {
        let base = self.base();
        self.vertices.extend(points.iter().map(|&p| Vertex::new(p, color)));
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// Convex quad in perimeter order, split along the 0–2 diagonal.
    pub(crate) fn add_quad(&mut self, points: [Vec2; 4], color: Color) {
        let base = self.base();
        self.vertices.extend(points.iter().map(|&p| Vertex::new(p, color)));
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Triangle fan around `hub` through `rim` in order.
    pub(crate) fn add_fan(&mut self, hub: Vec2, rim: impl IntoIterator<Item = Vec2>, color: Color) {
        let base = self.base();
        self.vertices.push(Vertex::new(hub, color));
        self.vertices.extend(rim.into_iter().map(|p| Vertex::new(p, color)));

        let rim_count = self.base() - base - 1;
        for i in 1..rim_count {
            self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_twelve_bytes() {
        assert_eq!(std::mem::size_of::<Vertex>(), 12);
    }

    #[test]
    fn quad_splits_into_two_triangles() {
        let mut mesh = Mesh::new();
        mesh.add_quad(
            [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)],
            Color::BLACK,
        );
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn fan_indices_are_offset_by_existing_vertices() {
        let mut mesh = Mesh::new();
        mesh.add_triangle([Vec2::zero(); 3], Color::BLACK);
        mesh.add_fan(
            Vec2::zero(),
            [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0)],
            Color::BLACK,
        );
        assert_eq!(mesh.triangle_count(), 3);
        assert_eq!(&mesh.indices[3..], &[3, 4, 5, 3, 5, 6]);
    }

    #[test]
    fn byte_views_match_lengths() {
        let mut mesh = Mesh::new();
        mesh.add_triangle([Vec2::zero(); 3], Color::WHITE);
        assert_eq!(mesh.vertex_bytes().len(), 36);
        assert_eq!(mesh.index_bytes().len(), 12);
    }
}
