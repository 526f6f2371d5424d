//! CPU tessellation of draw streams into indexed triangle meshes.
//!
//! Output is in logical pixels with straight-alpha `u8` colors, laid out for
//! direct upload to a vertex buffer (`bytemuck::cast_slice`).

mod mesh;
mod tessellator;

pub use mesh::{Mesh, Vertex};
pub use tessellator::Tessellator;
