//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw primitives
//! - provide deterministic ordering (z-index + insertion order)
//! - keep per-primitive payloads and push helpers isolated under `scene::shapes`

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::Stroke;
pub use z_index::ZIndex;
