//! Water surface: plane mesh displaced by the wave field every frame.

mod mesh;
mod system;

pub use mesh::{Vertex, WaterGrid};
pub use system::WaterSystem;
