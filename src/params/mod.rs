//! Parameter definitions with units, defaults and debug-panel ranges.
//!
//! All tunable numbers of the demo live here:
//! - Scene units (the water plane is 2 units across)
//! - Documented defaults and slider ranges
//! - Serde support for JSON presets

mod camera;
mod fog;
mod range;
mod render;
mod scene;
mod surface;
mod wave;

// Re-export all types
pub use camera::{CameraPreset, FixedCamera, OrbitCamera};
pub use fog::{FogMode, FogParams};
pub use range::{ranges, ParamRange};
pub use render::RenderConfig;
pub use scene::SceneParams;
pub use surface::SurfaceGeometry;
pub use wave::WaveParams;
