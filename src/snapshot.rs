//! Headless CPU rendition of the water field to PNG.
//!
//! Top-down view of the plane at a fixed time: one evaluator sample per pixel,
//! shaded exactly like the fragment stage as seen from the camera position.

use std::path::PathBuf;

use glam::{Vec2, Vec3};
use image::RgbImage;
use tracing::info;

use crate::error::Result;
use crate::params::SceneParams;
use crate::shading;
use crate::wave::WaveField;

/// Snapshot output configuration
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Output PNG path
    pub path: PathBuf,

    /// Elapsed time to evaluate the field at (seconds)
    pub time_s: f32,

    /// Image width and height (pixels)
    pub size_px: u32,

    /// Side length of the covered plane (scene units)
    pub extent: f32,

    /// Point the fog distance is measured from
    pub eye: Vec3,

    /// Perlin noise seed
    pub noise_seed: u32,
}

impl SnapshotConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            time_s: 0.0,
            size_px: 512,
            extent: 2.0,
            eye: Vec3::ONE,
            noise_seed: 0,
        }
    }

    /// Surface position under the center of a pixel (image y runs along +Z)
    fn pixel_to_surface(&self, px: u32, py: u32) -> Vec2 {
        let size = self.size_px.max(1) as f32;
        let half = self.extent / 2.0;
        Vec2::new(
            (px as f32 + 0.5) / size * self.extent - half,
            (py as f32 + 0.5) / size * self.extent - half,
        )
    }
}

/// Render the field into an sRGB image
pub fn render(params: &SceneParams, config: &SnapshotConfig) -> RgbImage {
    let field = WaveField::new(config.noise_seed);

    RgbImage::from_fn(config.size_px, config.size_px, |px, py| {
        let position = config.pixel_to_surface(px, py);
        let sample = field.sample(position, config.time_s, &params.wave);
        let world = Vec3::new(position.x, sample.height, position.y);

        let color = shading::shade(&sample, world.distance(config.eye), params);
        image::Rgb(color.to_srgb().to_srgb8())
    })
}

/// Render and write the PNG
pub fn save(params: &SceneParams, config: &SnapshotConfig) -> Result<()> {
    let image = render(params, config);
    image.save(&config.path)?;
    info!(
        path = %config.path.display(),
        size = config.size_px,
        time_s = config.time_s,
        "snapshot written"
    );
    Ok(())
}
