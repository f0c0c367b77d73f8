//! Water plane geometry.

/// Water plane mesh parameters
#[derive(Debug, Clone)]
pub struct SurfaceGeometry {
    /// Side length of the square plane (scene units)
    pub size: f32,

    /// Segments per side (128 = 16,641 vertices)
    pub segments: usize,

    /// Perlin noise seed for the small waves
    pub noise_seed: u32,
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self {
            size: 2.0,
            segments: 128,
            noise_seed: 0,
        }
    }
}

impl SurfaceGeometry {
    /// Distance between neighbouring vertices (scene units)
    pub fn spacing(&self) -> f32 {
        self.size / self.segments.max(1) as f32
    }
}
