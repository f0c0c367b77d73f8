//! High-level water system: mesh plus the evaluator that animates it.

use tracing::debug;

use super::mesh::WaterGrid;
use crate::params::{SurfaceGeometry, WaveParams};
use crate::wave::WaveField;

/// Water surface animated by the wave field
pub struct WaterSystem {
    pub grid: WaterGrid,
    field: WaveField,
}

impl WaterSystem {
    /// Create new water system with specified geometry
    pub fn new(geometry: &SurfaceGeometry) -> Self {
        let grid = WaterGrid::new(geometry);
        debug!(
            vertices = grid.vertices.len(),
            triangles = grid.indices.len() / 3,
            "water grid built"
        );
        Self {
            grid,
            field: WaveField::new(geometry.noise_seed),
        }
    }

    /// Displace the surface for the current frame
    pub fn update(&mut self, time_s: f32, params: &WaveParams) {
        self.grid.displace(&self.field, time_s, params);
    }
}
