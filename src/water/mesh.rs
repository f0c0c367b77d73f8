//! Water plane mesh with per-vertex wave displacement.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::noise::WaveNoise;
use crate::params::{SurfaceGeometry, WaveParams};
use crate::wave::WaveField;

/// Vertex data for the water mesh (position + elevation for the color gradient)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub elevation: f32,
}

/// Square grid in the XZ plane, centered at the origin
pub struct WaterGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Undisplaced (x, z) of every vertex, sampled each frame
    rest_positions: Vec<Vec2>,
}

impl WaterGrid {
    /// Create a flat grid with the specified geometry
    pub fn new(geometry: &SurfaceGeometry) -> Self {
        let segments = geometry.segments.max(1);
        let spacing = geometry.spacing();
        let half_size = geometry.size / 2.0;

        let mut vertices = Vec::with_capacity((segments + 1).pow(2));
        let mut rest_positions = Vec::with_capacity((segments + 1).pow(2));
        let mut indices = Vec::with_capacity(segments.pow(2) * 6);

        // Generate flat XZ plane grid
        for z in 0..=segments {
            for x in 0..=segments {
                let x_pos = x as f32 * spacing - half_size;
                let z_pos = z as f32 * spacing - half_size;

                vertices.push(Vertex {
                    position: [x_pos, 0.0, z_pos],
                    elevation: 0.0,
                });
                rest_positions.push(Vec2::new(x_pos, z_pos));
            }
        }

        // Generate triangle indices (counter-clockwise seen from above)
        for z in 0..segments {
            for x in 0..segments {
                let top_left = (z * (segments + 1) + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * (segments + 1) + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self {
            vertices,
            indices,
            rest_positions,
        }
    }

    /// Re-evaluate the height of every vertex
    ///
    /// # Arguments
    /// * `field` - Wave field evaluator
    /// * `time_s` - Elapsed time in seconds
    /// * `params` - Wave parameters for this frame
    pub fn displace<N: WaveNoise>(&mut self, field: &WaveField<N>, time_s: f32, params: &WaveParams) {
        for (vertex, rest) in self.vertices.iter_mut().zip(&self.rest_positions) {
            let height = field.height(*rest, time_s, params);
            vertex.position[1] = height;
            vertex.elevation = height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_grid_creation() {
        let geometry = SurfaceGeometry::default();
        let grid = WaterGrid::new(&geometry);

        // Check vertex count: (segments + 1)^2
        assert_eq!(grid.vertices.len(), (geometry.segments + 1).pow(2));

        // Check triangle count: segments^2 * 2 triangles * 3 indices
        assert_eq!(grid.indices.len(), geometry.segments.pow(2) * 6);
        let max_index = *grid.indices.iter().max().unwrap() as usize;
        assert_eq!(max_index, grid.vertices.len() - 1);
    }

    #[test]
    fn test_grid_spans_plane() {
        let grid = WaterGrid::new(&SurfaceGeometry::default());

        let first = grid.vertices.first().unwrap().position;
        let last = grid.vertices.last().unwrap().position;
        assert_eq!(first, [-1.0, 0.0, -1.0]);
        assert_eq!(last, [1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_displace_writes_height_and_elevation() {
        let geometry = SurfaceGeometry {
            segments: 8,
            ..SurfaceGeometry::default()
        };
        let mut grid = WaterGrid::new(&geometry);
        let field = WaveField::new(geometry.noise_seed);
        let params = WaveParams::default();

        grid.displace(&field, 1.3, &params);

        for vertex in &grid.vertices {
            let rest = Vec2::new(vertex.position[0], vertex.position[2]);
            assert_eq!(vertex.position[1], field.height(rest, 1.3, &params));
            assert_eq!(vertex.elevation, vertex.position[1]);
        }
        assert!(grid.vertices.iter().any(|v| v.elevation != 0.0));
    }
}
