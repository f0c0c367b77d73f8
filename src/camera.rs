//! Camera placement and view-projection for the water scene.

use std::f32::consts::FRAC_PI_4;

use glam::{Mat4, Vec3};

use crate::params::{CameraPreset, FixedCamera, OrbitCamera, RenderConfig};

/// Camera system driven by a preset
pub struct CameraSystem {
    preset: CameraPreset,
}

impl CameraSystem {
    /// Create new camera system with specified preset
    pub fn new(preset: CameraPreset) -> Self {
        Self { preset }
    }

    /// Compute camera position and look-at target for given time
    ///
    /// # Returns
    /// Tuple of (eye_position, target_position)
    pub fn compute_position_and_target(&self, time_s: f32) -> (Vec3, Vec3) {
        match &self.preset {
            CameraPreset::Fixed(params) => Self::compute_fixed_path(params),
            CameraPreset::Orbit(params) => Self::compute_orbit_path(params, time_s),
        }
    }

    fn compute_fixed_path(p: &FixedCamera) -> (Vec3, Vec3) {
        (Vec3::from_array(p.position), Vec3::from_array(p.target))
    }

    /// Circle around the origin, starting on the fixed preset's diagonal
    fn compute_orbit_path(p: &OrbitCamera, time_s: f32) -> (Vec3, Vec3) {
        let angle = FRAC_PI_4 + time_s * p.angular_speed;
        let eye = Vec3::new(p.radius * angle.cos(), p.height, p.radius * angle.sin());
        (eye, Vec3::ZERO)
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn create_view_proj_matrix(
        &self,
        time_s: f32,
        render_config: &RenderConfig,
    ) -> (Mat4, Vec3) {
        let (eye, target) = self.compute_position_and_target(time_s);

        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane,
            render_config.far_plane,
        );

        (proj * view, eye)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_camera_default_view() {
        let camera = CameraSystem::new(CameraPreset::default());
        let (eye, target) = camera.compute_position_and_target(12.0);
        assert_eq!(eye, Vec3::ONE);
        assert_eq!(target, Vec3::ZERO);
    }

    #[test]
    fn test_orbit_starts_on_diagonal_and_keeps_distance() {
        let params = OrbitCamera::default();
        let camera = CameraSystem::new(CameraPreset::Orbit(params.clone()));

        let (eye0, _) = camera.compute_position_and_target(0.0);
        assert!((eye0 - Vec3::ONE).length() < 1e-5);

        for t in 0..50 {
            let (eye, target) = camera.compute_position_and_target(t as f32 * 0.7);
            let horizontal = Vec3::new(eye.x, 0.0, eye.z).length();
            assert!((horizontal - params.radius).abs() < 1e-4);
            assert_eq!(eye.y, params.height);
            assert_eq!(target, Vec3::ZERO);
        }
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = CameraSystem::new(CameraPreset::default());
        let render_config = RenderConfig::default();

        let (view_proj, eye_pos) = camera.create_view_proj_matrix(0.0, &render_config);

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert!(view_proj.is_finite());
        assert!(eye_pos.is_finite());

        // The origin is in front of the camera and inside the clip volume
        let clip = view_proj * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }
}
