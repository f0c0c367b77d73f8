//! Window and projection configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (scene units)
    pub near_plane: f32,

    /// Far clipping plane (scene units)
    pub far_plane: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }

    /// Track a new window size (zero-sized windows are ignored)
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.window_width = width;
            self.window_height = height;
        }
    }
}
