//! Camera placement presets.

/// Stationary camera looking at a fixed point
#[derive(Debug, Clone)]
pub struct FixedCamera {
    /// Camera position (scene units)
    pub position: [f32; 3],

    /// Look-at target (scene units)
    pub target: [f32; 3],
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            position: [1.0, 1.0, 1.0], // Diagonal view of the 2x2 plane
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Camera circling the origin at constant height
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Horizontal distance from the origin (scene units)
    pub radius: f32,

    /// Height above the undisturbed surface (scene units)
    pub height: f32,

    /// Angular speed (radians per second)
    pub angular_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius: std::f32::consts::SQRT_2, // Same distance as the fixed view
            height: 1.0,
            angular_speed: 0.1,
        }
    }
}

/// Camera preset selection
#[derive(Debug, Clone)]
pub enum CameraPreset {
    /// Fixed preset: the classic diagonal view
    Fixed(FixedCamera),

    /// Orbit preset: slow automatic rotation around the water
    Orbit(OrbitCamera),
}

impl Default for CameraPreset {
    fn default() -> Self {
        Self::Fixed(FixedCamera::default())
    }
}
