//! Wave displacement and color gradient parameters.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::range::ranges;
use crate::color::Rgb;

/// Wave parameters, re-read every frame and edited in place by the debug panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    // === Large rolling wave ===
    /// Height of the large wave (scene units)
    pub big_wave_elevation: f32,

    /// Spatial frequency along world X (x) and world Z (y)
    pub big_wave_frequency: Vec2,

    /// Phase speed (radians per second)
    pub big_wave_speed: f32,

    // === Small noise waves ===
    /// Height of the first small-wave octave (halves with each octave)
    pub small_wave_elevation: f32,

    /// Spatial frequency of the first octave (doubles with each octave)
    pub small_wave_frequency: f32,

    /// Noise scroll speed along the time axis
    pub small_wave_speed: f32,

    /// Number of noise octaves summed
    pub small_wave_iterations: u32,

    // === Color gradient ===
    /// Color at the bottom of the gradient (sRGB)
    pub depth_color: Rgb,

    /// Color at the top of the gradient (sRGB)
    pub surface_color: Rgb,

    /// Added to the height before scaling into the gradient
    pub color_offset: f32,

    /// Scales the offset height into the gradient
    pub color_multiplier: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            big_wave_elevation: 0.2,
            big_wave_frequency: Vec2::new(4.0, 4.0),
            big_wave_speed: 0.75,

            small_wave_elevation: 0.15,
            small_wave_frequency: 3.0,
            small_wave_speed: 0.2,
            small_wave_iterations: 4,

            depth_color: Rgb::from_hex(0x0000ff),
            surface_color: Rgb::from_hex(0x8888ff),
            color_offset: 0.08,
            color_multiplier: 5.0,
        }
    }
}

impl WaveParams {
    /// Copy with every value forced into its panel range
    pub fn clamped(&self) -> Self {
        Self {
            big_wave_elevation: ranges::BIG_WAVE_ELEVATION.clamp(self.big_wave_elevation),
            big_wave_frequency: Vec2::new(
                ranges::BIG_WAVE_FREQUENCY.clamp(self.big_wave_frequency.x),
                ranges::BIG_WAVE_FREQUENCY.clamp(self.big_wave_frequency.y),
            ),
            big_wave_speed: ranges::BIG_WAVE_SPEED.clamp(self.big_wave_speed),
            small_wave_elevation: ranges::SMALL_WAVE_ELEVATION.clamp(self.small_wave_elevation),
            small_wave_frequency: ranges::SMALL_WAVE_FREQUENCY.clamp(self.small_wave_frequency),
            small_wave_speed: ranges::SMALL_WAVE_SPEED.clamp(self.small_wave_speed),
            small_wave_iterations: self
                .small_wave_iterations
                .min(ranges::MAX_SMALL_WAVE_ITERATIONS),
            depth_color: self.depth_color,
            surface_color: self.surface_color,
            color_offset: ranges::COLOR_OFFSET.clamp(self.color_offset),
            color_multiplier: ranges::COLOR_MULTIPLIER.clamp(self.color_multiplier),
        }
    }
}
