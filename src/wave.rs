//! Wave field evaluator: height and color ratio of the water at a point.
//!
//! Height is one large rolling wave (product of two sines) minus a stack of
//! small noise octaves. Each octave doubles the spatial frequency and halves
//! the weight, and only ever lowers the surface (absolute noise value), which
//! carves sharp troughs between rounded crests.

use glam::Vec2;

use crate::noise::{PerlinNoise, WaveNoise};
use crate::params::WaveParams;

/// Result of evaluating the field at one point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSample {
    /// Vertical displacement (scene units)
    pub height: f32,

    /// Position along the depth → surface color gradient, in `[0, 1]`
    pub elevation_ratio: f32,
}

/// Large rolling wave term
///
/// `sin(x * freq.x + t * speed) * sin(z * freq.y + t * speed) * elevation`
pub fn big_wave(position: Vec2, time_s: f32, params: &WaveParams) -> f32 {
    let phase = time_s * params.big_wave_speed;
    (position.x * params.big_wave_frequency.x + phase).sin()
        * (position.y * params.big_wave_frequency.y + phase).sin()
        * params.big_wave_elevation
}

/// Map a height onto the color gradient: `clamp((h + offset) * multiplier, 0, 1)`
pub fn elevation_ratio(height: f32, params: &WaveParams) -> f32 {
    let ratio = (height + params.color_offset) * params.color_multiplier;
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Stateless evaluator over a noise source
pub struct WaveField<N = PerlinNoise> {
    noise: N,
}

impl WaveField<PerlinNoise> {
    /// Evaluator backed by seeded Perlin noise
    pub fn new(seed: u32) -> Self {
        Self::with_noise(PerlinNoise::new(seed))
    }
}

impl<N: WaveNoise> WaveField<N> {
    pub fn with_noise(noise: N) -> Self {
        Self { noise }
    }

    /// Summed small-wave octaves (always `<= 0`)
    pub fn small_waves(&self, position: Vec2, time_s: f32, params: &WaveParams) -> f32 {
        let t = (time_s * params.small_wave_speed) as f64;
        let mut height = 0.0;
        let mut octave = 1.0_f32;

        for _ in 0..params.small_wave_iterations {
            let frequency = params.small_wave_frequency * octave;
            let noise_value = self.noise.sample(
                (position.x * frequency) as f64,
                (position.y * frequency) as f64,
                t,
            ) as f32;

            height -= noise_value.abs() * params.small_wave_elevation / octave;
            octave *= 2.0;
        }

        height
    }

    /// Displaced height at a surface position (world x, world z)
    pub fn height(&self, position: Vec2, time_s: f32, params: &WaveParams) -> f32 {
        big_wave(position, time_s, params) + self.small_waves(position, time_s, params)
    }

    /// Height plus its color gradient ratio
    pub fn sample(&self, position: Vec2, time_s: f32, params: &WaveParams) -> WaveSample {
        let height = self.height(position, time_s, params);
        WaveSample {
            height,
            elevation_ratio: elevation_ratio(height, params),
        }
    }
}
