//! CPU mirror of the fragment stage: color gradient and fog.
//!
//! `shader.wgsl` implements the same formulas; the snapshot renderer and the
//! tests go through these functions.

use crate::color::Rgb;
use crate::params::{FogMode, FogParams, SceneParams, WaveParams};
use crate::wave::WaveSample;

/// Gradient color for an elevation ratio, in linear light
///
/// Ratio 0 yields the depth color, ratio 1 the surface color.
pub fn surface_color(elevation_ratio: f32, params: &WaveParams) -> Rgb {
    params
        .depth_color
        .to_linear()
        .mix(params.surface_color.to_linear(), elevation_ratio)
}

/// Hermite ramp from 0 at `edge0` to 1 at `edge1`
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Amount of fog color mixed in at a given distance from the camera, in `[0, 1]`
pub fn fog_factor(distance: f32, fog: &FogParams) -> f32 {
    match fog.mode {
        FogMode::Off => 0.0,
        FogMode::Linear => smoothstep(fog.near, fog.far, distance),
        FogMode::Exponential => {
            let d = fog.density * distance;
            (1.0 - (-d * d).exp()).clamp(0.0, 1.0)
        }
    }
}

/// Final linear color of a surface sample seen from `distance` away
pub fn shade(sample: &WaveSample, distance: f32, params: &SceneParams) -> Rgb {
    let color = surface_color(sample.elevation_ratio, &params.wave);
    color.mix(params.fog.color.to_linear(), fog_factor(distance, &params.fog))
}
