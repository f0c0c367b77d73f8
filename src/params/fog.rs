//! Fog parameters (shading stage only, never touch displacement).

use serde::{Deserialize, Serialize};

use super::range::ranges;
use crate::color::Rgb;

/// Fog falloff model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FogMode {
    #[default]
    Off,
    /// Smooth ramp between `near` and `far`
    Linear,
    /// `1 - exp(-(density * distance)^2)`
    Exponential,
}

impl FogMode {
    pub const ALL: [FogMode; 3] = [FogMode::Off, FogMode::Linear, FogMode::Exponential];

    pub fn label(self) -> &'static str {
        match self {
            FogMode::Off => "Off",
            FogMode::Linear => "Linear",
            FogMode::Exponential => "Exponential",
        }
    }

    /// Discriminant passed to the fragment shader
    pub fn shader_id(self) -> u32 {
        match self {
            FogMode::Off => 0,
            FogMode::Linear => 1,
            FogMode::Exponential => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FogParams {
    pub mode: FogMode,

    /// Fog color (sRGB)
    pub color: Rgb,

    /// Distance where linear fog starts (scene units)
    pub near: f32,

    /// Distance where linear fog is opaque (scene units)
    pub far: f32,

    /// Exponential fog density (per scene unit)
    pub density: f32,
}

impl Default for FogParams {
    fn default() -> Self {
        Self {
            mode: FogMode::Off,
            color: Rgb::BLACK,
            near: 1.0,
            far: 10.0,
            density: 0.1,
        }
    }
}

impl FogParams {
    pub fn clamped(&self) -> Self {
        Self {
            mode: self.mode,
            color: self.color,
            near: ranges::FOG_DISTANCE.clamp(self.near),
            far: ranges::FOG_DISTANCE.clamp(self.far),
            density: ranges::FOG_DENSITY.clamp(self.density),
        }
    }
}
