//! The live-editable parameter record and its JSON preset form.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FogParams, WaveParams};
use crate::error::Result;

/// Everything the debug panel edits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    pub wave: WaveParams,
    pub fog: FogParams,
}

impl SceneParams {
    /// Parse a JSON preset; missing fields keep their defaults and values are clamped
    pub fn from_json(json: &str) -> Result<Self> {
        let params: SceneParams = serde_json::from_str(json)?;
        Ok(params.clamped())
    }

    /// Load a JSON preset from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn clamped(&self) -> Self {
        Self {
            wave: self.wave.clamped(),
            fog: self.fog.clamped(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::params::FogMode;

    #[test]
    fn test_defaults_round_trip() {
        let params = SceneParams::default();
        let json = params.to_json().unwrap();
        assert!(json.contains("\"depth_color\": \"#0000ff\""));
        assert_eq!(SceneParams::from_json(&json).unwrap(), params);
    }

    #[test]
    fn test_partial_preset_fills_defaults() {
        let json = r##"{
            "wave": { "big_wave_elevation": 0.5, "surface_color": "#9bd8ff" },
            "fog": { "mode": "exponential" }
        }"##;
        let params = SceneParams::from_json(json).unwrap();

        assert_eq!(params.wave.big_wave_elevation, 0.5);
        assert_eq!(params.wave.surface_color, Rgb::from_hex(0x9bd8ff));
        assert_eq!(params.wave.small_wave_iterations, 4);
        assert_eq!(params.fog.mode, FogMode::Exponential);
        assert_eq!(params.fog.density, FogParams::default().density);
    }

    #[test]
    fn test_preset_values_are_clamped() {
        let json = r#"{ "wave": { "big_wave_elevation": 7.0, "small_wave_iterations": 64 } }"#;
        let params = SceneParams::from_json(json).unwrap();
        assert_eq!(params.wave.big_wave_elevation, 1.0);
        assert_eq!(params.wave.small_wave_iterations, 10);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let json = r#"{ "wave": { "depth_color": "blue" } }"#;
        assert!(SceneParams::from_json(json).is_err());
    }
}
