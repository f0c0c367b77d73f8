//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use crate::error::Result;
use crate::params::{
    CameraPreset, FixedCamera, OrbitCamera, RenderConfig, SceneParams, SurfaceGeometry,
};
use crate::snapshot::SnapshotConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "ragingsea")]
#[command(about = "Procedurally animated water surface with a live debug panel", long_about = None)]
pub struct Args {
    /// JSON preset with wave and fog parameters
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Print the effective parameters as JSON and exit
    #[arg(long)]
    pub print_params: bool,

    /// Camera preset: fixed (default), orbit
    #[arg(long, value_name = "PRESET", default_value = "fixed")]
    pub camera_preset: String,

    /// Window width (pixels)
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Window height (pixels)
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Water plane segments per side
    #[arg(long, default_value_t = 128)]
    pub segments: usize,

    /// Perlin noise seed for the small waves
    #[arg(long, default_value_t = 0)]
    pub seed: u32,

    /// Render a top-down PNG of the surface instead of opening a window
    #[arg(long, value_name = "PNG")]
    pub snapshot: Option<PathBuf>,

    /// Time to evaluate the snapshot at (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub time: f32,

    /// Snapshot width and height (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 512)]
    pub size: u32,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse camera preset from command-line arguments
    pub fn parse_camera_preset(&self) -> CameraPreset {
        match self.camera_preset.to_lowercase().as_str() {
            "fixed" => {
                info!("camera: fixed");
                CameraPreset::Fixed(FixedCamera::default())
            }
            "orbit" => {
                info!("camera: orbit");
                CameraPreset::Orbit(OrbitCamera::default())
            }
            other => {
                warn!("unknown camera preset '{}', using fixed", other);
                CameraPreset::Fixed(FixedCamera::default())
            }
        }
    }

    /// Parameters from the preset file, or defaults
    pub fn load_params(&self) -> Result<SceneParams> {
        match &self.params {
            Some(path) => {
                let params = SceneParams::load(path)?;
                info!(path = %path.display(), "loaded parameter preset");
                Ok(params)
            }
            None => Ok(SceneParams::default()),
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        let mut config = RenderConfig::default();
        config.resize(self.width, self.height);
        config
    }

    pub fn surface_geometry(&self) -> SurfaceGeometry {
        SurfaceGeometry {
            segments: self.segments.max(1),
            noise_seed: self.seed,
            ..SurfaceGeometry::default()
        }
    }

    /// Snapshot configuration if snapshot mode is enabled
    pub fn snapshot_config(&self) -> Option<SnapshotConfig> {
        self.snapshot.as_ref().map(|path| SnapshotConfig {
            time_s: self.time,
            size_px: self.size.max(1),
            noise_seed: self.seed,
            ..SnapshotConfig::new(path)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ragingsea"]).unwrap();
        assert!(matches!(args.parse_camera_preset(), CameraPreset::Fixed(_)));
        assert!(args.snapshot_config().is_none());
        assert_eq!(args.surface_geometry().segments, 128);
        assert_eq!(args.render_config().aspect_ratio(), 1280.0 / 720.0);
        assert_eq!(args.load_params().unwrap(), SceneParams::default());
    }

    #[test]
    fn test_snapshot_flags() {
        let args = Args::try_parse_from([
            "ragingsea",
            "--snapshot",
            "out.png",
            "--time",
            "2.5",
            "--size",
            "64",
            "--seed",
            "9",
        ])
        .unwrap();

        let config = args.snapshot_config().unwrap();
        assert_eq!(config.path, PathBuf::from("out.png"));
        assert_eq!(config.time_s, 2.5);
        assert_eq!(config.size_px, 64);
        assert_eq!(config.noise_seed, 9);
    }

    #[test]
    fn test_camera_presets() {
        let args = Args::try_parse_from(["ragingsea", "--camera-preset", "Orbit"]).unwrap();
        assert!(matches!(args.parse_camera_preset(), CameraPreset::Orbit(_)));

        let args = Args::try_parse_from(["ragingsea", "--camera-preset", "drone"]).unwrap();
        assert!(matches!(args.parse_camera_preset(), CameraPreset::Fixed(_)));
    }

    #[test]
    fn test_missing_preset_file_is_an_error() {
        let args =
            Args::try_parse_from(["ragingsea", "--params", "/nonexistent/preset.json"]).unwrap();
        assert!(args.load_params().is_err());
    }
}
