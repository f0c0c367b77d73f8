//! Raging Sea library - procedurally animated water surface

pub mod camera;
pub mod cli;
pub mod color;
pub mod error;
pub mod noise;
pub mod panel;
pub mod params;
pub mod rendering;
pub mod shading;
pub mod snapshot;
pub mod water;
pub mod wave;

pub use error::{Error, Result};
