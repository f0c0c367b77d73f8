//! Error type shared by the windowing, GPU and file-facing parts of the demo.
//!
//! The wave evaluator itself is infallible; everything here comes from glue.

/// Errors raised while setting up or driving the renderer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter found")]
    NoAdapter,
    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid parameter file: {0}")]
    Params(#[from] serde_json::Error),
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
