//! Error types for scene construction and image output.

use thiserror::Error;

/// Invalid scene parameters, rejected at construction time.
///
/// Tracing itself has no error paths: missed rays, absorbed rays and
/// exhausted bounce budgets are ordinary outcomes. Validating here keeps
/// NaNs out of the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SceneError {
    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
    #[error("metal fuzz must be in [0, 1], got {0}")]
    InvalidFuzz(f32),
    #[error("refractive index must be finite and positive, got {0}")]
    InvalidRefractiveIndex(f32),
}

/// Failure to write the rendered image, the only fatal render error.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}
