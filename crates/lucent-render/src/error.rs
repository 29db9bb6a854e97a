//! Error types for camera setup and image output.

use thiserror::Error;

/// Errors raised configuring a render or writing its output.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A required camera parameter was never set.
    #[error("missing camera parameter: {0}")]
    MissingParameter(&'static str),

    /// A camera parameter had an invalid value.
    #[error("invalid camera parameter: {0}")]
    InvalidParameter(&'static str),

    /// Writing the output image failed.
    #[error("image output failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;
