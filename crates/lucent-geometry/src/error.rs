//! Error types for shape construction.

use thiserror::Error;

/// Errors raised while assembling scene geometry.
///
/// All of these are construction-time failures; intersection and shading
/// never produce errors (numeric edge cases resolve to "no hit" or a zero
/// contribution).
#[derive(Error, Debug)]
pub enum GeometryError {
    /// A direction was the zero vector (or too short to normalize).
    #[error("direction vector is zero or too short to normalize")]
    DegenerateDirection,

    /// Polygon vertex list violates an invariant.
    #[error("invalid polygon: {0}")]
    InvalidPolygon(&'static str),
}

/// Result type for geometry construction.
pub type Result<T> = std::result::Result<T, GeometryError>;
