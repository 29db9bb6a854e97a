//! Error types for acceleration-structure construction.

use lucent_geometry::GeometryError;
use thiserror::Error;

/// Errors raised while building the uniform grid.
///
/// Tracing itself never fails; every numeric edge case during traversal
/// resolves to "no intersection" or a zero contribution.
#[derive(Error, Debug)]
pub enum GridError {
    /// The scene contains a shape without a finite bounding box.
    #[error("cannot build a grid over unbounded geometry (infinite plane or tube)")]
    UnboundedGeometry,

    /// A grid boundary face could not be constructed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Result type for grid construction.
pub type Result<T> = std::result::Result<T, GridError>;
