#![warn(missing_docs)]

//! Ray tracing core for lucent: grid acceleration and illumination.
//!
//! The two entry points mirror the render pipeline:
//!
//! - [`UniformGrid::build`] partitions a bounded scene into voxels so
//!   intersection queries skip empty space
//! - [`Tracer::trace`] turns a camera ray into a color, shading the
//!   nearest intersection with local effects and recursive
//!   reflection/refraction
//!
//! The tracer is immutable once constructed and safe to share across
//! render threads.

mod error;
mod grid;
mod sampler;
mod tracer;

pub use error::{GridError, Result};
pub use grid::UniformGrid;
pub use sampler::BeamSampler;
pub use tracer::Tracer;
