#![warn(missing_docs)]

//! Camera model and image rendering for the lucent ray tracer.
//!
//! [`Camera`] turns pixel coordinates into rays; [`render`] traces a
//! whole frame in parallel and [`Frame`] writes it out as a PNG.

mod camera;
mod error;
mod render;

pub use camera::{Camera, CameraBuilder};
pub use error::{RenderError, Result};
pub use render::{render, Frame};
