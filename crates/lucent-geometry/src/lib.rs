#![warn(missing_docs)]

//! Analytic shapes and ray-surface intersection for the lucent ray tracer.
//!
//! The shape set is closed: planes, triangles, convex polygons, spheres,
//! infinite tubes, and finite cylinders, dispatched through the
//! [`Surface`] enum. Every shape produces epsilon-aware ray intersections
//! ([`Surface::hits`]), a unit surface normal ([`Surface::normal_at`]), and an
//! optional axis-aligned bounding box (`None` for the two infinite
//! surfaces, which the grid builder rejects).
//!
//! # Architecture
//!
//! - [`Ray`] - normalizing ray constructor plus the epsilon-offset variant
//!   used for shadow/reflection/refraction rays
//! - [`surface`] - one module per shape with its intersection algorithm
//! - [`Shape`] - a surface paired with its emission color and [`Material`]
//! - [`Group`] - composite container over shared [`Shape`]s
//! - [`GeoPoint`] - (shape, point) intersection result

mod aabb;
mod error;
mod group;
mod material;
mod ray;
mod shape;
pub mod surface;

pub use aabb::Aabb;
pub use error::{GeometryError, Result};
pub use group::Group;
pub use material::Material;
pub use ray::{Ray, DELTA};
pub use shape::{closest_hit, GeoPoint, Shape};
pub use surface::{Cylinder, Hit, Plane, Polygon, Sphere, Surface, Triangle, Tube};
