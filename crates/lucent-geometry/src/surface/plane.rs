//! Infinite plane.

use lucent_math::{align_zero, try_dir, Dir3, Point3, Vec3};

use crate::error::{GeometryError, Result};
use crate::surface::{valid_t, Hit};
use crate::Ray;

/// An infinite plane given by a reference point and unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Reference point on the plane.
    pub origin: Point3,
    /// Unit normal.
    pub normal: Dir3,
}

impl Plane {
    /// Create a plane from a reference point and a (not necessarily
    /// unit) normal vector.
    pub fn new(origin: Point3, normal: Vec3) -> Result<Self> {
        let normal = try_dir(normal).ok_or(GeometryError::DegenerateDirection)?;
        Ok(Self { origin, normal })
    }

    /// Create a plane through three points.
    ///
    /// Fails when the points are collinear or coincident.
    pub fn from_points(a: Point3, b: Point3, c: Point3) -> Result<Self> {
        let normal = (b - a).cross(&(c - a));
        Self::new(a, normal)
    }

    /// Intersect with `ray`, returning at most one hit.
    pub fn hit(&self, ray: &Ray, max_distance: f64) -> Option<Hit> {
        plane_hit(&self.origin, &self.normal, ray, max_distance)
    }
}

/// Ray-plane intersection shared by [`Plane`], polygons, and cylinder
/// caps.
///
/// A ray parallel to the plane (including one lying in it) misses, as
/// does a ray whose origin is on the plane.
pub(crate) fn plane_hit(
    origin: &Point3,
    normal: &Dir3,
    ray: &Ray,
    max_distance: f64,
) -> Option<Hit> {
    let denom = align_zero(normal.dot(&ray.direction));
    if denom == 0.0 {
        return None;
    }
    let t = normal.dot(&(origin - ray.origin)) / denom;
    let t = valid_t(t, max_distance)?;
    Some(Hit { t, point: ray.at(t) })
}
