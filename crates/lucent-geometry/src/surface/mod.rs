//! Ray-surface intersection algorithms.
//!
//! Each shape of the closed set has a dedicated module with its exact
//! intersection algorithm; [`Surface`] dispatches over them by match.
//! All intersections are epsilon-aware: hits at the ray origin or at
//! (or beyond) the query's maximum distance are rejected.

mod cylinder;
mod plane;
mod polygon;
mod sphere;
mod triangle;
mod tube;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use polygon::Polygon;
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use tube::Tube;

use lucent_math::{align_zero, Dir3, Point3};

use crate::{Aabb, Ray};

/// A single ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Parameter along the ray.
    pub t: f64,
    /// 3D intersection point.
    pub point: Point3,
}

/// Accept a ray parameter only when it lies strictly between the origin
/// and `max_distance`, snapping near-zero values first.
#[inline]
pub(crate) fn valid_t(t: f64, max_distance: f64) -> Option<f64> {
    let t = align_zero(t);
    if t > 0.0 && align_zero(t - max_distance) < 0.0 {
        Some(t)
    } else {
        None
    }
}

/// The closed set of intersectable surfaces.
#[derive(Debug, Clone)]
pub enum Surface {
    /// Infinite plane.
    Plane(Plane),
    /// Triangle.
    Triangle(Triangle),
    /// Convex polygon.
    Polygon(Polygon),
    /// Sphere.
    Sphere(Sphere),
    /// Infinite tube around an axis.
    Tube(Tube),
    /// Finite cylinder with planar caps.
    Cylinder(Cylinder),
}

impl Surface {
    /// Intersect with `ray`, returning every hit strictly between the
    /// origin and `max_distance` in the shape's natural order.
    pub fn hits(&self, ray: &Ray, max_distance: f64) -> Vec<Hit> {
        match self {
            Surface::Plane(s) => s.hit(ray, max_distance).into_iter().collect(),
            Surface::Triangle(s) => s.hits(ray, max_distance),
            Surface::Polygon(s) => s.hits(ray, max_distance),
            Surface::Sphere(s) => s.hits(ray, max_distance),
            Surface::Tube(s) => s.hits(ray, max_distance),
            Surface::Cylinder(s) => s.hits(ray, max_distance),
        }
    }

    /// Unit surface normal at a point on the surface.
    ///
    /// Orientation is the surface's own (not corrected against any
    /// viewing direction).
    pub fn normal_at(&self, p: &Point3) -> Dir3 {
        match self {
            Surface::Plane(s) => s.normal,
            Surface::Triangle(s) => s.normal(),
            Surface::Polygon(s) => s.normal(),
            Surface::Sphere(s) => s.normal_at(p),
            Surface::Tube(s) => s.normal_at(p),
            Surface::Cylinder(s) => s.normal_at(p),
        }
    }

    /// Axis-aligned bounding box; `None` for surfaces of infinite extent.
    pub fn bounding_box(&self) -> Option<Aabb> {
        match self {
            Surface::Plane(_) | Surface::Tube(_) => None,
            Surface::Triangle(s) => Some(s.bounding_box()),
            Surface::Polygon(s) => Some(s.bounding_box()),
            Surface::Sphere(s) => Some(s.bounding_box()),
            Surface::Cylinder(s) => Some(s.bounding_box()),
        }
    }
}

impl From<Plane> for Surface {
    fn from(s: Plane) -> Self {
        Surface::Plane(s)
    }
}

impl From<Triangle> for Surface {
    fn from(s: Triangle) -> Self {
        Surface::Triangle(s)
    }
}

impl From<Polygon> for Surface {
    fn from(s: Polygon) -> Self {
        Surface::Polygon(s)
    }
}

impl From<Sphere> for Surface {
    fn from(s: Sphere) -> Self {
        Surface::Sphere(s)
    }
}

impl From<Tube> for Surface {
    fn from(s: Tube) -> Self {
        Surface::Tube(s)
    }
}

impl From<Cylinder> for Surface {
    fn from(s: Cylinder) -> Self {
        Surface::Cylinder(s)
    }
}
