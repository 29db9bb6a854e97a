//! Infinite tube around an axis.

use lucent_math::{align_zero, is_zero, Dir3, Point3};

use crate::surface::{valid_t, Hit};
use crate::Ray;

/// An infinite circular tube around an axis ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tube {
    /// Axis (origin and direction) of the tube.
    pub axis: Ray,
    /// Radius.
    pub radius: f64,
}

impl Tube {
    /// Create a tube from its axis and radius.
    pub fn new(axis: Ray, radius: f64) -> Self {
        Self { axis, radius }
    }

    /// Intersect with `ray`, returning up to two hits nearest-first.
    pub fn hits(&self, ray: &Ray, max_distance: f64) -> Vec<Hit> {
        tube_hits(&self.axis, self.radius, ray, max_distance)
    }

    /// Outward unit normal at a surface point: the radial direction from
    /// the point's projection onto the axis.
    pub fn normal_at(&self, p: &Point3) -> Dir3 {
        let w = p - self.axis.origin;
        let t = self.axis.direction.dot(&w);
        Dir3::new_normalize(w - t * self.axis.direction.as_ref())
    }
}

/// Quadratic ray-tube intersection shared by [`Tube`] and the cylinder's
/// lateral surface.
///
/// Both the ray direction and the origin offset are projected onto the
/// plane perpendicular to the axis before solving, so an axis-parallel
/// ray (zero perpendicular direction) and a tangent ray (zero
/// discriminant) both come back empty.
pub(crate) fn tube_hits(axis: &Ray, radius: f64, ray: &Ray, max_distance: f64) -> Vec<Hit> {
    let a_dir = axis.direction.as_ref();
    let d = ray.direction.as_ref();
    let d_perp = d - d.dot(a_dir) * a_dir;
    let a = d_perp.norm_squared();
    if is_zero(a) {
        return Vec::new();
    }
    let oc = ray.origin - axis.origin;
    let oc_perp = oc - oc.dot(a_dir) * a_dir;
    let b = 2.0 * d_perp.dot(&oc_perp);
    let c = oc_perp.norm_squared() - radius * radius;
    let disc = align_zero(b * b - 4.0 * a * c);
    if disc <= 0.0 {
        return Vec::new();
    }
    let sq = disc.sqrt();
    [(-b - sq) / (2.0 * a), (-b + sq) / (2.0 * a)]
        .into_iter()
        .filter_map(|t| valid_t(t, max_distance))
        .map(|t| Hit { t, point: ray.at(t) })
        .collect()
}
