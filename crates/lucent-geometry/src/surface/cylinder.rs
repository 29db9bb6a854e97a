//! Finite cylinder with planar caps.

use std::cmp::Ordering;

use lucent_math::{align_zero, is_zero, Dir3, Point3};

use crate::surface::plane::plane_hit;
use crate::surface::tube::tube_hits;
use crate::surface::Hit;
use crate::{Aabb, Ray};

/// A finite cylinder: a tube segment of the given height closed by two
/// circular caps.
///
/// The axis origin sits at the center of the bottom cap; the axis
/// direction points toward the top cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    /// Axis of the cylinder, anchored at the bottom cap's center.
    pub axis: Ray,
    /// Radius.
    pub radius: f64,
    /// Height along the axis.
    pub height: f64,
}

impl Cylinder {
    /// Create a cylinder from axis, radius, and height.
    pub fn new(axis: Ray, radius: f64, height: f64) -> Self {
        Self {
            axis,
            radius,
            height,
        }
    }

    /// Intersect with `ray`, returning up to two hits nearest-first.
    ///
    /// Lateral hits beyond either cap plane are discarded, and a lateral
    /// hit exactly on a cap's rim is suppressed so it cannot be counted
    /// by both the tube and the cap tests. Caps are only consulted when
    /// the lateral surface yielded fewer than two hits.
    pub fn hits(&self, ray: &Ray, max_distance: f64) -> Vec<Hit> {
        let bottom = self.axis.origin;
        let top = self.axis.at(self.height);
        let r2 = self.radius * self.radius;
        let h2 = self.height * self.height;

        let mut hits: Vec<Hit> = tube_hits(&self.axis, self.radius, ray, max_distance)
            .into_iter()
            .filter(|h| {
                let v0 = bottom - h.point;
                let v1 = top - h.point;
                if is_zero(v0.norm() - self.radius) || is_zero(v1.norm() - self.radius) {
                    return false;
                }
                // Between the cap planes iff the point is closer than
                // sqrt(r^2 + h^2) to both rims.
                align_zero(v0.norm_squared() - r2) < h2 && align_zero(v1.norm_squared() - r2) < h2
            })
            .collect();

        if hits.len() < 2 {
            for center in [bottom, top] {
                if let Some(hit) = plane_hit(&center, &self.axis.direction, ray, max_distance) {
                    if align_zero((hit.point - center).norm() - self.radius) < 0.0 {
                        hits.push(hit);
                    }
                }
            }
            hits.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(Ordering::Equal));
            hits.truncate(2);
        }
        hits
    }

    /// Outward unit normal at a surface point: the axis direction (or
    /// its negation) on the caps, the radial direction on the side.
    pub fn normal_at(&self, p: &Point3) -> Dir3 {
        let w = p - self.axis.origin;
        let t = self.axis.direction.dot(&w);
        if is_zero(t) {
            return -self.axis.direction;
        }
        if is_zero(t - self.height) {
            return self.axis.direction;
        }
        Dir3::new_normalize(w - t * self.axis.direction.as_ref())
    }

    /// Box circumscribing both cap spheres.
    pub fn bounding_box(&self) -> Aabb {
        let bottom = self.axis.origin;
        let top = self.axis.at(self.height);
        let min = Point3::new(
            bottom.x.min(top.x) - self.radius,
            bottom.y.min(top.y) - self.radius,
            bottom.z.min(top.z) - self.radius,
        );
        let max = Point3::new(
            bottom.x.max(top.x) + self.radius,
            bottom.y.max(top.y) + self.radius,
            bottom.z.max(top.z) + self.radius,
        );
        Aabb::new(min, max)
    }
}
