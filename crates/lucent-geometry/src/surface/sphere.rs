//! Sphere.

use lucent_math::{align_zero, is_zero, Dir3, Point3, Vec3};

use crate::surface::{valid_t, Hit};
use crate::{Aabb, Ray};

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point.
    pub center: Point3,
    /// Radius.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere from center and radius.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Intersect with `ray` using the geometric quadratic, returning up
    /// to two hits nearest-first.
    pub fn hits(&self, ray: &Ray, max_distance: f64) -> Vec<Hit> {
        let u = self.center - ray.origin;
        let tm = ray.direction.dot(&u);
        let d2 = u.norm_squared() - tm * tm;
        let th2 = align_zero(self.radius * self.radius - d2);
        if th2 < 0.0 {
            return Vec::new();
        }
        if th2 == 0.0 {
            // Tangent ray: a single touch point.
            return valid_t(tm, max_distance)
                .map(|t| Hit { t, point: ray.at(t) })
                .into_iter()
                .collect();
        }
        let th = th2.sqrt();
        [tm - th, tm + th]
            .into_iter()
            .filter_map(|t| valid_t(t, max_distance))
            .map(|t| Hit { t, point: ray.at(t) })
            .collect()
    }

    /// Outward unit normal at a surface point.
    pub fn normal_at(&self, p: &Point3) -> Dir3 {
        Dir3::new_normalize(p - self.center)
    }

    /// Box circumscribing the sphere.
    pub fn bounding_box(&self) -> Aabb {
        let r = Vec3::new(self.radius, self.radius, self.radius);
        Aabb::new(self.center - r, self.center + r)
    }

    /// Whether a point lies on the surface (up to epsilon).
    pub fn contains_surface_point(&self, p: &Point3) -> bool {
        is_zero((p - self.center).norm() - self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Point3::new(1.0, 0.0, 0.0), 1.0)
    }

    #[test]
    fn test_two_hits_nearest_first() {
        let sphere = unit_sphere();
        let ray = Ray::new(Point3::new(-1.0, 0.0, 0.0), Vec3::x());
        let hits = sphere.hits(&ray, f64::INFINITY);
        assert_eq!(hits.len(), 2);
        assert!((hits[0].t - 1.0).abs() < 1e-10);
        assert!((hits[1].t - 3.0).abs() < 1e-10);
        // Through the center: both hits at distance radius.
        for h in &hits {
            assert!(sphere.contains_surface_point(&h.point));
        }
    }

    #[test]
    fn test_origin_inside_gives_one_hit() {
        let sphere = unit_sphere();
        let ray = Ray::new(Point3::new(1.5, 0.0, 0.0), Vec3::x());
        let hits = sphere.hits(&ray, f64::INFINITY);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].point - Point3::new(2.0, 0.0, 0.0)).norm() < 1e-10);
    }

    #[test]
    fn test_origin_on_surface() {
        let sphere = unit_sphere();
        // Going inward: one hit at the far side.
        let inward = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::x());
        let hits = sphere.hits(&inward, f64::INFINITY);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].t - 2.0).abs() < 1e-10);
        // Going outward: no hit.
        let outward = Ray::new(Point3::new(2.0, 0.0, 0.0), Vec3::x());
        assert!(sphere.hits(&outward, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_misses() {
        let sphere = unit_sphere();
        // Line misses entirely.
        let beside = Ray::new(Point3::new(-1.0, 2.0, 0.0), Vec3::x());
        assert!(sphere.hits(&beside, f64::INFINITY).is_empty());
        // Sphere behind the ray.
        let behind = Ray::new(Point3::new(3.0, 0.0, 0.0), Vec3::x());
        assert!(sphere.hits(&behind, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_max_distance_is_strict() {
        let sphere = unit_sphere();
        let ray = Ray::new(Point3::new(-1.0, 0.0, 0.0), Vec3::x());
        assert!(sphere.hits(&ray, 1.0).is_empty());
        assert_eq!(sphere.hits(&ray, 2.0).len(), 1);
        assert_eq!(sphere.hits(&ray, 4.0).len(), 2);
    }

    #[test]
    fn test_normal() {
        let sphere = unit_sphere();
        let n = sphere.normal_at(&Point3::new(2.0, 0.0, 0.0));
        assert!((n.as_ref() - Vec3::x()).norm() < 1e-10);
    }
}
