//! Flat shape container.

use std::sync::Arc;

use crate::shape::GeoPoint;
use crate::{Aabb, Ray, Shape};

/// An unordered collection of shapes queried as one unit.
///
/// Groups compose by flattening: extending a group with another group's
/// shapes is equivalent to nesting, so no hierarchy is kept.
#[derive(Debug, Clone, Default)]
pub struct Group {
    shapes: Vec<Arc<Shape>>,
}

impl Group {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape, taking ownership.
    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(Arc::new(shape));
    }

    /// Add an already-shared shape.
    pub fn add_shared(&mut self, shape: Arc<Shape>) {
        self.shapes.push(shape);
    }

    /// Add every shape of an iterator of shared shapes.
    pub fn extend_shared(&mut self, shapes: impl IntoIterator<Item = Arc<Shape>>) {
        self.shapes.extend(shapes);
    }

    /// The shapes in insertion order.
    pub fn shapes(&self) -> &[Arc<Shape>] {
        &self.shapes
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the group holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// All intersections of `ray` with the group's shapes, in no
    /// particular order, restricted to `max_distance`.
    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint> {
        self.shapes
            .iter()
            .flat_map(|s| GeoPoint::intersect(s, ray, max_distance))
            .collect()
    }

    /// The union of member bounding boxes; `None` when the group is
    /// empty or any member is unbounded.
    pub fn bounding_box(&self) -> Option<Aabb> {
        if self.shapes.is_empty() {
            return None;
        }
        let mut aabb = Aabb::empty();
        for shape in &self.shapes {
            aabb.include(&shape.bounding_box()?);
        }
        Some(aabb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Plane, Sphere, Triangle};
    use lucent_math::{Point3, Vec3};

    fn sample_group() -> Group {
        let mut group = Group::new();
        group.add(Shape::new(Sphere::new(Point3::new(5.0, 0.0, 0.0), 1.0)));
        group.add(Shape::new(
            Plane::new(Point3::new(0.0, 0.0, 3.0), Vec3::z()).unwrap(),
        ));
        group.add(Shape::new(
            Triangle::new(
                Point3::new(-1.0, -1.0, 2.0),
                Point3::new(1.0, -1.0, 2.0),
                Point3::new(0.0, 1.0, 2.0),
            )
            .unwrap(),
        ));
        group
    }

    #[test]
    fn test_empty_group() {
        let group = Group::new();
        let ray = Ray::new(Point3::origin(), Vec3::z());
        assert!(group.intersect(&ray, f64::INFINITY).is_empty());
        assert!(group.bounding_box().is_none());
    }

    #[test]
    fn test_intersect_collects_across_shapes() {
        let group = sample_group();
        // Up the z axis: misses the sphere, crosses the triangle and
        // the plane.
        let ray = Ray::new(Point3::new(0.0, 0.0, -1.0), Vec3::z());
        let hits = group.intersect(&ray, f64::INFINITY);
        assert_eq!(hits.len(), 2);
        // A ray that hits nothing.
        let miss = Ray::new(Point3::new(10.0, 10.0, 0.0), -Vec3::z());
        assert!(group.intersect(&miss, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_max_distance_limits_hits() {
        let group = sample_group();
        let ray = Ray::new(Point3::new(0.0, 0.0, -1.0), Vec3::z());
        assert_eq!(group.intersect(&ray, 3.5).len(), 1);
        assert!(group.intersect(&ray, 1.0).is_empty());
    }

    #[test]
    fn test_flattening_equals_nesting() {
        let inner = sample_group();
        let mut outer = Group::new();
        outer.add(Shape::new(Sphere::new(Point3::new(0.0, 5.0, 0.0), 1.0)));
        outer.extend_shared(inner.shapes().iter().cloned());
        assert_eq!(outer.len(), 4);
        let ray = Ray::new(Point3::new(0.0, 0.0, -1.0), Vec3::z());
        assert_eq!(
            outer.intersect(&ray, f64::INFINITY).len(),
            inner.intersect(&ray, f64::INFINITY).len()
        );
    }

    #[test]
    fn test_bounding_box_union_and_unbounded() {
        let mut bounded = Group::new();
        bounded.add(Shape::new(Sphere::new(Point3::origin(), 1.0)));
        bounded.add(Shape::new(Sphere::new(Point3::new(4.0, 0.0, 0.0), 1.0)));
        let aabb = bounded.bounding_box().unwrap();
        assert_eq!(aabb.min, Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Point3::new(5.0, 1.0, 1.0));
        // Any unbounded member poisons the union.
        assert!(sample_group().bounding_box().is_none());
    }
}
