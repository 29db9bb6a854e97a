//! Convex planar polygon.

use lucent_math::{align_zero, is_zero, try_dir, Dir3, Point3};

use crate::error::{GeometryError, Result};
use crate::surface::plane::plane_hit;
use crate::surface::{Hit, Plane};
use crate::{Aabb, Ray};

/// A convex polygon with at least three vertices, all coplanar.
///
/// Vertex order (either winding) fixes the support plane's normal at
/// construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3>,
    plane: Plane,
}

impl Polygon {
    /// Create a polygon from an ordered vertex list.
    ///
    /// Rejects lists with fewer than three vertices, non-coplanar
    /// vertices, consecutive collinear or coincident vertices, and
    /// concave orderings.
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::InvalidPolygon("fewer than three vertices"));
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])
            .map_err(|_| GeometryError::InvalidPolygon("leading vertices are collinear"))?;
        if vertices.len() == 3 {
            return Ok(Self { vertices, plane });
        }

        let n = plane.normal;
        let last = vertices.len() - 1;
        // Walk every corner and require a consistent turn direction.
        let mut edge1 = vertices[last] - vertices[last - 1];
        let mut edge2 = vertices[0] - vertices[last];
        let first = align_zero(edge1.cross(&edge2).dot(&n));
        if first == 0.0 {
            return Err(GeometryError::InvalidPolygon(
                "collinear or coincident consecutive vertices",
            ));
        }
        let positive = first > 0.0;
        for i in 1..vertices.len() {
            if !is_zero((vertices[i] - vertices[0]).dot(&n)) {
                return Err(GeometryError::InvalidPolygon("vertices are not coplanar"));
            }
            edge1 = edge2;
            edge2 = vertices[i] - vertices[i - 1];
            let turn = align_zero(edge1.cross(&edge2).dot(&n));
            if turn == 0.0 {
                return Err(GeometryError::InvalidPolygon(
                    "collinear or coincident consecutive vertices",
                ));
            }
            if (turn > 0.0) != positive {
                return Err(GeometryError::InvalidPolygon("vertex order is not convex"));
            }
        }
        Ok(Self { vertices, plane })
    }

    /// The ordered vertex list.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// The support plane's unit normal.
    pub fn normal(&self) -> Dir3 {
        self.plane.normal
    }

    /// Intersect with `ray`: the support-plane hit, kept only when it
    /// falls strictly inside the polygon.
    pub fn hits(&self, ray: &Ray, max_distance: f64) -> Vec<Hit> {
        match plane_hit(&self.plane.origin, &self.plane.normal, ray, max_distance) {
            Some(hit) if convex_contains(&self.vertices, ray) => vec![hit],
            _ => Vec::new(),
        }
    }

    /// Tight box around the vertices.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(&self.vertices)
    }
}

/// Test whether a ray known to cross the support plane does so strictly
/// inside the convex hull of `vertices`.
///
/// For each edge the sign of `d . ((v_i - o) x (v_i+1 - o))` tells which
/// side of the edge the crossing lies on; all signs must agree. A zero
/// sign means the crossing lies on an edge or vertex, which counts as a
/// miss.
pub(crate) fn convex_contains(vertices: &[Point3], ray: &Ray) -> bool {
    let o = ray.origin;
    let d = ray.direction;
    let mut first = 0.0;
    for i in 0..vertices.len() {
        let v1 = vertices[i] - o;
        let v2 = vertices[(i + 1) % vertices.len()] - o;
        let edge_normal = match try_dir(v1.cross(&v2)) {
            Some(en) => en,
            // Ray origin on the edge's support line.
            None => return false,
        };
        let side = align_zero(d.dot(&edge_normal));
        if side == 0.0 {
            return false;
        }
        if i == 0 {
            first = side;
        } else if first * side < 0.0 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucent_math::Vec3;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_constructor_rejections() {
        // Too few vertices.
        assert!(Polygon::new(vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)]).is_err());
        // Not coplanar.
        assert!(Polygon::new(vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 2.0, 2.0),
        ])
        .is_err());
        // Concave ordering.
        assert!(Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(1.0, 0.5, 0.0),
        ])
        .is_err());
        // Vertex on the previous edge.
        assert!(Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ])
        .is_err());
        // Repeated vertex.
        assert!(Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ])
        .is_err());
        // Closed loop (last == first).
        assert!(Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ])
        .is_err());
    }

    #[test]
    fn test_valid_construction() {
        let square = unit_square();
        assert_eq!(square.vertices().len(), 4);
        assert!((square.normal().norm() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_hit_inside() {
        let square = unit_square();
        let ray = Ray::new(Point3::new(0.25, 0.25, -1.0), Vec3::z());
        let hits = square.hits(&ray, f64::INFINITY);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].point - Point3::new(0.25, 0.25, 0.0)).norm() < 1e-10);
    }

    #[test]
    fn test_miss_outside() {
        let square = unit_square();
        let beside = Ray::new(Point3::new(2.0, 0.5, -1.0), Vec3::z());
        assert!(square.hits(&beside, f64::INFINITY).is_empty());
        let diagonal = Ray::new(Point3::new(1.5, 1.5, -1.0), Vec3::z());
        assert!(square.hits(&diagonal, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_edge_and_vertex_hits_are_misses() {
        let square = unit_square();
        let on_edge = Ray::new(Point3::new(0.5, 0.0, -1.0), Vec3::z());
        assert!(square.hits(&on_edge, f64::INFINITY).is_empty());
        let on_vertex = Ray::new(Point3::new(1.0, 1.0, -1.0), Vec3::z());
        assert!(square.hits(&on_vertex, f64::INFINITY).is_empty());
        // On the continuation of an edge, outside the polygon.
        let on_edge_line = Ray::new(Point3::new(2.0, 0.0, -1.0), Vec3::z());
        assert!(square.hits(&on_edge_line, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_bounding_box() {
        let square = unit_square();
        let aabb = square.bounding_box();
        assert_eq!(aabb.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(aabb.max, Point3::new(1.0, 1.0, 0.0));
    }
}
