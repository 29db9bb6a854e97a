//! Triangle.

use lucent_math::{Dir3, Point3};

use crate::error::{GeometryError, Result};
use crate::surface::plane::plane_hit;
use crate::surface::polygon::convex_contains;
use crate::surface::{Hit, Plane};
use crate::{Aabb, Ray};

/// A triangle, the three-vertex fast path of the convex polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Point3; 3],
    plane: Plane,
}

impl Triangle {
    /// Create a triangle; fails when the vertices are collinear or
    /// coincident.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Result<Self> {
        let plane = Plane::from_points(a, b, c)
            .map_err(|_| GeometryError::InvalidPolygon("triangle vertices are collinear"))?;
        Ok(Self {
            vertices: [a, b, c],
            plane,
        })
    }

    /// The three vertices.
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// The support plane's unit normal.
    pub fn normal(&self) -> Dir3 {
        self.plane.normal
    }

    /// Intersect with `ray`: the support-plane hit, kept only when it
    /// falls strictly inside the triangle.
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
