//! Scene shapes: a surface paired with emission and material.

use std::sync::Arc;

use lucent_math::{Color, Dir3, Point3};

use crate::surface::Surface;
use crate::{Aabb, Material, Ray};

/// A renderable shape: geometry plus shading attributes.
#[derive(Debug, Clone)]
pub struct Shape {
    /// The underlying surface.
    pub surface: Surface,
    /// Self-emitted color.
    pub emission: Color,
    /// Shading coefficients.
    pub material: Material,
}

impl Shape {
    /// Wrap a surface with default (black) emission and material.
    pub fn new(surface: impl Into<Surface>) -> Self {
        Self {
            surface: surface.into(),
            emission: Color::BLACK,
            material: Material::default(),
        }
    }

    /// Set the emission color.
    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    /// Set the material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Unit surface normal at a point on the shape.
    pub fn normal_at(&self, p: &Point3) -> Dir3 {
        self.surface.normal_at(p)
    }

    /// Bounding box, `None` for unbounded surfaces.
    pub fn bounding_box(&self) -> Option<Aabb> {
        self.surface.bounding_box()
    }
}

/// An intersection annotated with the shape it lies on.
///
/// The shape is held by `Arc` so intersection records stay cheap to
/// produce while the scene retains ownership of the geometry.
#[derive(Debug, Clone)]
pub struct GeoPoint {
    /// The shape that was hit.
    pub shape: Arc<Shape>,
    /// The intersection point.
    pub point: Point3,
    /// Parameter along the querying ray.
    pub t: f64,
}

impl GeoPoint {
    /// Intersect a shared shape with `ray`, annotating each hit.
    pub fn intersect(shape: &Arc<Shape>, ray: &Ray, max_distance: f64) -> Vec<GeoPoint> {
        shape
            .surface
            .hits(ray, max_distance)
            .into_iter()
            .map(|h| GeoPoint {
                shape: Arc::clone(shape),
                point: h.point,
                t: h.t,
            })
            .collect()
    }
}

impl PartialEq for GeoPoint {
    /// Same shape instance (pointer identity) and same point; the ray
    /// parameter is derived data and does not take part.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shape, &other.shape) && self.point == other.point
    }
}

/// The intersection nearest to the ray origin, by parameter.
pub fn closest_hit(hits: Vec<GeoPoint>) -> Option<GeoPoint> {
    hits.into_iter()
        .min_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal))
}
