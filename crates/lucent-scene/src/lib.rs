#![warn(missing_docs)]

//! Scene assembly for the lucent ray tracer.
//!
//! A [`Scene`] owns the geometry ([`Group`]), the light list, a flat
//! ambient term, and the background color returned by rays that escape
//! the scene.

mod lights;

pub use lights::Light;

use lucent_geometry::{Group, Shape};
use lucent_math::Color;

/// A complete renderable scene.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// All scene geometry.
    pub geometry: Group,
    /// Light sources.
    pub lights: Vec<Light>,
    /// Ambient illumination, already scaled by its coefficient.
    pub ambient: Color,
    /// Color of rays that hit nothing.
    pub background: Color,
}

impl Scene {
    /// Create an empty scene with black ambient and background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ambient illumination.
    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Add a shape to the scene geometry.
    pub fn add_shape(&mut self, shape: Shape) {
        self.geometry.add(shape);
    }

    /// Add a light source.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucent_geometry::Sphere;
    use lucent_math::{Dir3, Point3, Vec3};

    #[test]
    fn test_assembly() {
        let mut scene = Scene::new()
            .with_ambient(Color::splat(0.1))
            .with_background(Color::new(0.2, 0.3, 0.4));
        scene.add_shape(Shape::new(Sphere::new(Point3::origin(), 1.0)));
        scene.add_light(Light::directional(
            Color::WHITE,
            Dir3::new_normalize(-Vec3::z()),
        ));
        assert_eq!(scene.geometry.len(), 1);
        assert_eq!(scene.lights.len(), 1);
        assert_eq!(scene.ambient, Color::splat(0.1));
    }
}
