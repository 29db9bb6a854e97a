//! Parallel per-pixel rendering and PNG output.

use std::path::Path;

use image::RgbImage;
use log::info;
use rayon::prelude::*;

use lucent_math::Color;
use lucent_trace::Tracer;

use crate::camera::Camera;
use crate::error::Result;

/// A rendered frame held as linear colors until written out.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Frame {
    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The color at `(col, row)`.
    pub fn pixel(&self, col: u32, row: u32) -> Color {
        self.pixels[(row * self.width + col) as usize]
    }

    /// Write the frame as an 8-bit PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let mut image = RgbImage::new(self.width, self.height);
        for (col, row, pixel) in image.enumerate_pixels_mut() {
            *pixel = image::Rgb(self.pixel(col, row).to_rgb8());
        }
        image.save(path)?;
        info!("wrote {}x{} png to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Trace every pixel of a `width` by `height` frame.
///
/// Pixels are independent and the tracer is read-only, so the work is
/// split across the rayon thread pool in row-major chunks. A pixel
/// whose trace produces a non-finite color falls back to `fallback`
/// without disturbing its neighbors.
pub fn render(camera: &Camera, tracer: &Tracer<'_>, width: u32, height: u32, fallback: Color) -> Frame {
    info!("rendering {}x{} frame", width, height);
    let pixels = (0..width * height)
        .into_par_iter()
        .map(|i| {
            let col = i % width;
            let row = i / width;
            let color = tracer.trace(&camera.construct_ray(width, height, col, row));
            if color.is_finite() {
                color
            } else {
                fallback
            }
        })
        .collect();
    Frame {
        width,
        height,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucent_geometry::{Material, Shape, Sphere};
    use lucent_math::{Point3, Vec3};
    use lucent_scene::{Light, Scene};

    fn scene() -> Scene {
        let mut scene = Scene::new()
            .with_ambient(Color::splat(10.0))
            .with_background(Color::new(1.0, 2.0, 3.0));
        scene.add_shape(
            Shape::new(Sphere::new(Point3::new(0.0, 0.0, -20.0), 3.0))
                .with_material(Material::default().with_kd(Color::splat(0.5))),
        );
        scene.add_light(Light::point(Color::splat(200.0), Point3::new(0.0, 0.0, 20.0)));
        scene
    }

    fn camera() -> Camera {
        Camera::builder()
            .location(Point3::origin())
            .direction(-Vec3::z(), Vec3::y())
            .plane_size(10.0, 10.0)
            .plane_distance(10.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_matches_single_traces() {
        let scene = scene();
        let tracer = Tracer::new(&scene);
        let camera = camera();
        let frame = render(&camera, &tracer, 5, 5, scene.background);
        assert_eq!(frame.width(), 5);
        assert_eq!(frame.height(), 5);
        for (col, row) in [(2, 2), (0, 0), (4, 3)] {
            let expected = tracer.trace(&camera.construct_ray(5, 5, col, row));
            assert_eq!(frame.pixel(col, row), expected);
        }
    }

    #[test]
    fn test_center_hits_sphere_and_corner_sees_background() {
        let scene = scene();
        let tracer = Tracer::new(&scene);
        let frame = render(&camera(), &tracer, 5, 5, scene.background);
        // Corner ray misses the sphere.
        assert_eq!(frame.pixel(0, 0), scene.background);
        // Center ray hits it: ambient at minimum.
        assert_ne!(frame.pixel(2, 2), scene.background);
    }
}
