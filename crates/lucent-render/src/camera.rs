//! Pinhole camera and per-pixel ray construction.

use lucent_geometry::Ray;
use lucent_math::{is_zero, try_dir, Dir3, Point3, Vec3};

use crate::error::{RenderError, Result};

/// A validated pinhole camera: position, orthonormal orientation, and a
/// view plane at a fixed distance.
///
/// Built through [`CameraBuilder`]; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Point3,
    v_up: Dir3,
    v_right: Dir3,
    plane_width: f64,
    plane_height: f64,
    /// Center of the view plane, `position + v_to * distance`.
    plane_center: Point3,
}

impl Camera {
    /// Start configuring a camera.
    pub fn builder() -> CameraBuilder {
        CameraBuilder::default()
    }

    /// The ray through pixel `(col, row)` of an `nx` by `ny` image.
    ///
    /// Pixel (0, 0) is the top-left corner; rays pass through pixel
    /// centers.
    pub fn construct_ray(&self, nx: u32, ny: u32, col: u32, row: u32) -> Ray {
        let ry = self.plane_height / ny as f64;
        let rx = self.plane_width / nx as f64;
        let y_i = -(row as f64 - (ny as f64 - 1.0) / 2.0) * ry;
        let x_j = (col as f64 - (nx as f64 - 1.0) / 2.0) * rx;

        let mut pij = self.plane_center;
        if !is_zero(x_j) {
            pij += self.v_right.as_ref() * x_j;
        }
        if !is_zero(y_i) {
            pij += self.v_up.as_ref() * y_i;
        }
        Ray::new(self.position, pij - self.position)
    }
}

/// Configuration for a [`Camera`], checked when built.
#[derive(Debug, Clone, Default)]
pub struct CameraBuilder {
    position: Option<Point3>,
    direction: Option<(Vec3, Vec3)>,
    plane_size: Option<(f64, f64)>,
    plane_distance: Option<f64>,
}

impl CameraBuilder {
    /// Set the camera position.
    pub fn location(mut self, position: Point3) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the viewing direction and the up vector; they must be
    /// orthogonal.
    pub fn direction(mut self, to: Vec3, up: Vec3) -> Self {
        self.direction = Some((to, up));
        self
    }

    /// Set the view-plane width and height.
    pub fn plane_size(mut self, width: f64, height: f64) -> Self {
        self.plane_size = Some((width, height));
        self
    }

    /// Set the distance from the camera to the view plane.
    pub fn plane_distance(mut self, distance: f64) -> Self {
        self.plane_distance = Some(distance);
        self
    }

    /// Validate the configuration and produce a camera.
    pub fn build(self) -> Result<Camera> {
        let position = self
            .position
            .ok_or(RenderError::MissingParameter("location"))?;
        let (to, up) = self
            .direction
            .ok_or(RenderError::MissingParameter("direction"))?;
        let (width, height) = self
            .plane_size
            .ok_or(RenderError::MissingParameter("view-plane size"))?;
        let distance = self
            .plane_distance
            .ok_or(RenderError::MissingParameter("view-plane distance"))?;

        if !is_zero(to.dot(&up)) {
            return Err(RenderError::InvalidParameter(
                "viewing and up directions must be orthogonal",
            ));
        }
        let v_to = try_dir(to).ok_or(RenderError::InvalidParameter(
            "viewing direction must be nonzero",
        ))?;
        let v_up = try_dir(up).ok_or(RenderError::InvalidParameter(
            "up direction must be nonzero",
        ))?;
        let v_right = try_dir(v_to.cross(&v_up)).ok_or(RenderError::InvalidParameter(
            "viewing and up directions must not be parallel",
        ))?;
        if width <= 0.0 || height <= 0.0 {
            return Err(RenderError::InvalidParameter(
                "view-plane size must be positive",
            ));
        }
        if distance <= 0.0 {
            return Err(RenderError::InvalidParameter(
                "view-plane distance must be positive",
            ));
        }

        Ok(Camera {
            position,
            v_up,
            v_right,
            plane_width: width,
            plane_height: height,
            plane_center: position + v_to.as_ref() * distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::builder()
            .location(Point3::origin())
            .direction(-Vec3::z(), Vec3::y())
            .plane_size(6.0, 6.0)
            .plane_distance(10.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_rejects_missing_fields() {
        assert!(matches!(
            Camera::builder().build(),
            Err(RenderError::MissingParameter(_))
        ));
        assert!(matches!(
            Camera::builder()
                .location(Point3::origin())
                .direction(-Vec3::z(), Vec3::y())
                .plane_size(4.0, 4.0)
                .build(),
            Err(RenderError::MissingParameter(_))
        ));
    }

    #[test]
    fn test_builder_rejects_invalid_fields() {
        let base = || {
            Camera::builder()
                .location(Point3::origin())
                .plane_size(4.0, 4.0)
                .plane_distance(1.0)
        };
        // Non-orthogonal direction pair.
        assert!(matches!(
            base().direction(-Vec3::z(), Vec3::new(0.0, 1.0, 0.5)).build(),
            Err(RenderError::InvalidParameter(_))
        ));
        // Degenerate plane.
        assert!(matches!(
            Camera::builder()
                .location(Point3::origin())
                .direction(-Vec3::z(), Vec3::y())
                .plane_size(0.0, 4.0)
                .plane_distance(1.0)
                .build(),
            Err(RenderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_center_pixel_ray_goes_straight_ahead() {
        let ray = camera().construct_ray(3, 3, 1, 1);
        assert_eq!(ray.origin, Point3::origin());
        assert!((ray.direction.as_ref() + Vec3::z()).norm() < 1e-10);
    }

    #[test]
    fn test_corner_pixel_ray() {
        // 3x3 grid over a 6x6 plane: pixel centers sit 2 apart, so the
        // top-left center is at (-2, 2, -10).
        let ray = camera().construct_ray(3, 3, 0, 0);
        let expected = Vec3::new(-2.0, 2.0, -10.0).normalize();
        assert!((ray.direction.as_ref() - expected).norm() < 1e-10);
    }

    #[test]
    fn test_rays_cover_the_plane_symmetrically() {
        let cam = camera();
        let left = cam.construct_ray(3, 3, 0, 1);
        let right = cam.construct_ray(3, 3, 2, 1);
        assert!((left.direction.x + right.direction.x).abs() < 1e-10);
        assert_eq!(left.direction.y, right.direction.y);
    }
}
