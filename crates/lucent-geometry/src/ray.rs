//! Ray representation.

use lucent_math::{Dir3, Point3, Vec3};

/// Offset applied by [`Ray::new_offset`] to move a secondary ray's origin
/// off the surface it starts from, so the originating surface does not
/// re-detect itself.
pub const DELTA: f64 = 1e-3;

/// A ray in 3D space defined by origin and unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction is normalized once here; passing an already-unit
    /// vector is a no-op.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: Dir3::new_normalize(direction),
        }
    }

    /// Create a secondary ray whose origin is nudged by [`DELTA`] along
    /// `normal`, on the side the ray departs toward.
    ///
    /// Shadow, reflection, and refraction rays all start exactly on a
    /// surface; without the nudge the intersection tests would find the
    /// originating surface again at `t ~ 0`.
    pub fn new_offset(origin: Point3, direction: Vec3, normal: &Dir3) -> Self {
        let dir = Dir3::new_normalize(direction);
        let side = if dir.dot(normal) >= 0.0 { DELTA } else { -DELTA };
        Self {
            origin: origin + normal.as_ref() * side,
            direction: dir,
        }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }
}
