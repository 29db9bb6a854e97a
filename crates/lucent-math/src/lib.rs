#![warn(missing_docs)]

//! Math types for the lucent ray tracer.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! 3D rendering: points, vectors, directions, linear RGB colors, and
//! tolerance utilities.

use nalgebra::{Unit, Vector3};

mod color;

pub use color::Color;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Absolute tolerance for treating a floating-point value as zero.
pub const EPS: f64 = 1e-10;

/// Test whether `x` is zero within [`EPS`].
#[inline]
pub fn is_zero(x: f64) -> bool {
    x.abs() < EPS
}

/// Snap `x` to exactly `0.0` when it is zero within [`EPS`].
///
/// Sign tests on near-zero quantities (dot products, discriminants,
/// distances) go through this so that "grazing" cases take the zero
/// branch deterministically instead of depending on rounding noise.
#[inline]
pub fn align_zero(x: f64) -> f64 {
    if is_zero(x) {
        0.0
    } else {
        x
    }
}

/// Normalize `v`, returning `None` when `v` is (near-)zero.
///
/// The renderer's construction-time invariant is that no direction is
/// ever the zero vector; this is the checked entry point for data that
/// comes from scene assembly (vertex differences, user-supplied axes).
/// Hot paths that already hold the invariant use `Dir3::new_normalize`.
#[inline]
pub fn try_dir(v: Vec3) -> Option<Dir3> {
    Dir3::try_new(v, EPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_zero_snaps() {
        assert_eq!(align_zero(1e-12), 0.0);
        assert_eq!(align_zero(-1e-12), 0.0);
        assert_eq!(align_zero(1e-3), 1e-3);
        assert_eq!(align_zero(-2.5), -2.5);
    }

    #[test]
    fn test_try_dir_normalizes() {
        let d = try_dir(Vec3::new(3.0, 0.0, 4.0)).unwrap();
        assert!((d.norm() - 1.0).abs() < 1e-12);
        assert!((d.x - 0.6).abs() < 1e-12);
        assert!((d.z - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_try_dir_rejects_zero() {
        assert!(try_dir(Vec3::zeros()).is_none());
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0, 2.0, 3.0);
        assert!(try_dir(a - b).is_none());
    }
}
