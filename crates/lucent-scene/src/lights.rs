//! Light sources.

use lucent_math::{Color, Dir3, Point3};

/// A light source.
///
/// Point and spot lights attenuate with distance through the standard
/// `1 / (kc + kl d + kq d^2)` profile and may carry a nonzero `radius`,
/// which turns them into disk emitters for soft shadows. Directional
/// lights sit at infinity and never attenuate.
#[derive(Debug, Clone)]
pub enum Light {
    /// Parallel light from a fixed direction, infinitely far away.
    Directional {
        /// Emitted color.
        intensity: Color,
        /// Direction the light travels (toward the scene).
        direction: Dir3,
    },
    /// Omnidirectional light at a position.
    Point {
        /// Emitted color before attenuation.
        intensity: Color,
        /// Light position.
        position: Point3,
        /// Constant attenuation coefficient.
        kc: f64,
        /// Linear attenuation coefficient.
        kl: f64,
        /// Quadratic attenuation coefficient.
        kq: f64,
        /// Emitter disk radius; `0.0` keeps shadows hard.
        radius: f64,
    },
    /// Point light focused along a direction.
    Spot {
        /// Emitted color before attenuation.
        intensity: Color,
        /// Light position.
        position: Point3,
        /// Beam direction.
        direction: Dir3,
        /// Constant attenuation coefficient.
        kc: f64,
        /// Linear attenuation coefficient.
        kl: f64,
        /// Quadratic attenuation coefficient.
        kq: f64,
        /// Emitter disk radius; `0.0` keeps shadows hard.
        radius: f64,
    },
}

impl Light {
    /// A directional light.
    pub fn directional(intensity: Color, direction: Dir3) -> Self {
        Light::Directional {
            intensity,
            direction,
        }
    }

    /// A point light with default attenuation (none beyond constant 1).
    pub fn point(intensity: Color, position: Point3) -> Self {
        Light::Point {
            intensity,
            position,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
            radius: 0.0,
        }
    }

    /// A spot light with default attenuation.
    pub fn spot(intensity: Color, position: Point3, direction: Dir3) -> Self {
        Light::Spot {
            intensity,
            position,
            direction,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
            radius: 0.0,
        }
    }

    /// Set the attenuation coefficients (no-op for directional lights).
    pub fn with_attenuation(mut self, new_kc: f64, new_kl: f64, new_kq: f64) -> Self {
        match &mut self {
            Light::Directional { .. } => {}
            Light::Point { kc, kl, kq, .. } | Light::Spot { kc, kl, kq, .. } => {
                *kc = new_kc;
                *kl = new_kl;
                *kq = new_kq;
            }
        }
        self
    }

    /// Set the emitter disk radius (no-op for directional lights).
    pub fn with_radius(mut self, new_radius: f64) -> Self {
        match &mut self {
            Light::Directional { .. } => {}
            Light::Point { radius, .. } | Light::Spot { radius, .. } => *radius = new_radius,
        }
        self
    }

    /// Unit direction from the light toward `p`.
    pub fn direction_to(&self, p: &Point3) -> Dir3 {
        match self {
            Light::Directional { direction, .. } => *direction,
            Light::Point { position, .. } | Light::Spot { position, .. } => {
                Dir3::new_normalize(p - position)
            }
        }
    }

    /// Light color arriving at `p`, after attenuation and (for spots)
    /// the beam falloff.
    pub fn intensity_at(&self, p: &Point3) -> Color {
        match self {
            Light::Directional { intensity, .. } => *intensity,
            Light::Point {
                intensity,
                position,
                kc,
                kl,
                kq,
                ..
            } => {
                let d = (p - position).norm();
                *intensity * (1.0 / (kc + kl * d + kq * d * d))
            }
            Light::Spot {
                intensity,
                position,
                direction,
                kc,
                kl,
                kq,
                ..
            } => {
                let d = (p - position).norm();
                let beam = direction.dot(&self.direction_to(p)).max(0.0);
                *intensity * (beam / (kc + kl * d + kq * d * d))
            }
        }
    }

    /// Distance from the light to `p`; infinite for directional lights.
    pub fn distance_to(&self, p: &Point3) -> f64 {
        match self {
            Light::Directional { .. } => f64::INFINITY,
            Light::Point { position, .. } | Light::Spot { position, .. } => (p - position).norm(),
        }
    }

    /// Emitter disk radius; directional lights report zero.
    pub fn radius(&self) -> f64 {
        match self {
            Light::Directional { .. } => 0.0,
            Light::Point { radius, .. } | Light::Spot { radius, .. } => *radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucent_math::Vec3;

    #[test]
    fn test_directional_is_uniform() {
        let light = Light::directional(Color::splat(0.5), Dir3::new_normalize(-Vec3::z()));
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(100.0, -30.0, 7.0);
        assert_eq!(light.intensity_at(&a), light.intensity_at(&b));
        assert_eq!(light.direction_to(&a), light.direction_to(&b));
        assert_eq!(light.distance_to(&a), f64::INFINITY);
        assert_eq!(light.radius(), 0.0);
    }

    #[test]
    fn test_point_attenuation() {
        let light = Light::point(Color::splat(1.0), Point3::origin()).with_attenuation(1.0, 0.5, 0.25);
        let p = Point3::new(2.0, 0.0, 0.0);
        // 1 / (1 + 0.5 * 2 + 0.25 * 4) = 1 / 3.
        let i = light.intensity_at(&p);
        assert!((i.r - 1.0 / 3.0).abs() < 1e-10);
        assert!((light.distance_to(&p) - 2.0).abs() < 1e-10);
        let l = light.direction_to(&p);
        assert!((l.as_ref() - Vec3::x()).norm() < 1e-10);
    }

    #[test]
    fn test_spot_beam_falloff() {
        let down = Dir3::new_normalize(-Vec3::z());
        let light = Light::spot(Color::splat(1.0), Point3::new(0.0, 0.0, 1.0), down);
        // Straight below: full beam.
        let below = light.intensity_at(&Point3::new(0.0, 0.0, 0.0));
        assert!((below.r - 1.0).abs() < 1e-10);
        // At 45 degrees: cos scaling, 1/sqrt(2).
        let oblique = light.intensity_at(&Point3::new(1.0, 0.0, 0.0));
        assert!((oblique.r - (0.5f64).sqrt()).abs() < 1e-10);
        // Behind the beam: clamped to zero.
        let behind = light.intensity_at(&Point3::new(0.0, 0.0, 2.0));
        assert_eq!(behind, Color::BLACK);
    }

    #[test]
    fn test_radius_builder() {
        let light = Light::point(Color::WHITE, Point3::origin()).with_radius(15.0);
        assert_eq!(light.radius(), 15.0);
        let dir = Light::directional(Color::WHITE, Dir3::new_normalize(Vec3::x())).with_radius(15.0);
        assert_eq!(dir.radius(), 0.0);
    }
}
