//! Deterministic soft-shadow beam sampling.

use lucent_math::{Point3, Vec3};

/// Golden angle in radians, `pi * (3 - sqrt(5))`.
const GOLDEN_ANGLE: f64 = 2.399963229728653;

/// Generates the shadow-ray directions toward a disk-shaped emitter.
///
/// Sample positions follow a golden-angle spiral over the disk, so the
/// directions are a pure function of the sample index: no random state,
/// identical results across runs and across render threads.
#[derive(Debug, Clone, Copy)]
pub struct BeamSampler {
    samples: usize,
}

impl BeamSampler {
    /// Create a sampler emitting `samples` directions per beam (at
    /// least one).
    pub fn new(samples: usize) -> Self {
        Self {
            samples: samples.max(1),
        }
    }

    /// Number of directions per beam.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Directions from `point` toward sample positions on a disk of
    /// `radius`, centered `distance` away along `to_light` and oriented
    /// perpendicular to it. The returned vectors are not normalized.
    ///
    /// A zero radius collapses the beam to the single nominal direction.
    pub fn beam(&self, point: &Point3, distance: f64, radius: f64, to_light: Vec3) -> Vec<Vec3> {
        if radius == 0.0 || self.samples == 1 {
            return vec![to_light];
        }
        let axis = to_light.normalize();
        let (u, w) = disk_basis(&axis);
        let center = point + axis * distance;
        (0..self.samples)
            .map(|i| {
                let r = radius * ((i as f64 + 0.5) / self.samples as f64).sqrt();
                let theta = i as f64 * GOLDEN_ANGLE;
                let target = center + u * (r * theta.cos()) + w * (r * theta.sin());
                target - point
            })
            .collect()
    }
}

impl Default for BeamSampler {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Two unit vectors spanning the plane perpendicular to `axis`.
fn disk_basis(axis: &Vec3) -> (Vec3, Vec3) {
    // Cross against the coordinate axis least aligned with `axis`.
    let helper = if axis.x.abs() <= axis.y.abs() && axis.x.abs() <= axis.z.abs() {
        Vec3::x()
    } else if axis.y.abs() <= axis.z.abs() {
        Vec3::y()
    } else {
        Vec3::z()
    };
    let u = axis.cross(&helper).normalize();
    let w = axis.cross(&u);
    (u, w)
}
