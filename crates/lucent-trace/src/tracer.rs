//! Recursive Whitted-style illumination.

use lucent_geometry::{closest_hit, GeoPoint, Material, Ray};
use lucent_math::{align_zero, Color, Dir3, Vec3};
use lucent_scene::{Light, Scene};

use crate::error::Result;
use crate::grid::UniformGrid;
use crate::sampler::BeamSampler;

/// Maximum recursion depth for reflection and refraction.
const MAX_LEVEL: usize = 10;

/// Attenuation threshold below which a contribution is dropped and the
/// recursion stops.
const MIN_K: f64 = 0.001;

/// The illumination engine: shades grid- or scene-intersection results
/// with local (diffuse, specular, shadow) and global (reflection,
/// refraction) effects.
///
/// All state is read-only once built, so one tracer can shade pixels
/// from many threads concurrently.
pub struct Tracer<'s> {
    scene: &'s Scene,
    grid: Option<UniformGrid>,
    sampler: Option<BeamSampler>,
}

impl<'s> Tracer<'s> {
    /// A tracer that intersects the flat scene geometry directly.
    pub fn new(scene: &'s Scene) -> Self {
        Self {
            scene,
            grid: None,
            sampler: None,
        }
    }

    /// A tracer that accelerates all intersection queries (primary,
    /// secondary, and shadow rays) through a uniform grid.
    ///
    /// Fails when the scene contains unbounded geometry.
    pub fn with_grid(scene: &'s Scene) -> Result<Self> {
        Ok(Self {
            scene,
            grid: Some(UniformGrid::build(&scene.geometry)?),
            sampler: None,
        })
    }

    /// Enable soft shadows for lights with a nonzero emitter radius.
    pub fn with_soft_shadows(mut self, sampler: BeamSampler) -> Self {
        self.sampler = Some(sampler);
        self
    }

    /// Trace a ray to its final color.
    pub fn trace(&self, ray: &Ray) -> Color {
        match self.closest_intersection(ray) {
            None => self.scene.background,
            Some(gp) => self.shade(&gp, ray),
        }
    }

    fn closest_intersection(&self, ray: &Ray) -> Option<GeoPoint> {
        match &self.grid {
            Some(grid) => grid.traverse(ray),
            None => closest_hit(self.scene.geometry.intersect(ray, f64::INFINITY)),
        }
    }

    fn shade(&self, gp: &GeoPoint, ray: &Ray) -> Color {
        self.calc_color(gp, ray, MAX_LEVEL, Color::WHITE) + self.scene.ambient
    }

    fn calc_color(&self, gp: &GeoPoint, ray: &Ray, level: usize, k: Color) -> Color {
        let color = self.local_effects(gp, ray, k);
        if level == 1 {
            color
        } else {
            color + self.global_effects(gp, ray, level, k)
        }
    }

    /// Emission plus the shadow-attenuated diffuse and specular
    /// contribution of every light.
    fn local_effects(&self, gp: &GeoPoint, ray: &Ray, k: Color) -> Color {
        let n = gp.shape.normal_at(&gp.point);
        let v = ray.direction;
        let nv = align_zero(n.dot(&v));
        if nv == 0.0 {
            return Color::BLACK;
        }

        let material = &gp.shape.material;
        let mut color = gp.shape.emission;
        for light in &self.scene.lights {
            let to_light = -light.direction_to(&gp.point).into_inner();
            let beam = match (&self.sampler, light.radius()) {
                (Some(sampler), radius) if radius > 0.0 => sampler.beam(
                    &gp.point,
                    light.distance_to(&gp.point),
                    radius,
                    to_light,
                ),
                _ => vec![to_light],
            };

            let count = beam.len();
            let mut beam_color = Color::BLACK;
            for sample in beam {
                // Per-sample light-to-point direction.
                let l = -sample.normalize();
                let ln = align_zero(l.dot(&n));
                // The light must lie on the same side as the viewer.
                if ln * nv > 0.0 {
                    let ktr = self.transparency(gp, light, l, &n);
                    if !(ktr * k).lower_than(MIN_K) {
                        let il = light.intensity_at(&gp.point) * ktr;
                        beam_color += il * (diffuse(material, ln) + specular(material, &n, &l, ln, &v));
                    }
                }
            }
            color += beam_color.reduce(count);
        }
        color
    }

    /// Reflection and refraction, one recursion level down.
    fn global_effects(&self, gp: &GeoPoint, ray: &Ray, level: usize, k: Color) -> Color {
        let n = gp.shape.normal_at(&gp.point);
        let v = ray.direction.into_inner();
        let material = &gp.shape.material;
        // Refraction passes straight through; reflection mirrors v
        // about the normal. Both restart just off the surface.
        let refracted = Ray::new_offset(gp.point, v, &n);
        let reflected = Ray::new_offset(gp.point, v - n.as_ref() * (2.0 * n.dot(&ray.direction)), &n);
        self.global_effect(&refracted, material.kt, level, k)
            + self.global_effect(&reflected, material.kr, level, k)
    }

    fn global_effect(&self, ray: &Ray, kx: Color, level: usize, k: Color) -> Color {
        let kkx = kx * k;
        if kkx.lower_than(MIN_K) {
            return Color::BLACK;
        }
        match self.closest_intersection(ray) {
            None => self.scene.background,
            Some(gp) => self.calc_color(&gp, ray, level - 1, kkx) * kx,
        }
    }

    /// Accumulated transmissive attenuation of every occluder strictly
    /// between the point and the light; `WHITE` means unoccluded.
    ///
    /// With a grid, candidate occluders are restricted to the cells the
    /// shadow ray actually passes through.
    fn transparency(&self, gp: &GeoPoint, light: &Light, l: Vec3, n: &Dir3) -> Color {
        let shadow_ray = Ray::new_offset(gp.point, -l, n);
        let max_distance = light.distance_to(&gp.point);
        let occlusions = match &self.grid {
            Some(grid) => grid
                .shapes_along(&shadow_ray)
                .intersect(&shadow_ray, max_distance),
            None => self.scene.geometry.intersect(&shadow_ray, max_distance),
        };
        let mut ktr = Color::WHITE;
        for occlusion in occlusions {
            ktr = ktr * occlusion.shape.material.kt;
        }
        ktr
    }
}

fn diffuse(material: &Material, ln: f64) -> Color {
    material.kd * ln.abs()
}

fn specular(material: &Material, n: &Dir3, l: &Vec3, ln: f64, v: &Dir3) -> Color {
    let r = l - n.as_ref() * (2.0 * ln);
    let minus_vr = align_zero(-v.dot(&r));
    if minus_vr <= 0.0 {
        Color::BLACK
    } else {
        material.ks * minus_vr.powi(material.shininess)
    }
}
