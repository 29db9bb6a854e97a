//! Surface material coefficients.

use lucent_math::Color;

/// Per-shape shading coefficients.
///
/// All attenuation triples default to black (no contribution), so a
/// default material renders as pure emission/ambient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse attenuation.
    pub kd: Color,
    /// Specular attenuation.
    pub ks: Color,
    /// Reflective attenuation (mirror bounce).
    pub kr: Color,
    /// Transmissive attenuation (refraction and shadow transparency).
    pub kt: Color,
    /// Specular shininess exponent.
    pub shininess: i32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kd: Color::BLACK,
            ks: Color::BLACK,
            kr: Color::BLACK,
            kt: Color::BLACK,
            shininess: 0,
        }
    }
}

impl Material {
    /// Set the diffuse attenuation.
    pub fn with_kd(mut self, kd: Color) -> Self {
        self.kd = kd;
        self
    }

    /// Set the specular attenuation.
    pub fn with_ks(mut self, ks: Color) -> Self {
        self.ks = ks;
        self
    }

    /// Set the reflective attenuation.
    pub fn with_kr(mut self, kr: Color) -> Self {
        self.kr = kr;
        self
    }

    /// Set the transmissive attenuation.
    pub fn with_kt(mut self, kt: Color) -> Self {
        self.kt = kt;
        self
    }

    /// Set the shininess exponent.
    pub fn with_shininess(mut self, shininess: i32) -> Self {
        self.shininess = shininess;
        self
    }
}
