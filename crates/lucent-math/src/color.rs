//! Linear RGB color arithmetic.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// A linear RGB color with unbounded f64 channels.
///
/// The same type doubles as an attenuation triple (kD, kS, kR, kT and
/// the accumulated recursion factor `k`): light intensities and
/// attenuations combine with the same componentwise operations, and
/// values are only clamped at image-output time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color {
    /// Black (all channels zero). Also the zero attenuation.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    /// White at unit intensity. Also the identity attenuation.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Create a color from its channels.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a grey color with all channels equal to `v`.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Uniform scale of every channel.
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.r * s, self.g * s, self.b * s)
    }

    /// Average over `n` accumulated samples.
    #[inline]
    pub fn reduce(self, n: usize) -> Self {
        self.scale(1.0 / n as f64)
    }

    /// True when every channel is strictly below `s`.
    ///
    /// Used for the attenuation-threshold recursion cutoff.
    #[inline]
    pub fn lower_than(self, s: f64) -> bool {
        self.r < s && self.g < s && self.b < s
    }

    /// True when no channel is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Clamp each channel to `[0, 255]` and round to 8-bit.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            self.r.clamp(0.0, 255.0).round() as u8,
            self.g.clamp(0.0, 255.0).round() as u8,
            self.b.clamp(0.0, 255.0).round() as u8,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

/// Componentwise product: attenuation applied to an intensity, or two
/// attenuations composed.
impl Mul for Color {
    type Output = Color;
    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;
    fn mul(self, rhs: f64) -> Color {
        self.scale(rhs)
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Color {
        iter.fold(Color::BLACK, |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_componentwise_product() {
        let intensity = Color::new(100.0, 50.0, 10.0);
        let ktr = Color::new(0.5, 0.0, 1.0);
        assert_eq!(intensity * ktr, Color::new(50.0, 0.0, 10.0));
    }

    #[test]
    fn test_lower_than_requires_all_channels() {
        assert!(Color::splat(0.0005).lower_than(0.001));
        assert!(!Color::new(0.0005, 0.01, 0.0005).lower_than(0.001));
    }

    #[test]
    fn test_reduce_averages() {
        let sum = Color::new(2.0, 4.0, 8.0);
        assert_eq!(sum.reduce(4), Color::new(0.5, 1.0, 2.0));
    }

    #[test]
    fn test_to_rgb8_clamps() {
        assert_eq!(Color::new(-5.0, 300.0, 127.6).to_rgb8(), [0, 255, 128]);
    }
}
