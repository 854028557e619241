//! Oklch: the polar form of Oklab, as written in CSS palettes.
//!
//! - **L** (Lightness): same as Oklab L
//! - **C** (Chroma): distance from the neutral axis
//! - **H** (Hue): angle in **degrees**
//!
//! Hue is kept exactly as written. Angles outside 0..360 are not wrapped; the
//! trigonometric functions take care of them when converting to Oklab.

use std::f64::consts::PI;

use super::linear_rgb::LinearRgb;
use super::oklab::Oklab;
use super::rgb8::Rgb8;
use super::srgb::Srgb;

/// Oklch: Lightness, Chroma, Hue (degrees).
///
/// # Components
///
/// - `l`: Lightness, nominally 0.0..=1.0, not rejected outside it
/// - `c`: Chroma, non-negative, nominally 0.0..=0.4, not clamped
/// - `h`: Hue angle in degrees, not normalized
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Chroma: distance from neutral axis (0.0 = gray)
    pub c: f64,
    /// Hue: angle in degrees
    pub h: f64,
}

impl Oklch {
    /// Create a new Oklch color. Hue is in degrees.
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Run the full pipeline: Oklab, linear sRGB, gamma encoding, clip,
    /// quantize.
    ///
    /// # Example
    ///
    /// ```
    /// use oklch_srgb::{Oklch, Rgb8};
    ///
    /// assert_eq!(Oklch::new(1.0, 0.0, 0.0).to_rgb8(), Rgb8::new(255, 255, 255));
    /// assert_eq!(Oklch::new(0.0, 0.0, 0.0).to_rgb8(), Rgb8::new(0, 0, 0));
    /// ```
    pub fn to_rgb8(self) -> Rgb8 {
        let linear = LinearRgb::from(Oklab::from(self));
        Srgb::from(linear).clip().quantize()
    }
}

impl From<Oklch> for Oklab {
    /// Convert from Oklch to Oklab (polar to Cartesian).
    fn from(lch: Oklch) -> Self {
        // Multiply before dividing; `f64::to_radians` rounds differently
        let h = lch.h * PI / 180.0;
        Self::new(lch.l, lch.c * h.cos(), lch.c * h.sin())
    }
}
