//! Linear RGB color type
//!
//! Linear RGB values are proportional to physical light intensity. They sit
//! between the Oklab matrices and the sRGB transfer function.

/// A color in linear sRGB color space.
///
/// Values are typically in the range 0.0..=1.0, but an out-of-gamut Oklab
/// input produces values outside it (including negative ones). Nothing here
/// clamps; see [`Srgb::clip`](super::Srgb::clip).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Returns true if every channel lies within 0.0..=1.0.
    ///
    /// Colors failing this check will be clipped, not mapped, on their way
    /// to [`Rgb8`](super::Rgb8).
    #[inline]
    pub fn in_gamut(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}
