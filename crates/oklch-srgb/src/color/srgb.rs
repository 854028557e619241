//! Gamma-encoded sRGB color type
//!
//! sRGB applies the IEC 61966-2-1 transfer function to linear light values.
//! This is the last floating-point stage of the pipeline: after encoding,
//! values are clipped to the gamut and quantized to [`Rgb8`].

use super::linear_rgb::LinearRgb;
use super::rgb8::Rgb8;

/// Linear values at or below this use the linear segment of the curve.
const LINEAR_SEGMENT_THRESHOLD: f64 = 0.0031308;

/// Encode a single linear channel with the piecewise sRGB transfer function.
///
/// - `v <= 0.0031308`: `12.92 * v`
/// - otherwise: `1.055 * v^(1/2.4) - 0.055`
///
/// Negative inputs take the linear segment, so the power branch never sees a
/// negative base. NaN fails the threshold comparison, reaches the power
/// branch and comes out as NaN; it is not intercepted here.
///
/// # Example
///
/// ```
/// use oklch_srgb::color::linear_to_srgb;
///
/// assert_eq!(linear_to_srgb(0.0), 0.0);
/// assert!((linear_to_srgb(0.5) - 0.735356).abs() < 1e-6);
/// ```
#[inline]
pub fn linear_to_srgb(v: f64) -> f64 {
    if v <= LINEAR_SEGMENT_THRESHOLD {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// A color in gamma-encoded sRGB color space.
///
/// Values are nominally in 0.0..=1.0 but are not clamped until
/// [`clip`](Srgb::clip) is called.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded)
    pub r: f64,
    /// Green channel (gamma-encoded)
    pub g: f64,
    /// Blue channel (gamma-encoded)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Clamp each channel independently to 0.0..=1.0.
    ///
    /// This is plain gamut clipping: an out-of-gamut color keeps whichever
    /// channels fit and saturates the rest, which can shift its hue. NaN
    /// channels stay NaN (`f64::clamp` propagates them).
    ///
    /// # Example
    ///
    /// ```
    /// use oklch_srgb::Srgb;
    ///
    /// let clipped = Srgb::new(1.2, 0.5, -0.1).clip();
    /// assert_eq!(clipped, Srgb::new(1.0, 0.5, 0.0));
    /// ```
    #[inline]
    pub fn clip(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Quantize to 8 bits per channel: `round(v * 255)`, ties away from zero.
    ///
    /// Expects a clipped color. The float-to-int cast saturates, so values
    /// outside 0.0..=1.0 still land on 0 or 255, and NaN becomes 0.
    ///
    /// # Example
    ///
    /// ```
    /// use oklch_srgb::{Rgb8, Srgb};
    ///
    /// let rgb = Srgb::new(1.0, 0.5, 0.0).quantize();
    /// assert_eq!(rgb, Rgb8::new(255, 128, 0));
    /// ```
    #[inline]
    pub fn quantize(self) -> Rgb8 {
        Rgb8 {
            r: quantize_channel(self.r),
            g: quantize_channel(self.g),
            b: quantize_channel(self.b),
        }
    }
}

#[inline]
fn quantize_channel(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

impl From<LinearRgb> for Srgb {
    /// Encode linear RGB with the exact sRGB transfer function.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}

impl From<Rgb8> for Srgb {
    /// Expand 8-bit channels back to 0.0..=1.0.
    fn from(rgb: Rgb8) -> Self {
        Self {
            r: f64::from(rgb.r) / 255.0,
            g: f64::from(rgb.g) / 255.0,
            b: f64::from(rgb.b) / 255.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_function_known_values() {
        assert_eq!(linear_to_srgb(0.0), 0.0);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-12);

        // Exact: 1.055 * 0.5^(1/2.4) - 0.055 = 0.735356...
        let mid = linear_to_srgb(0.5);
        assert!((mid - 0.735356).abs() < 1e-6, "got {mid}");

        // Exact: ((0.5 + 0.055) / 1.055)^2.4 = 0.214041 encodes back to 0.5
        let back = linear_to_srgb(0.214041);
        assert!((back - 0.5).abs() < 1e-5, "got {back}");
    }

    #[test]
    fn test_transfer_function_threshold() {
        // At the threshold itself the linear segment applies
        let at = linear_to_srgb(LINEAR_SEGMENT_THRESHOLD);
        assert_eq!(at, 12.92 * LINEAR_SEGMENT_THRESHOLD);

        // Just above it the power segment applies; the two segments meet
        // within 1e-6 of each other
        let above = linear_to_srgb(LINEAR_SEGMENT_THRESHOLD + 1e-12);
        assert!((above - at).abs() < 1e-6, "at={at}, above={above}");
    }

    #[test]
    fn test_transfer_function_negative_uses_linear_segment() {
        let v = linear_to_srgb(-0.25);
        assert_eq!(v, 12.92 * -0.25);
        assert!(!v.is_nan());
    }

    #[test]
    fn test_transfer_function_propagates_nan() {
        assert!(linear_to_srgb(f64::NAN).is_nan());
    }

    #[test]
    fn test_monotonicity() {
        let mut prev = linear_to_srgb(0.0);
        for i in 1..=1000 {
            let curr = linear_to_srgb(i as f64 / 1000.0);
            assert!(curr >= prev, "linear_to_srgb not monotonic at {i}");
            prev = curr;
        }
    }

    #[test]
    fn test_clip() {
        let clipped = Srgb::new(-0.5, 0.25, 7.0).clip();
        assert_eq!(clipped, Srgb::new(0.0, 0.25, 1.0));

        // Already in range: unchanged
        let inside = Srgb::new(0.0, 0.5, 1.0);
        assert_eq!(inside.clip(), inside);
    }

    #[test]
    fn test_clip_keeps_nan() {
        let clipped = Srgb::new(f64::NAN, 0.5, 0.5).clip();
        assert!(clipped.r.is_nan());
        assert_eq!(clipped.g, 0.5);
    }

    #[test]
    fn test_quantize_rounding() {
        // 0.5 * 255 = 127.5 rounds away from zero
        assert_eq!(Srgb::new(0.5, 0.5, 0.5).quantize(), Rgb8::new(128, 128, 128));
        assert_eq!(Srgb::new(0.0, 1.0, 0.001).quantize(), Rgb8::new(0, 255, 0));
        assert_eq!(Srgb::new(0.002, 0.998, 0.0).quantize(), Rgb8::new(1, 254, 0));
    }

    #[test]
    fn test_quantize_nan_is_zero() {
        assert_eq!(Srgb::new(f64::NAN, 1.0, 0.0).quantize(), Rgb8::new(0, 255, 0));
    }

    #[test]
    fn test_quantize_idempotent() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let color = Srgb::new(v, 1.0 - v, v * v).clip();
            let first = color.quantize();
            let second = Srgb::from(first).quantize();
            assert_eq!(first, second, "requantizing {color:?} changed the result");
            assert_eq!(color.clip().quantize(), first);
        }
    }

    #[test]
    fn test_rgb8_round_trip() {
        for i in 0..=255u8 {
            let rgb = Rgb8::new(i, 255 - i, i / 2);
            assert_eq!(Srgb::from(rgb).quantize(), rgb);
        }
    }
}
