//! Oklab perceptual color space
//!
//! Oklab is the Cartesian form behind [`Oklch`](super::Oklch). This crate only
//! ever walks the Oklab -> linear sRGB direction, using the reference
//! matrices published by Björn Ottosson.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::linear_rgb::LinearRgb;

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// # Note
///
/// Values are not clamped. An OKLCH input with lightness above 1.0 or a large
/// chroma produces an Oklab point outside the sRGB gamut; the clip step at the
/// end of the pipeline deals with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Green-red axis: typically -0.4 to 0.4
    pub a: f64,
    /// Blue-yellow axis: typically -0.4 to 0.4
    pub b: f64,
}

impl Oklab {
    /// Create a new Oklab color.
    ///
    /// # Example
    ///
    /// ```
    /// use oklch_srgb::Oklab;
    ///
    /// // Mid-gray (neutral, no chroma)
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    /// assert_eq!(gray.a, 0.0);
    /// ```
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

impl From<Oklab> for LinearRgb {
    /// Convert from Oklab to linear sRGB.
    ///
    /// # Note
    ///
    /// The result is not clamped. Out-of-gamut Oklab colors produce
    /// LinearRgb values outside 0.0..=1.0, including negative ones.
    ///
    /// # Example
    ///
    /// ```
    /// use oklch_srgb::{LinearRgb, Oklab};
    ///
    /// let linear = LinearRgb::from(Oklab::new(0.5, 0.0, 0.0));
    /// assert!((linear.r - linear.g).abs() < 1e-9);
    /// assert!((linear.g - linear.b).abs() < 1e-9);
    /// ```
    fn from(lab: Oklab) -> Self {
        // Step 1: Lab to LMS' (inverse M2)
        let l_ = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
        let m_ = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
        let s_ = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

        // Step 2: Cube (cone response nonlinearity)
        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        // Step 3: LMS to linear sRGB (inverse M1)
        LinearRgb {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance against the `palette` crate, which may route through XYZ
    /// with independently derived matrices
    const PALETTE_TOLERANCE: f64 = 1e-3;

    /// Tolerance for values computed with the same constants
    const EXACT_TOLERANCE: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_linear_matches_palette_crate() {
        use palette::{convert::IntoColorUnclamped, LinSrgb, Oklab as PaletteOklab};

        let test_colors = [
            (1.0, 0.0, 0.0),
            (0.0, 0.0, 0.0),
            (0.5, 0.0, 0.0),
            (0.627955, 0.224863, 0.125846), // sRGB red
            (0.866440, -0.233888, 0.179498), // sRGB green
            (0.452014, -0.032457, -0.311528), // sRGB blue
            (0.7, 0.05, -0.05),
        ];

        for (l, a, b) in test_colors {
            let ours = LinearRgb::from(Oklab::new(l, a, b));
            let theirs: LinSrgb<f64> = PaletteOklab::new(l, a, b).into_color_unclamped();

            assert!(
                approx_eq(ours.r, theirs.red, PALETTE_TOLERANCE),
                "r mismatch for ({l}, {a}, {b}): ours={}, palette={}",
                ours.r,
                theirs.red
            );
            assert!(
                approx_eq(ours.g, theirs.green, PALETTE_TOLERANCE),
                "g mismatch for ({l}, {a}, {b}): ours={}, palette={}",
                ours.g,
                theirs.green
            );
            assert!(
                approx_eq(ours.b, theirs.blue, PALETTE_TOLERANCE),
                "b mismatch for ({l}, {a}, {b}): ours={}, palette={}",
                ours.b,
                theirs.blue
            );
        }
    }

    #[test]
    fn test_white_and_black() {
        let white = LinearRgb::from(Oklab::new(1.0, 0.0, 0.0));
        assert!(approx_eq(white.r, 1.0, EXACT_TOLERANCE), "r={}", white.r);
        assert!(approx_eq(white.g, 1.0, EXACT_TOLERANCE), "g={}", white.g);
        assert!(approx_eq(white.b, 1.0, EXACT_TOLERANCE), "b={}", white.b);

        let black = LinearRgb::from(Oklab::new(0.0, 0.0, 0.0));
        assert_eq!(black, LinearRgb::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_gray_is_lightness_cubed() {
        // With a = b = 0 every LMS' channel equals L, and the rows of the
        // LMS -> sRGB matrix each sum to ~1.0
        for l in [0.1, 0.25, 0.5, 0.75, 0.9] {
            let gray = LinearRgb::from(Oklab::new(l, 0.0, 0.0));
            let expected = l * l * l;
            assert!(approx_eq(gray.r, expected, EXACT_TOLERANCE), "r={} l={l}", gray.r);
            assert!(approx_eq(gray.g, expected, EXACT_TOLERANCE), "g={} l={l}", gray.g);
            assert!(approx_eq(gray.b, expected, EXACT_TOLERANCE), "b={} l={l}", gray.b);
        }
    }

    #[test]
    fn test_axis_signs() {
        // +a is red, -a is green, -b is blue. A sign error in either matrix
        // swaps these.
        let reddish = LinearRgb::from(Oklab::new(0.6, 0.1, 0.0));
        assert!(reddish.r > reddish.g, "{reddish:?}");

        let greenish = LinearRgb::from(Oklab::new(0.6, -0.1, 0.0));
        assert!(greenish.g > greenish.r, "{greenish:?}");

        let bluish = LinearRgb::from(Oklab::new(0.6, 0.0, -0.1));
        assert!(bluish.b > bluish.r && bluish.b > bluish.g, "{bluish:?}");
    }

    #[test]
    fn test_out_of_gamut_not_clamped() {
        let vivid = LinearRgb::from(Oklab::new(0.6, 0.0, 0.4));
        assert!(vivid.b < 0.0, "strong yellow should push blue negative: {vivid:?}");
    }
}
