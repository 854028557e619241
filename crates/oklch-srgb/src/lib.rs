// The matrix constants are the published ten-decimal reference values; keep
// them digit-for-digit even where f64 cannot represent every digit.
#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

//! oklch-srgb: OKLCH color strings to 8-bit sRGB
//!
//! Converts palette entries written as `oklch(L[%] C H)` into quantized
//! sRGB triples, and renders those as `#rrggbb` or `rgb(r, g, b)`.
//!
//! # Quick Start
//!
//! ```
//! use oklch_srgb::{oklch_to_hex, oklch_to_rgb8, Rgb8};
//!
//! assert_eq!(oklch_to_rgb8("oklch(100% 0 0)"), Some(Rgb8::new(255, 255, 255)));
//! assert_eq!(oklch_to_hex("oklch(0% 0 0)").as_deref(), Some("#000000"));
//!
//! // Entries in other forms are skipped, not errors
//! assert_eq!(oklch_to_rgb8("#fff"), None);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! "oklch(62.8% 0.258 29.23)"
//!     |
//!     v  parse               (regex; L / 100 if the text contains '%')
//! Oklch  (L, C, H degrees)
//!     |
//!     v  polar -> Cartesian  a = C cos(H), b = C sin(H)
//! Oklab  (L, a, b)
//!     |
//!     v  inverse M2, cube, inverse M1
//! LinearRgb
//!     |
//!     v  sRGB transfer function (12.92 v  |  1.055 v^(1/2.4) - 0.055)
//! Srgb
//!     |
//!     v  clip to 0..=1, round(v * 255)
//! Rgb8   (255, 0, 0)
//! ```
//!
//! Every stage is a pure function over `Copy` values. There is no shared
//! mutable state; the compiled regexes are immutable statics. Converting a
//! palette from several threads at once needs no coordination.
//!
//! # Gamut
//!
//! Out-of-gamut colors are clipped per channel. There is no chroma reduction
//! or other perceptual gamut mapping, so a vivid out-of-gamut color may come
//! out with a slightly different hue than a browser would render.
//!
//! # NaN
//!
//! Numbers too large for `f64` parse as infinity, and infinity times a zero
//! sine is NaN. NaN passes through the transfer function and the clip
//! unchanged and is quantized to 0.

pub mod color;
pub mod parse;


pub use color::{LinearRgb, Oklab, Oklch, Rgb8, RgbTriple, Srgb};
pub use parse::{parse_oklch, parse_rgb_string, ParseColorError};

/// Parse an OKLCH string and run the full conversion pipeline.
///
/// Returns `None` if `text` contains no `oklch(...)` form.
///
/// # Example
///
/// ```
/// use oklch_srgb::{oklch_to_rgb8, Rgb8};
///
/// let red = oklch_to_rgb8("oklch(62.8% 0.258 29.23)").unwrap();
/// assert!(red.r >= 253 && red.g <= 2 && red.b <= 2);
/// ```
pub fn oklch_to_rgb8(text: &str) -> Option<Rgb8> {
    parse_oklch(text).map(Oklch::to_rgb8)
}

/// Parse an OKLCH string and render the result as `#rrggbb`.
///
/// Returns `None` if `text` contains no `oklch(...)` form.
pub fn oklch_to_hex(text: &str) -> Option<String> {
    oklch_to_rgb8(text).map(Rgb8::to_hex)
}

/// Render an [`Rgb8`] as `#rrggbb` (lowercase, zero-padded).
pub fn rgb8_to_hex(rgb: Rgb8) -> String {
    rgb.to_hex()
}

/// Render an [`Rgb8`] as `rgb(r, g, b)`.
pub fn rgb8_to_rgb_string(rgb: Rgb8) -> String {
    rgb.to_rgb_string()
}
