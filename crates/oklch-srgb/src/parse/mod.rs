//! Parsers for the two textual color forms found in palettes
//!
//! - `oklch(L[%] C H)`, e.g. `oklch(63.7% 0.237 25.331)`
//! - `rgb(r, g, b)`, e.g. `rgb(251, 44, 54)`
//!
//! Both searches are case-insensitive and unanchored: the form may appear
//! anywhere in the input (`"color: oklch(50% 0.1 20);"` parses). Numbers are
//! unsigned and have no exponent.
//!
//! Palettes routinely mix forms (`#000`, `transparent`, `currentColor`), so a
//! non-matching input is an ordinary outcome. The free functions return
//! `None` for it; the `FromStr` impls return a [`ParseColorError`].

mod error;

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Oklch, RgbTriple};

pub use error::ParseColorError;

/// `oklch(` number `%`? ws number ws number `)`, numbers unsigned decimals.
static OKLCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)oklch\(\s*([0-9]+(?:\.[0-9]*)?|\.[0-9]+)%?\s+([0-9]+(?:\.[0-9]*)?|\.[0-9]+)\s+([0-9]+(?:\.[0-9]*)?|\.[0-9]+)\s*\)",
    )
    .unwrap()
});

/// `rgb(` 1-3 digits `,` 1-3 digits `,` 1-3 digits `)`.
static RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)rgb\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*\)").unwrap()
});

impl FromStr for Oklch {
    type Err = ParseColorError;

    /// Parse the first `oklch(L[%] C H)` found in `s`.
    ///
    /// Lightness is divided by 100 when `s` contains a `%` **anywhere**, not
    /// only right after the lightness token. `"oklch(0.5 0.1 20) /* 50% */"`
    /// therefore yields L = 0.005.
    ///
    /// Each number is digits with at most one decimal point (`1`, `1.`,
    /// `.5`, `1.25`). A run of digits and dots such as `1.2.3` is not a
    /// number, so `oklch(1.2.3 0.1 200)` does not parse. Signs and exponents
    /// are not accepted either.
    ///
    /// # Examples
    ///
    /// ```
    /// use oklch_srgb::Oklch;
    ///
    /// let red: Oklch = "oklch(63.7% 0.237 25.331)".parse().unwrap();
    /// assert_eq!(red, Oklch::new(0.637, 0.237, 25.331));
    ///
    /// let plain: Oklch = "OKLCH(0.5 0.1 200)".parse().unwrap();
    /// assert_eq!(plain.l, 0.5);
    ///
    /// assert!("#ff0000".parse::<Oklch>().is_err());
    /// assert!("oklch(1.2.3 0.1 200)".parse::<Oklch>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = OKLCH.captures(s).ok_or(ParseColorError::NotOklch)?;
        let number = |i: usize| -> Result<f64, ParseColorError> {
            caps[i].parse().map_err(|_| ParseColorError::NotOklch)
        };

        let mut l = number(1)?;
        if s.contains('%') {
            l /= 100.0;
        }

        Ok(Oklch::new(l, number(2)?, number(3)?))
    }
}

impl FromStr for RgbTriple {
    type Err = ParseColorError;

    /// Parse the first `rgb(r, g, b)` found in `s`. Channels are not
    /// range-checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use oklch_srgb::RgbTriple;
    ///
    /// let rgb: RgbTriple = "rgb(255, 0, 128)".parse().unwrap();
    /// assert_eq!(rgb, RgbTriple::new(255, 0, 128));
    ///
    /// let loud: RgbTriple = "RGB( 300 ,1,2 )".parse().unwrap();
    /// assert_eq!(loud.r, 300);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = RGB.captures(s).ok_or(ParseColorError::NotRgb)?;
        let channel = |i: usize| -> Result<u16, ParseColorError> {
            caps[i].parse().map_err(|_| ParseColorError::NotRgb)
        };

        Ok(RgbTriple::new(channel(1)?, channel(2)?, channel(3)?))
    }
}

/// Parse an `oklch(L[%] C H)` string, or `None` if there is none.
///
/// See [`Oklch::from_str`] for the `%` handling.
pub fn parse_oklch(text: &str) -> Option<Oklch> {
    text.parse().ok()
}

/// Parse an `rgb(r, g, b)` string, or `None` if there is none.
pub fn parse_rgb_string(text: &str) -> Option<RgbTriple> {
    text.parse().ok()
}
