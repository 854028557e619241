//! 8-bit RGB output types and their textual forms.

use std::fmt;

use crate::parse::ParseColorError;

/// A quantized, gamut-clipped sRGB color with 8 bits per channel.
///
/// This is the final output of the conversion pipeline. [`Display`] renders
/// it as `#rrggbb`.
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb8 {
    /// Create a new 8-bit color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Render as `#rrggbb` with lowercase, zero-padded hex digits.
    ///
    /// # Example
    ///
    /// ```
    /// use oklch_srgb::Rgb8;
    ///
    /// assert_eq!(Rgb8::new(255, 0, 128).to_hex(), "#ff0080");
    /// assert_eq!(Rgb8::new(1, 2, 3).to_hex(), "#010203");
    /// ```
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Render as `rgb(r, g, b)`.
    ///
    /// # Example
    ///
    /// ```
    /// use oklch_srgb::Rgb8;
    ///
    /// assert_eq!(Rgb8::new(255, 0, 128).to_rgb_string(), "rgb(255, 0, 128)");
    /// ```
    pub fn to_rgb_string(self) -> String {
        RgbTriple::from(self).to_rgb_string()
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<RgbTriple> for Rgb8 {
    type Error = ParseColorError;

    /// Narrow a parsed triple to 8 bits, rejecting channels above 255.
    fn try_from(triple: RgbTriple) -> Result<Self, Self::Error> {
        let channel = |value: u16| {
            u8::try_from(value).map_err(|_| ParseColorError::ChannelOutOfRange { value })
        };
        Ok(Self {
            r: channel(triple.r)?,
            g: channel(triple.g)?,
            b: channel(triple.b)?,
        })
    }
}

/// Integer channels read from an `rgb(r, g, b)` string.
///
/// Same shape as [`Rgb8`], but the parser accepts up to three digits per
/// channel and does no range validation, so values up to 999 pass through
/// unchanged. Use `Rgb8::try_from` to narrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbTriple {
    /// Red channel, not range-checked
    pub r: u16,
    /// Green channel, not range-checked
    pub g: u16,
    /// Blue channel, not range-checked
    pub b: u16,
}

impl RgbTriple {
    /// Create a new triple.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Render as `rgb(r, g, b)`. No validation.
    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<Rgb8> for RgbTriple {
    fn from(rgb: Rgb8) -> Self {
        Self {
            r: rgb.r.into(),
            g: rgb.g.into(),
            b: rgb.b.into(),
        }
    }
}
