//! Batch OKLCH conversion for the `convert` command

use oklch_srgb::{oklch_to_rgb8, Rgb8};
use serde::Serialize;

use crate::error::ConvertError;

/// One input and its conversion; `hex` and `rgb` are null on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedColor {
    pub input: String,
    pub hex: Option<String>,
    pub rgb: Option<RgbChannels>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RgbChannels {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Rgb8> for RgbChannels {
    fn from(rgb: Rgb8) -> Self {
        Self {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

impl ConvertedColor {
    pub fn is_converted(&self) -> bool {
        self.rgb.is_some()
    }

    /// `input  #hex  rgb(r, g, b)`, or `None` for a failed input
    pub fn to_line(&self) -> Option<String> {
        let (hex, rgb) = (self.hex.as_ref()?, self.rgb?);
        Some(format!(
            "{}  {hex}  rgb({}, {}, {})",
            self.input, rgb.r, rgb.g, rgb.b
        ))
    }
}

/// Convert every input; a failure does not stop the rest
pub fn convert_all<S: AsRef<str>>(inputs: &[S]) -> Vec<ConvertedColor> {
    inputs
        .iter()
        .map(|input| {
            let input = input.as_ref();
            let rgb = oklch_to_rgb8(input);
            ConvertedColor {
                input: input.to_string(),
                hex: rgb.map(Rgb8::to_hex),
                rgb: rgb.map(RgbChannels::from),
            }
        })
        .collect()
}

/// Error if any input failed to convert
pub fn ensure_all_converted(results: &[ConvertedColor]) -> Result<(), ConvertError> {
    let failed = results.iter().filter(|r| !r.is_converted()).count();
    if failed > 0 {
        return Err(ConvertError::Failed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}
