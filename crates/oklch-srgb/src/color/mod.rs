//! Color types and the conversion chain
//!
//! Each stage of the pipeline has its own type, and the stages are connected
//! with `From` impls so the order cannot be mixed up:
//!
//! ```text
//! Oklch --> Oklab --> LinearRgb --> Srgb --clip--> Srgb --quantize--> Rgb8
//! ```
//!
//! # Example
//!
//! ```
//! use oklch_srgb::{LinearRgb, Oklab, Oklch, Rgb8, Srgb};
//!
//! let lch = Oklch::new(0.628, 0.258, 29.23);
//! let linear = LinearRgb::from(Oklab::from(lch));
//! let rgb: Rgb8 = Srgb::from(linear).clip().quantize();
//! assert_eq!(rgb, lch.to_rgb8());
//! ```

mod linear_rgb;
mod oklab;
mod oklch;
mod rgb8;
mod srgb;

pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use oklch::Oklch;
pub use rgb8::{Rgb8, RgbTriple};
pub use srgb::{linear_to_srgb, Srgb};
