//! Hywind - utility stylesheets from OKLCH palettes
//!
//! Generates a stylesheet of utility classes from YAML rule definitions and a
//! palette of OKLCH colors, converting every color to 8-bit sRGB.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod convert;
pub mod error;
pub mod models;
pub mod stylesheet;
