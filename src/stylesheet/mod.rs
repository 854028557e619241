//! Utility stylesheet generation
//!
//! Turns rule definitions and a color palette into a `<style>` block of
//! single-purpose classes (`.p-2`, `.top-md`, `.bg-red-500`, ...).

mod generator;
mod rule;

pub use generator::{write_stylesheet, GenerationReport, StylesheetGenerator};
pub use rule::{mapped_rules, StyleProperty, StyleRule, Stylesheet};
