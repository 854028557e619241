pub mod config;
pub mod keys;
pub mod palette;

pub use config::{Definitions, PaddingConfig};
pub use palette::{ColorEntry, NamedColor, Palette};
