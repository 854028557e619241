use crate::assets::AssetLoader;
use crate::error::ConfigError;
use crate::models::keys::scalar_keyed;
use indexmap::IndexMap;
use serde::Deserialize;
use std::borrow::Cow;

/// One palette entry: a single color, or a scale of named shades
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(
    untagged,
    expecting = "a color string or a map of shades to color strings"
)]
pub enum ColorEntry {
    /// `white: "#fff"`, `brand: oklch(...)`
    Single(String),
    /// `red: { 50: oklch(...), 100: oklch(...), ... }`
    Scale(#[serde(deserialize_with = "scalar_keyed")] IndexMap<String, String>),
}

/// A palette color flattened to its selector suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor<'a> {
    /// `red-500` for a scale shade, `white` for a single color
    pub name: Cow<'a, str>,
    /// The color text as written in the palette
    pub value: &'a str,
}

/// Named colors loaded from palette.yaml
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Palette {
    #[serde(deserialize_with = "scalar_keyed")]
    entries: IndexMap<String, ColorEntry>,
}

impl Palette {
    /// Load the palette from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Result<Self, ConfigError> {
        let content = loader.read_palette_string()?;
        let palette = Self::from_yaml(&content)?;
        tracing::info!(
            source = %loader.palette_source(),
            entries = palette.entries.len(),
            colors = palette.colors().count(),
            "Loaded palette"
        );
        Ok(palette)
    }

    /// Parse a palette from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            document: "palette",
            source,
        })
    }

    /// Top-level entries in file order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ColorEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Every color in file order, scales expanded to `name-shade`
    pub fn colors(&self) -> impl Iterator<Item = NamedColor<'_>> {
        self.entries.iter().flat_map(|(name, entry)| {
            let expanded: Vec<NamedColor<'_>> = match entry {
                ColorEntry::Single(value) => vec![NamedColor {
                    name: name.as_str().into(),
                    value,
                }],
                ColorEntry::Scale(shades) => shades
                    .iter()
                    .map(|(shade, value)| NamedColor {
                        name: format!("{name}-{shade}").into(),
                        value,
                    })
                    .collect(),
            };
            expanded
        })
    }
}

impl FromIterator<(String, ColorEntry)> for Palette {
    fn from_iter<I: IntoIterator<Item = (String, ColorEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
