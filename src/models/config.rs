use crate::assets::AssetLoader;
use crate::error::ConfigError;
use crate::models::keys::scalar_keyed;
use indexmap::IndexMap;
use serde::Deserialize;

/// Rule definitions loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Definitions {
    /// `.p-N` padding rules
    #[serde(default)]
    pub padding: PaddingConfig,

    /// Named font sizes for `.text-<name>`
    #[serde(default, deserialize_with = "scalar_keyed")]
    pub text_size: IndexMap<String, u32>,

    /// Layout keywords for `.text-<value>` and `.layout-<value>`
    #[serde(default)]
    pub layout_values: Vec<String>,

    /// Named anchor offsets for `.top-<name>`, `.\-top-<name>`, ...
    #[serde(default, deserialize_with = "scalar_keyed")]
    pub anchors: IndexMap<String, u32>,

    /// Named sizes for `.w-<name>` and `.h-<name>`
    #[serde(default, deserialize_with = "scalar_keyed")]
    pub sizes: IndexMap<String, u32>,
}

/// Padding rule generation: `.p-0` through `.p-<amount>`
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PaddingConfig {
    /// Highest padding step (inclusive)
    #[serde(default = "default_padding_amount")]
    pub amount: u32,

    /// Pixels per padding step
    #[serde(default = "default_padding_scale")]
    pub scale: u32,
}

fn default_padding_amount() -> u32 {
    10
}

fn default_padding_scale() -> u32 {
    2
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self {
            amount: default_padding_amount(),
            scale: default_padding_scale(),
        }
    }
}

impl Definitions {
    /// Load definitions from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Result<Self, ConfigError> {
        let content = loader.read_config_string()?;
        let definitions = Self::from_yaml(&content)?;
        tracing::info!(
            source = %loader.config_source(),
            text_sizes = definitions.text_size.len(),
            layout_values = definitions.layout_values.len(),
            anchors = definitions.anchors.len(),
            sizes = definitions.sizes.len(),
            "Loaded definitions"
        );
        Ok(definitions)
    }

    /// Parse definitions from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            document: "config",
            source,
        })
    }
}
