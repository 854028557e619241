//! Asset loading with embedded fallbacks
//!
//! The rule definitions (`config.yaml`) and the palette (`palette.yaml`) are
//! compiled into the binary. Either one can be replaced by an external file:
//!
//! - If no path is configured: use the embedded copy (no filesystem access)
//! - If a path is configured: read that file; a missing file is an error,
//!   since silently generating from the embedded copy would hide a typo

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Embedded default definitions and palette
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
#[include = "palette.yaml"]
struct EmbeddedAssets;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Config,
    Palette,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 2] = [AssetCategory::Config, AssetCategory::Palette];

    /// File name of the embedded copy (also the default extraction name)
    pub fn file_name(self) -> &'static str {
        match self {
            AssetCategory::Config => "config.yaml",
            AssetCategory::Palette => "palette.yaml",
        }
    }

    fn document(self) -> &'static str {
        match self {
            AssetCategory::Config => "config",
            AssetCategory::Palette => "palette",
        }
    }
}

/// Where an asset is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Embedded,
    External(PathBuf),
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSource::Embedded => write!(f, "embedded"),
            AssetSource::External(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External definitions file (from --config or CONFIG_FILE)
    config_file: Option<PathBuf>,
    /// External palette file (from --palette or PALETTE_FILE)
    palette_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the user asked for an external file.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(config_file: Option<PathBuf>, palette_file: Option<PathBuf>) -> Self {
        Self {
            config_file,
            palette_file,
        }
    }

    fn external_path(&self, category: AssetCategory) -> Option<&PathBuf> {
        match category {
            AssetCategory::Config => self.config_file.as_ref(),
            AssetCategory::Palette => self.palette_file.as_ref(),
        }
    }

    /// Where the given asset will be read from
    pub fn source(&self, category: AssetCategory) -> AssetSource {
        match self.external_path(category) {
            Some(path) => AssetSource::External(path.clone()),
            None => AssetSource::Embedded,
        }
    }

    pub fn config_source(&self) -> AssetSource {
        self.source(AssetCategory::Config)
    }

    pub fn palette_source(&self) -> AssetSource {
        self.source(AssetCategory::Palette)
    }

    /// Read an asset, external file first if configured
    pub fn read(&self, category: AssetCategory) -> Result<Cow<'static, [u8]>, ConfigError> {
        let read_error = |source| ConfigError::Read {
            document: category.document(),
            source,
        };

        if let Some(path) = self.external_path(category) {
            tracing::trace!(path = %path.display(), "Loading {} from filesystem", category.file_name());
            return fs::read(path).map(Cow::Owned).map_err(read_error);
        }

        EmbeddedAssets::get(category.file_name())
            .map(|f| {
                tracing::trace!("Loading {} from embedded assets", category.file_name());
                f.data
            })
            .ok_or_else(|| {
                read_error(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded {} not found", category.file_name()),
                ))
            })
    }

    /// Read an asset as a UTF-8 string
    pub fn read_string(&self, category: AssetCategory) -> Result<String, ConfigError> {
        let bytes = self.read(category)?;
        String::from_utf8(bytes.into_owned()).map_err(|e| ConfigError::Read {
            document: category.document(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })
    }

    pub fn read_config_string(&self) -> Result<String, ConfigError> {
        self.read_string(AssetCategory::Config)
    }

    pub fn read_palette_string(&self) -> Result<String, ConfigError> {
        self.read_string(AssetCategory::Palette)
    }

    /// Extract embedded assets into `dir` (init command)
    ///
    /// Existing files are left alone unless `force` is set.
    pub fn init(dir: &Path, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        fs::create_dir_all(dir)?;

        for category in categories {
            let path = dir.join(category.file_name());
            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if let Some(data) = EmbeddedAssets::get(category.file_name()) {
                fs::write(&path, &*data.data)?;
                report.written.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded assets (for display)
    pub fn list_embedded() -> Vec<String> {
        EmbeddedAssets::iter().map(|s| s.to_string()).collect()
    }
}
