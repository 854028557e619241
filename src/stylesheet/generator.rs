use oklch_srgb::{oklch_to_rgb8, Rgb8};
use std::fs;
use std::path::Path;

use super::rule::{mapped_rules, StyleRule, Stylesheet};
use crate::error::GenerateError;
use crate::models::{Definitions, Palette};

const ANCHOR_SIDES: [&str; 4] = ["top", "left", "bottom", "right"];
const SIZE_DIMENSIONS: [(&str, &str); 2] = [("width", "w"), ("height", "h")];

/// Summary of a generation run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Total rules emitted
    pub rules: usize,
    /// Palette colors that converted from OKLCH
    pub colors_converted: usize,
    /// Palette colors skipped because they are not OKLCH (`white`, `red-50`, ...)
    pub colors_skipped: Vec<String>,
}

/// Builds the utility stylesheet from rule definitions and a palette
pub struct StylesheetGenerator<'a> {
    definitions: &'a Definitions,
    palette: &'a Palette,
}

impl<'a> StylesheetGenerator<'a> {
    pub fn new(definitions: &'a Definitions, palette: &'a Palette) -> Self {
        Self {
            definitions,
            palette,
        }
    }

    /// Generate every rule in output order: padding, fixed layout rules,
    /// anchors, sizes, text sizes, background colors, text colors.
    pub fn generate(&self) -> (Stylesheet, GenerationReport) {
        let mut sheet = Stylesheet::new();

        sheet.extend(self.padding_rules());
        sheet.extend(self.layout_rules());
        sheet.extend(self.anchor_rules());
        sheet.extend(self.size_rules());
        sheet.extend(self.text_size_rules());

        let (colors, skipped) = self.convert_colors();
        sheet.extend(color_rules(&colors, ".bg", "background-color"));
        sheet.extend(color_rules(&colors, ".text", "color"));

        let report = GenerationReport {
            rules: sheet.len(),
            colors_converted: colors.len(),
            colors_skipped: skipped,
        };

        tracing::info!(
            rules = report.rules,
            colors = report.colors_converted,
            skipped = report.colors_skipped.len(),
            "Generated stylesheet"
        );

        (sheet, report)
    }

    fn padding_rules(&self) -> Vec<StyleRule> {
        let padding = self.definitions.padding;
        // u32 * u32 always fits in u64
        let scale = u64::from(padding.scale);
        (0..=padding.amount)
            .map(|i| StyleRule::simple(format!(".p-{i}"), "padding", (scale * u64::from(i)).to_string()))
            .collect()
    }

    fn layout_rules(&self) -> Vec<StyleRule> {
        let layout_values = &self.definitions.layout_values;
        let mut rules = vec![
            StyleRule::simple(".flex > *", "flex-weight", "1"),
            StyleRule::simple(".flex-col", "layout-mode", "left"),
            StyleRule::simple(".flex-row", "layout-mode", "top"),
        ];
        rules.extend(mapped_rules(".flex", "flex-weight", &["0", "1", "2", "3", "4"]));
        rules.push(StyleRule::simple(".text-uppercase", "text-transform", "uppercase"));
        rules.push(StyleRule::simple(".hidden", "visibility", "hidden"));
        rules.push(StyleRule::simple(".none", "display", "none"));
        rules.extend(mapped_rules(".text", "text-align", layout_values));
        rules.extend(mapped_rules(".layout", "layout", layout_values));
        rules.extend(mapped_rules(".font", "font-weight", &["bold", "normal"]));
        rules.extend(mapped_rules(".vertical", "vertical-align", &["top", "middle", "bottom"]));
        rules.extend(mapped_rules(".horizontal", "horizontal-align", &["left", "center", "right"]));
        rules
    }

    fn anchor_rules(&self) -> Vec<StyleRule> {
        let anchors = &self.definitions.anchors;
        let mut rules = Vec::new();

        for side in ANCHOR_SIDES {
            let property = format!("anchor-{side}");
            rules.extend(
                anchors
                    .iter()
                    .map(|(name, value)| StyleRule::simple(format!(".{side}-{name}"), &property, value.to_string())),
            );
            rules.extend(anchors.iter().filter(|(_, value)| **value != 0).map(|(name, value)| {
                StyleRule::simple(format!(".\\-{side}-{name}"), &property, format!("-{value}"))
            }));
        }

        rules
    }

    fn size_rules(&self) -> Vec<StyleRule> {
        let sizes = &self.definitions.sizes;
        SIZE_DIMENSIONS
            .iter()
            .flat_map(|(dimension, short)| {
                sizes.iter().map(move |(name, value)| {
                    StyleRule::simple(
                        format!(".{short}-{name}"),
                        format!("anchor-{dimension}"),
                        value.to_string(),
                    )
                })
            })
            .collect()
    }

    fn text_size_rules(&self) -> Vec<StyleRule> {
        self.definitions
            .text_size
            .iter()
            .map(|(name, size)| StyleRule::simple(format!(".text-{name}"), "font-size", size.to_string()))
            .collect()
    }

    /// Convert every palette color once; both color passes reuse the result.
    fn convert_colors(&self) -> (Vec<(String, Rgb8)>, Vec<String>) {
        let mut converted = Vec::new();
        let mut skipped = Vec::new();

        for color in self.palette.colors() {
            match oklch_to_rgb8(color.value) {
                Some(rgb) => converted.push((color.name.into_owned(), rgb)),
                None => {
                    tracing::debug!(name = %color.name, value = color.value, "Skipping non-OKLCH color");
                    skipped.push(color.name.into_owned());
                }
            }
        }

        (converted, skipped)
    }
}

fn color_rules(colors: &[(String, Rgb8)], prefix: &str, property: &str) -> Vec<StyleRule> {
    colors
        .iter()
        .map(|(name, rgb)| StyleRule::simple(format!("{prefix}-{name}"), property, rgb.to_rgb_string()))
        .collect()
}

/// Write the rendered stylesheet, creating parent directories as needed
pub fn write_stylesheet(path: &Path, contents: &str) -> Result<(), GenerateError> {
    let write_error = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, contents).map_err(write_error)?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "Wrote stylesheet");
    Ok(())
}
