//! Test fixtures: small definition and palette documents with known output.

use std::fs;
use std::path::{Path, PathBuf};

/// Definitions exercising every rule family with one or two entries each
pub const DEFINITIONS_YAML: &str = r#"
padding:
  amount: 1
  scale: 4
text_size:
  sm: 13
layout_values: [left]
anchors:
  "0": 0
  md: 8
sizes:
  md: 50
"#;

/// Palette with a skipped single, a scale and an OKLCH single
pub const PALETTE_YAML: &str = r##"
black: "#000"
red:
  "500": oklch(63.7% 0.237 25.331)
brand: oklch(50% 0 0)
"##;

/// Exact rendering of `DEFINITIONS_YAML` + `PALETTE_YAML`
pub const EXPECTED_STYLESHEET: &str = r#"<style>
.p-0 { padding: 0; }
.p-1 { padding: 4; }
.flex > * { flex-weight: 1; }
.flex-col { layout-mode: left; }
.flex-row { layout-mode: top; }
.flex-0 { flex-weight: 0; }
.flex-1 { flex-weight: 1; }
.flex-2 { flex-weight: 2; }
.flex-3 { flex-weight: 3; }
.flex-4 { flex-weight: 4; }
.text-uppercase { text-transform: uppercase; }
.hidden { visibility: hidden; }
.none { display: none; }
.text-left { text-align: left; }
.layout-left { layout: left; }
.font-bold { font-weight: bold; }
.font-normal { font-weight: normal; }
.vertical-top { vertical-align: top; }
.vertical-middle { vertical-align: middle; }
.vertical-bottom { vertical-align: bottom; }
.horizontal-left { horizontal-align: left; }
.horizontal-center { horizontal-align: center; }
.horizontal-right { horizontal-align: right; }
.top-0 { anchor-top: 0; }
.top-md { anchor-top: 8; }
.\-top-md { anchor-top: -8; }
.left-0 { anchor-left: 0; }
.left-md { anchor-left: 8; }
.\-left-md { anchor-left: -8; }
.bottom-0 { anchor-bottom: 0; }
.bottom-md { anchor-bottom: 8; }
.\-bottom-md { anchor-bottom: -8; }
.right-0 { anchor-right: 0; }
.right-md { anchor-right: 8; }
.\-right-md { anchor-right: -8; }
.w-md { anchor-width: 50; }
.h-md { anchor-height: 50; }
.text-sm { font-size: 13; }
.bg-red-500 { background-color: rgb(251, 44, 54); }
.bg-brand { background-color: rgb(99, 99, 99); }
.text-red-500 { color: rgb(251, 44, 54); }
.text-brand { color: rgb(99, 99, 99); }
</style>
"#;

/// Rule count of the embedded config.yaml + palette.yaml
pub const EMBEDDED_RULE_COUNT: usize = 760;

/// Write both fixture documents into `dir`, returning (config, palette) paths
pub fn write_fixture_files(dir: &Path) -> (PathBuf, PathBuf) {
    let config = dir.join("config.yaml");
    let palette = dir.join("palette.yaml");
    fs::write(&config, DEFINITIONS_YAML).unwrap();
    fs::write(&palette, PALETTE_YAML).unwrap();
    (config, palette)
}
