use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hywind::assets::{AssetCategory, AssetLoader, AssetSource};
use hywind::convert::{convert_all, ensure_all_converted};
use hywind::models::{Definitions, Palette};
use hywind::stylesheet::{write_stylesheet, StylesheetGenerator};

#[derive(Parser)]
#[command(name = "hywind")]
#[command(about = "Utility stylesheets from OKLCH color palettes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the utility stylesheet
    Generate {
        /// Rule definitions file (overrides CONFIG_FILE and the embedded copy)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Palette file (overrides PALETTE_FILE and the embedded copy)
        #[arg(long)]
        palette: Option<PathBuf>,

        /// Output file path
        #[arg(short, long, default_value = "hywind.html")]
        output: PathBuf,

        /// Print the stylesheet instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Convert OKLCH colors to 8-bit sRGB
    Convert {
        /// Colors such as "oklch(63.7% 0.237 25.331)"
        #[arg(required = true)]
        colors: Vec<String>,

        /// Emit a JSON array instead of text
        #[arg(long)]
        json: bool,
    },
    /// Extract embedded config.yaml and palette.yaml for customization
    Init {
        /// Target directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hywind=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Generate {
            config,
            palette,
            output,
            stdout,
        }) => run_generate_command(config, palette, &output, stdout),
        Some(Commands::Convert { colors, json }) => run_convert_command(&colors, json),
        Some(Commands::Init { dir, force, list }) => run_init_command(&dir, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Flag first, then environment variable
fn resolve_path(flag: Option<PathBuf>, env_var: &str) -> Option<PathBuf> {
    flag.or_else(|| std::env::var(env_var).ok().map(PathBuf::from))
}

fn run_generate_command(
    config: Option<PathBuf>,
    palette: Option<PathBuf>,
    output: &Path,
    stdout: bool,
) -> anyhow::Result<()> {
    let loader = AssetLoader::new(
        resolve_path(config, "CONFIG_FILE"),
        resolve_path(palette, "PALETTE_FILE"),
    );

    let definitions = Definitions::load_from_assets(&loader)?;
    let palette = Palette::load_from_assets(&loader)?;

    let (sheet, report) = StylesheetGenerator::new(&definitions, &palette).generate();
    let rendered = sheet.render();

    if stdout {
        print!("{rendered}");
        return Ok(());
    }

    write_stylesheet(output, &rendered)?;
    println!(
        "Wrote {} ({} rules, {} colors, {} skipped)",
        output.display(),
        report.rules,
        report.colors_converted,
        report.colors_skipped.len()
    );

    Ok(())
}

fn run_convert_command(colors: &[String], json: bool) -> anyhow::Result<()> {
    let results = convert_all(colors);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            match result.to_line() {
                Some(line) => println!("{line}"),
                None => tracing::warn!(input = %result.input, "Not an oklch() color"),
            }
        }
    }

    ensure_all_converted(&results)?;
    Ok(())
}

fn run_init_command(dir: &Path, force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let report = AssetLoader::init(dir, &AssetCategory::ALL, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}

/// Display version and which config/palette sources would be used
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let palette_file = std::env::var("PALETTE_FILE").ok();

    println!("Hywind v{VERSION}");
    println!("Utility stylesheets from OKLCH color palettes\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PALETTE_FILE = {}",
        palette_file.as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::new(
        config_file.map(PathBuf::from),
        palette_file.map(PathBuf::from),
    );

    println!("\nAsset Sources:");
    for category in AssetCategory::ALL {
        let source = loader.source(category);
        let missing = match &source {
            AssetSource::External(path) if !path.exists() => " (file not found)",
            _ => "",
        };
        println!("  {:<13} {source}{missing}", category.file_name());
    }

    println!("\nCommands:");
    println!("  hywind generate  Generate the utility stylesheet");
    println!("  hywind convert   Convert OKLCH colors to sRGB");
    println!("  hywind init      Extract embedded config and palette");
    println!("\nRun 'hywind --help' for more details.");
}
