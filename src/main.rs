// SPDX-License-Identifier: MIT
//
// tint: deterministic color palettes as design tokens.
//
// This is the binary that wires the crates together:
//
//   tint-color   → hex parsing, HSL adjustments
//   tint-palette → hue-rotated base colors, lightness ramps, token rendering
//
// Options resolve in three layers, later layers winning:
//
//   built-in defaults → --config FILE (JSON) → explicit command-line flags
//
// The result goes to stdout, or to --output FILE.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use tint_palette::{PaletteError, PaletteOptions, generate_full_palette, generate_hex_palette};
use tint_color::ColorError;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tint")]
#[command(version, about = "Generate hue-rotated color palettes with lightness ramps", long_about = None)]
struct Cli {
    /// Seed color, `#rrggbb` or `rrggbb`
    #[arg(value_name = "COLOR")]
    base: String,

    /// Number of hue-rotated base colors [default: 7]
    #[arg(short = 'n', long, value_name = "N")]
    count: Option<usize>,

    /// Lightness steps per base color, at least 2 [default: 100]
    #[arg(short, long, value_name = "N")]
    shades: Option<usize>,

    /// Run each ramp from white to black
    #[arg(short, long, overrides_with = "no_invert")]
    invert: bool,

    /// Run each ramp from black to white, even if the config inverts it
    #[arg(long, overrides_with = "invert")]
    no_invert: bool,

    /// Lightness delta in percentage points (no effect on ramps)
    #[arg(long, value_name = "POINTS", allow_negative_numbers = true)]
    lightness_change: Option<f64>,

    /// Extra hue rotation in degrees for every shade
    #[arg(long, value_name = "DEGREES", allow_negative_numbers = true)]
    hue_shift: Option<f64>,

    /// Saturation delta in percentage points for every shade
    #[arg(long, value_name = "POINTS", allow_negative_numbers = true)]
    saturation_change: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// CSS selector wrapping the custom properties
    #[arg(long, value_name = "SELECTOR", default_value = tint_palette::DEFAULT_SELECTOR)]
    selector: String,

    /// JSON file with palette options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// What to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// CSS custom properties inside a selector block
    Css,
    /// JSON object, token name → value
    Json,
    /// Only the hue-rotated base colors, one per line
    Hex,
}

impl Cli {
    /// `--invert` / `--no-invert`, whichever came last, or `None` for neither.
    const fn invert_flag(&self) -> Option<bool> {
        match (self.invert, self.no_invert) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }

    /// Layer explicit flags over `base`.
    fn resolve(&self, base: PaletteOptions) -> PaletteOptions {
        PaletteOptions {
            count: self.count.unwrap_or(base.count),
            shades: self.shades.unwrap_or(base.shades),
            invert_lightness: self.invert_flag().unwrap_or(base.invert_lightness),
            lightness_change: self.lightness_change.unwrap_or(base.lightness_change),
            hue_shift: self.hue_shift.unwrap_or(base.hue_shift),
            saturation_change: self.saturation_change.unwrap_or(base.saturation_change),
        }
    }
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
enum CliError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    #[error("{}: invalid config: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("writing output: {0}")]
    Stdout(#[source] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Color(#[from] ColorError),
}

// ─── Pipeline ───────────────────────────────────────────────────────────────

fn load_options(path: Option<&Path>) -> Result<PaletteOptions, CliError> {
    let Some(path) = path else {
        return Ok(PaletteOptions::default());
    };

    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options: PaletteOptions = serde_json::from_str(&text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded options from {}: {options:?}", path.display());
    Ok(options)
}

fn render(cli: &Cli, options: &PaletteOptions) -> Result<String, CliError> {
    match cli.format {
        Format::Hex => {
            let colors = generate_hex_palette(&cli.base, options.count)?;
            Ok(colors.iter().map(|c| format!("{c}\n")).collect())
        }
        Format::Css => Ok(generate_full_palette(&cli.base, options)?.to_css(&cli.selector)),
        Format::Json => {
            let mut json = generate_full_palette(&cli.base, options)?.to_json()?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let options = cli.resolve(load_options(cli.config.as_deref())?);
    let text = render(cli, &options)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &text).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            log::info!("wrote {} bytes to {}", text.len(), path.display());
        }
        None => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(CliError::Stdout)?,
    }
    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("tint: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
