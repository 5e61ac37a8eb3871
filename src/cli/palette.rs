//! Palette command implementation.
//!
//! Extracts the colour palette of an image, optionally transforms it,
//! and emits it as hex lines, a JSON report, or a swatch PNG.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::color::{
    adjust_lightness, by_hue, by_luma, by_saturation, Palette,
};
use crate::error::{DabError, Result};
use crate::output::{display_path, plural, Printer};

use super::load_buffer;

/// Extract a colour palette from an image
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Image file to extract colours from
    #[arg(required = true)]
    pub file: PathBuf,

    /// Sort the palette before output
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Maximum number of colours to output
    #[arg(long)]
    pub max: Option<usize>,

    /// Split the output into dark and light halves by luma
    #[arg(long)]
    pub split: bool,

    /// Lighten every colour by a percentage (0-100)
    #[arg(long, conflicts_with = "darken")]
    pub lighten: Option<f32>,

    /// Darken every colour by a percentage (0-100)
    #[arg(long)]
    pub darken: Option<f32>,

    /// Write the palette as a swatch PNG
    #[arg(long)]
    pub swatch: Option<PathBuf>,

    /// Swatch cell size in pixels
    #[arg(long, default_value_t = 1)]
    pub scale: u32,

    /// Swatch cells per row (default: one row)
    #[arg(long)]
    pub columns: Option<u32>,

    /// Output format for stdout
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Palette ordering keys.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SortKey {
    Luma,
    Hue,
    Saturation,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// JSON report printed for `--format json`.
#[derive(Serialize)]
struct PaletteReport {
    source: String,
    colours: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dark: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    light: Option<Vec<String>>,
}

pub fn run(args: PaletteArgs) -> Result<()> {
    let printer = Printer::new();
    let display = display_path(&args.file);

    let buffer = load_buffer(&args.file)?;
    let mut palette = Palette::from_buffer(&buffer);

    printer.status(
        "Sampled",
        &format!("{} from {}", plural(palette.len(), "colour", "colours"), display),
    );

    if let Some(percent) = args.lighten {
        palette = palette.map(|c| adjust_lightness(c, percent));
    } else if let Some(percent) = args.darken {
        palette = palette.map(|c| adjust_lightness(c, -percent));
    }

    if let Some(key) = args.sort {
        palette = match key {
            SortKey::Luma => palette.sorted_by(by_luma),
            SortKey::Hue => palette.sorted_by(by_hue),
            SortKey::Saturation => palette.sorted_by(by_saturation),
        };
    }

    if let Some(max) = args.max {
        palette = palette.slice(..max);
    }

    let split = args.split.then(|| palette.split_by_luma());

    if let Some(path) = &args.swatch {
        let swatch = palette.swatch(args.scale, args.columns);
        swatch.save_png(path)?;
        printer.status(
            "Wrote",
            &format!(
                "{} ({}x{})",
                display_path(path),
                swatch.width(),
                swatch.height()
            ),
        );
    }

    match args.format {
        Format::Text => {
            if let Some((dark, light)) = &split {
                println!("# dark");
                for colour in dark.iter() {
                    println!("{}", colour);
                }
                println!("# light");
                for colour in light.iter() {
                    println!("{}", colour);
                }
            } else {
                for colour in palette.iter() {
                    println!("{}", colour);
                }
            }
        }
        Format::Json => {
            let hex = |p: &Palette| p.iter().map(|c| c.to_string()).collect::<Vec<_>>();

            let report = PaletteReport {
                source: display,
                colours: hex(&palette),
                dark: split.as_ref().map(|(d, _)| hex(d)),
                light: split.as_ref().map(|(_, l)| hex(l)),
            };

            let json = serde_json::to_string_pretty(&report).map_err(|e| DabError::Parse {
                message: format!("Failed to serialize palette report: {}", e),
                help: None,
            })?;
            println!("{}", json);
        }
    }

    Ok(())
}
