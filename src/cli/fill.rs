//! Fill command implementation.
//!
//! Flood-fills the region around a seed pixel in a PNG and writes the
//! result.

use std::path::PathBuf;

use clap::Args;

use crate::color::Rgb;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::raster::fill_region;

use super::{load_buffer, parse_point};

/// Flood-fill a region of an image
#[derive(Args, Debug)]
pub struct FillArgs {
    /// Image file to fill
    #[arg(required = true)]
    pub file: PathBuf,

    /// Seed pixel as X,Y (e.g. 12,8)
    #[arg(long)]
    pub at: String,

    /// Fill colour as a hex string (e.g. #39f or #3399FF)
    #[arg(long)]
    pub colour: String,

    /// Output file
    #[arg(long, short)]
    pub output: PathBuf,
}

pub fn run(args: FillArgs) -> Result<()> {
    let printer = Printer::new();

    let (x, y) = parse_point(&args.at)?;
    let colour = Rgb::from_hex(&args.colour)?;

    let mut buffer = load_buffer(&args.file)?;
    let filled = fill_region(&mut buffer, x, y, colour)?;

    buffer.save_png(&args.output)?;

    printer.status(
        "Filled",
        &format!(
            "{} with {} at ({}, {})",
            plural(filled, "pixel", "pixels"),
            colour,
            x,
            y
        ),
    );
    printer.status("Wrote", &display_path(&args.output));

    Ok(())
}
