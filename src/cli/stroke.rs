//! Stroke command implementation.
//!
//! Draws a straight stroke between two points on a PNG and writes the
//! result.

use std::path::PathBuf;

use clap::Args;

use crate::color::Rgb;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::raster::paint_stroke;

use super::{load_buffer, parse_point};

/// Draw a straight stroke on an image
#[derive(Args, Debug)]
pub struct StrokeArgs {
    /// Image file to draw on
    #[arg(required = true)]
    pub file: PathBuf,

    /// Start point as X,Y
    #[arg(long)]
    pub from: String,

    /// End point as X,Y
    #[arg(long)]
    pub to: String,

    /// Stroke colour as a hex string (e.g. #39f or #3399FF)
    #[arg(long)]
    pub colour: String,

    /// Output file
    #[arg(long, short)]
    pub output: PathBuf,
}

pub fn run(args: StrokeArgs) -> Result<()> {
    let printer = Printer::new();

    let from = parse_point(&args.from)?;
    let to = parse_point(&args.to)?;
    let colour = Rgb::from_hex(&args.colour)?;

    let mut buffer = load_buffer(&args.file)?;
    let painted = paint_stroke(&mut buffer, from, to, colour);

    if painted == 0 {
        printer.warning(
            "Warning",
            &format!(
                "Stroke from ({}, {}) to ({}, {}) lies entirely outside the image",
                from.0, from.1, to.0, to.1
            ),
        );
    }

    buffer.save_png(&args.output)?;

    printer.status(
        "Painted",
        &format!("{} with {}", plural(painted, "pixel", "pixels"), colour),
    );
    printer.status("Wrote", &display_path(&args.output));

    Ok(())
}
