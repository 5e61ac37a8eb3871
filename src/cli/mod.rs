pub mod completions;
pub mod fill;
pub mod palette;
pub mod stroke;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::error::{DabError, Result};
use crate::raster::PixelBuffer;

/// dab - Pixel painting toolkit
#[derive(Parser, Debug)]
#[command(name = "dab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract and transform the colour palette of an image
    Palette(palette::PaletteArgs),

    /// Flood-fill a region of an image with a colour
    Fill(fill::FillArgs),

    /// Draw a straight stroke on an image
    Stroke(stroke::StrokeArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Parse an "X,Y" coordinate pair.
pub(crate) fn parse_point(s: &str) -> Result<(i32, i32)> {
    let parts: Vec<&str> = s.splitn(2, ',').collect();
    if parts.len() != 2 {
        return Err(DabError::Parse {
            message: format!("Invalid point '{}': expected X,Y (e.g. 12,8)", s),
            help: Some("Use the format X,Y, for example: 12,8".to_string()),
        });
    }

    let x: i32 = parts[0].trim().parse().map_err(|_| DabError::Parse {
        message: format!("Invalid x coordinate '{}' in point '{}'", parts[0], s),
        help: Some("Coordinates must be integers".to_string()),
    })?;

    let y: i32 = parts[1].trim().parse().map_err(|_| DabError::Parse {
        message: format!("Invalid y coordinate '{}' in point '{}'", parts[1], s),
        help: Some("Coordinates must be integers".to_string()),
    })?;

    Ok((x, y))
}

/// Decode an image file into a pixel buffer.
pub(crate) fn load_buffer(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .map_err(|e| DabError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgba8();

    Ok(PixelBuffer::from_image(&img))
}
