//! dab - Pixel painting toolkit
//!
//! A library for pixel-art painting: extracts colour palettes from
//! images, flood-fills contiguous regions, and rasterizes strokes over
//! RGBA pixel buffers. Colours are interned so region membership and
//! palette dedup are identity comparisons.

pub mod cli;
pub mod color;
pub mod error;
pub mod output;
pub mod raster;

pub use color::{
    adjust_lightness, adjust_saturation, by_hue, by_luma, by_saturation, Palette, Rgb,
};
pub use error::{DabError, Result};
pub use raster::{fill_region, flood_fill, line, paint_stroke, FloodSurface, PixelBuffer};
