//! RGBA pixel buffer, the surface the paint operations write through.

use std::path::Path;

use image::RgbaImage;

use crate::color::Rgb;
use crate::error::{DabError, Result};

/// A width × height RGBA surface, row-major, four bytes per pixel.
///
/// Reads hand back interned colours so callers can compare pixels by
/// identity; writes are always fully opaque. Out-of-bounds reads
/// return `None` and out-of-bounds writes are dropped, so stroke and
/// fill code can clip at the edge without pre-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer of opaque black pixels.
    ///
    /// Zero dimensions are coerced to 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgb::black())
    }

    /// Create a buffer filled with a colour.
    ///
    /// Zero dimensions are coerced to 1.
    pub fn filled(width: u32, height: u32, colour: Rgb) -> Self {
        let width = width.max(1);
        let height = height.max(1);

        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&colour.to_rgba());
        }

        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether a coordinate lies inside the buffer.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// The interned colour at a coordinate, or `None` out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if !self.in_bounds(x, y) {
            return None;
        }

        let i = self.index(x as u32, y as u32);
        Some(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Write a colour at a coordinate, fully opaque. Out-of-bounds
    /// writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, colour: Rgb) {
        if !self.in_bounds(x, y) {
            return;
        }

        let i = self.index(x as u32, y as u32);
        self.data[i..i + 4].copy_from_slice(&colour.to_rgba());
    }

    /// Copy an image into a new buffer. Alpha bytes are kept as-is;
    /// a degenerate zero-dimension image becomes a 1x1 black buffer.
    pub fn from_image(image: &RgbaImage) -> Self {
        if image.width() == 0 || image.height() == 0 {
            return Self::new(1, 1);
        }

        Self {
            width: image.width(),
            height: image.height(),
            data: image.as_raw().clone(),
        }
    }

    /// Copy the buffer into a new image.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .expect("buffer length matches dimensions")
    }

    /// Write the buffer to a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.to_image().save(path).map_err(|e| DabError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 4) as usize
    }
}
