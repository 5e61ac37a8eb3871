//! Ordered, duplicate-free colour palettes.
//!
//! A palette is built once (from a pixel buffer, or any colour
//! iterator) and never mutated; every derived view returns a new
//! palette. Order is significant: it is the first-occurrence order of
//! the raster scan, and it maps directly to swatch position.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::ops::Bound;
use std::ops::RangeBounds;

use crate::raster::PixelBuffer;

use super::rgb::{by_luma, Rgb};

/// An ordered collection of distinct colours.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colours: Vec<Rgb>,
}

impl Palette {
    /// Extract the palette of a pixel buffer.
    ///
    /// Scans row-major (y outer, x inner) and keeps each colour the
    /// first time it appears, so the palette order is deterministic
    /// for a given buffer. Alpha is ignored.
    pub fn from_buffer(buffer: &PixelBuffer) -> Self {
        let mut seen = HashSet::new();
        let mut colours = Vec::new();

        for y in 0..buffer.height() as i32 {
            for x in 0..buffer.width() as i32 {
                let colour = buffer
                    .get(x, y)
                    .expect("in-bounds scan coordinate");

                if seen.insert(colour) {
                    colours.push(colour);
                }
            }
        }

        Self { colours }
    }

    /// Number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check whether the palette has no colours.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Get a colour by palette index.
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colours.get(index).copied()
    }

    /// Iterate over the colours in palette order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colours.iter().copied()
    }

    /// The colours as a slice.
    pub fn colours(&self) -> &[Rgb] {
        &self.colours
    }

    /// A new palette sorted by the given comparator (stable).
    pub fn sorted_by(&self, mut compare: impl FnMut(Rgb, Rgb) -> Ordering) -> Self {
        let mut colours = self.colours.clone();
        colours.sort_by(|a, b| compare(*a, *b));
        Self { colours }
    }

    /// A new palette keeping only colours the predicate accepts.
    pub fn filter(&self, mut predicate: impl FnMut(Rgb) -> bool) -> Self {
        Self {
            colours: self.iter().filter(|&c| predicate(c)).collect(),
        }
    }

    /// A new palette with every colour transformed.
    ///
    /// Outputs are canonical by construction (every `Rgb` is interned),
    /// but a mapper that collapses two colours leaves repeated entries;
    /// this is not a deduplicating constructor.
    pub fn map(&self, mut f: impl FnMut(Rgb) -> Rgb) -> Self {
        Self {
            colours: self.iter().map(&mut f).collect(),
        }
    }

    /// A new palette covering a half-open index range, clamped to the
    /// palette length.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Self {
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n + 1,
            Bound::Excluded(&n) => n,
            Bound::Unbounded => self.len(),
        };

        let start = start.min(self.len());
        let end = end.clamp(start, self.len());

        Self {
            colours: self.colours[start..end].to_vec(),
        }
    }

    /// Split the palette into dark and light halves by luma.
    ///
    /// A sorted copy (ascending luma) decides membership: the first
    /// ⌈n/2⌉ entries are dark, the rest light. Both outputs keep the
    /// *original* palette order, not the sorted order. An odd-length
    /// palette puts the extra colour in the dark half.
    pub fn split_by_luma(&self) -> (Self, Self) {
        let half = self.len().div_ceil(2);
        let sorted = self.sorted_by(by_luma);

        let dark_set: HashSet<Rgb> = sorted.iter().take(half).collect();

        let dark = self.filter(|c| dark_set.contains(&c));
        let light = self.filter(|c| !dark_set.contains(&c));

        (dark, light)
    }

    /// Render the palette as a swatch grid.
    ///
    /// Each colour becomes a `scale`×`scale` cell; cells wrap after
    /// `columns` per row (defaulting to the palette length, one row).
    /// `scale` and `columns` are coerced to a minimum of 1. Grid cells
    /// past the last colour keep the buffer background.
    pub fn swatch(&self, scale: u32, columns: Option<u32>) -> PixelBuffer {
        let scale = scale.max(1);
        let columns = columns.unwrap_or(self.len() as u32).max(1);
        let rows = (self.len() as u32).div_ceil(columns);

        let mut buffer = PixelBuffer::new(columns * scale, rows * scale);

        for (i, colour) in self.iter().enumerate() {
            let cx = i as u32 % columns;
            let ry = i as u32 / columns;

            for sy in 0..scale {
                for sx in 0..scale {
                    buffer.set((cx * scale + sx) as i32, (ry * scale + sy) as i32, colour);
                }
            }
        }

        buffer
    }
}

impl FromIterator<Rgb> for Palette {
    /// Collect colours, keeping the first occurrence of each.
    fn from_iter<T: IntoIterator<Item = Rgb>>(iter: T) -> Self {
        let mut seen = HashSet::new();
        let mut colours = Vec::new();

        for colour in iter {
            if seen.insert(colour) {
                colours.push(colour);
            }
        }

        Self { colours }
    }
}
