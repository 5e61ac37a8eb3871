//! Paint operations: the gestures a pointer produces, applied to a
//! pixel buffer.
//!
//! A click becomes [`fill_region`], a drag becomes one [`paint_stroke`]
//! per pair of consecutive pointer samples.

use crate::color::Rgb;
use crate::error::{DabError, Result};

use super::buffer::PixelBuffer;
use super::fill::{flood_fill, FloodSurface};
use super::line::line;

/// Flood-fills a buffer region with a replacement colour, testing
/// membership against the captured source colour by identity.
struct RegionFill<'a> {
    buffer: &'a mut PixelBuffer,
    source: Rgb,
    replacement: Rgb,
    filled: usize,
}

impl FloodSurface for RegionFill<'_> {
    fn fillable(&self, x: i32, y: i32) -> bool {
        // Filled cells no longer match the source colour, which is
        // what stops the scan revisiting them.
        self.buffer.get(x, y) == Some(self.source)
    }

    fn fill(&mut self, x: i32, y: i32) {
        self.buffer.set(x, y, self.replacement);
        self.filled += 1;
    }
}

/// Fill the contiguous same-coloured region containing `(x, y)` with
/// `colour`, returning the number of pixels written.
///
/// The seed cell's colour defines the region: every 4-connected pixel
/// holding the identical canonical colour is replaced. Filling a
/// region that already has the target colour is a no-op (returns 0)
/// rather than an infinite self-feeding scan. A seed outside the
/// buffer is an error.
pub fn fill_region(buffer: &mut PixelBuffer, x: i32, y: i32, colour: Rgb) -> Result<usize> {
    let source = buffer.get(x, y).ok_or(DabError::Bounds {
        x,
        y,
        width: buffer.width(),
        height: buffer.height(),
    })?;

    if source == colour {
        return Ok(0);
    }

    let (width, height) = (buffer.width(), buffer.height());
    let mut region = RegionFill {
        buffer,
        source,
        replacement: colour,
        filled: 0,
    };

    flood_fill(&mut region, x, y, width, height);

    Ok(region.filled)
}

/// Paint a straight stroke segment from `from` to `to`, returning the
/// number of pixels written.
///
/// Pixels falling outside the buffer are clipped silently, matching
/// what a drag that leaves the surface should do.
pub fn paint_stroke(
    buffer: &mut PixelBuffer,
    from: (i32, i32),
    to: (i32, i32),
    colour: Rgb,
) -> usize {
    let mut painted = 0;

    line(from.0, from.1, to.0, to.1, |x, y| {
        if buffer.in_bounds(x, y) {
            buffer.set(x, y, colour);
            painted += 1;
        }
    });

    painted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_region_replaces_connected_colour() {
        // Left half white, right half black, wall between.
        let mut buffer = PixelBuffer::filled(4, 2, Rgb::white());
        buffer.set(2, 0, Rgb::black());
        buffer.set(2, 1, Rgb::black());

        let filled = fill_region(&mut buffer, 0, 0, Rgb::new(255, 0, 0)).unwrap();

        assert_eq!(filled, 4);
        assert_eq!(buffer.get(0, 0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(buffer.get(1, 1), Some(Rgb::new(255, 0, 0)));
        assert_eq!(buffer.get(2, 0), Some(Rgb::black()));
        // Right of the wall is unreachable.
        assert_eq!(buffer.get(3, 0), Some(Rgb::white()));
    }

    #[test]
    fn test_fill_region_whole_buffer() {
        let mut buffer = PixelBuffer::filled(8, 8, Rgb::black());

        let filled = fill_region(&mut buffer, 4, 4, Rgb::white()).unwrap();

        assert_eq!(filled, 64);
        assert_eq!(buffer.get(0, 0), Some(Rgb::white()));
        assert_eq!(buffer.get(7, 7), Some(Rgb::white()));
    }

    #[test]
    fn test_fill_region_same_colour_is_noop() {
        let mut buffer = PixelBuffer::filled(4, 4, Rgb::white());

        let filled = fill_region(&mut buffer, 1, 1, Rgb::white()).unwrap();

        assert_eq!(filled, 0);
    }

    #[test]
    fn test_fill_region_out_of_bounds_seed() {
        let mut buffer = PixelBuffer::new(4, 4);

        assert!(fill_region(&mut buffer, -1, 0, Rgb::white()).is_err());
        assert!(fill_region(&mut buffer, 0, 4, Rgb::white()).is_err());
    }

    #[test]
    fn test_paint_stroke_draws_segment() {
        let mut buffer = PixelBuffer::new(5, 5);

        let painted = paint_stroke(&mut buffer, (0, 0), (4, 0), Rgb::white());

        assert_eq!(painted, 5);
        for x in 0..5 {
            assert_eq!(buffer.get(x, 0), Some(Rgb::white()));
        }
        assert_eq!(buffer.get(0, 1), Some(Rgb::black()));
    }

    #[test]
    fn test_paint_stroke_clips_at_edges() {
        let mut buffer = PixelBuffer::new(3, 3);

        let painted = paint_stroke(&mut buffer, (-2, 1), (5, 1), Rgb::white());

        assert_eq!(painted, 3);
        assert_eq!(buffer.get(0, 1), Some(Rgb::white()));
        assert_eq!(buffer.get(2, 1), Some(Rgb::white()));
    }

    #[test]
    fn test_paint_stroke_single_sample() {
        let mut buffer = PixelBuffer::new(3, 3);

        let painted = paint_stroke(&mut buffer, (1, 1), (1, 1), Rgb::white());

        assert_eq!(painted, 1);
        assert_eq!(buffer.get(1, 1), Some(Rgb::white()));
    }
}
