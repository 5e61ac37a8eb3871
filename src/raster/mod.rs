//! Raster editing primitives.
//!
//! The pixel buffer is the surface; `line` and `flood_fill` are the
//! primitives; `paint` wires pointer gestures to both.

mod buffer;
mod fill;
mod line;
mod paint;

pub use buffer::PixelBuffer;
pub use fill::{flood_fill, FloodSurface};
pub use line::line;
pub use paint::{fill_region, paint_stroke};
