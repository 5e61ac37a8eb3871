//! Colour identity and palette model.
//!
//! Colours are interned: one canonical instance per channel triple,
//! compared by identity. Palettes are immutable ordered views over
//! those canonical colours.

mod adjust;
mod palette;
mod rgb;

pub use adjust::{adjust_lightness, adjust_saturation};
pub use palette::Palette;
pub use rgb::{by_hue, by_luma, by_saturation, Rgb};
