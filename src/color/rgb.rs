//! Interned RGB colour type.
//!
//! Every distinct channel triple maps to a single canonical allocation
//! in a process-wide registry, so colour equality is a pointer
//! comparison. The flood fill's region test and the palette's
//! membership sets both lean on this.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::error::{DabError, Result};

/// Registry of canonical colours, keyed by the packed triple
/// `r<<16 | g<<8 | b`. Entries live for the process lifetime.
static REGISTRY: OnceLock<Mutex<HashMap<u32, &'static (u8, u8, u8)>>> = OnceLock::new();

/// An interned, immutable RGB colour.
///
/// `Rgb::new` always returns the canonical instance for a channel
/// triple, so two `Rgb` values compare equal exactly when they were
/// built from the same channels, in O(1).
#[derive(Clone, Copy)]
pub struct Rgb(&'static (u8, u8, u8));

impl Rgb {
    /// Get the canonical colour for a channel triple, interning it on
    /// first use.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        let key = (r as u32) << 16 | (g as u32) << 8 | b as u32;

        let mut registry = REGISTRY
            .get_or_init(|| Mutex::new(HashMap::new()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let entry = registry
            .entry(key)
            .or_insert_with(|| Box::leak(Box::new((r, g, b))));

        Self(entry)
    }

    /// Black.
    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// White.
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB` (3 digits, expanded to 6) and `#RRGGBB`; the
    /// leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        match hex.len() {
            3 => {
                let r = parse_hex_digit(hex.chars().next().unwrap())?;
                let g = parse_hex_digit(hex.chars().nth(1).unwrap())?;
                let b = parse_hex_digit(hex.chars().nth(2).unwrap())?;
                Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(DabError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB or #RRGGBB format".to_string()),
            }),
        }
    }

    /// Red channel.
    pub fn r(self) -> u8 {
        self.0 .0
    }

    /// Green channel.
    pub fn g(self) -> u8 {
        self.0 .1
    }

    /// Blue channel.
    pub fn b(self) -> u8 {
        self.0 .2
    }

    /// The channel triple.
    pub fn channels(self) -> (u8, u8, u8) {
        *self.0
    }

    /// RGBA bytes at full opacity, for buffer writes.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), 255]
    }

    /// Perceptual luma: `0.299·R + 0.587·G + 0.114·B`.
    pub fn luma(self) -> f32 {
        0.299 * self.r() as f32 + 0.587 * self.g() as f32 + 0.114 * self.b() as f32
    }

    /// HSL hue in degrees, rounded to the nearest integer in 0–360.
    /// Greys (zero chroma) report hue 0.
    pub fn hue(self) -> u16 {
        let (r, g, b) = self.channels();
        let (r, g, b) = (r as f32, g as f32, b as f32);

        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let delta = max - min;

        if delta == 0.0 {
            return 0;
        }

        let mut hue = if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };

        hue *= 60.0;

        if hue < 0.0 {
            hue += 360.0;
        }

        hue.round() as u16
    }

    /// HSL saturation in 0.0–1.0. Greys report 0.
    pub fn saturation(self) -> f32 {
        let (r, g, b) = self.channels();
        let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);

        let min = r.min(g).min(b);
        let max = r.max(g).max(b);

        hsl_saturation(min, max)
    }

    /// Saturation as computed by older builds, which dropped the green
    /// channel when finding the maximum. Kept so output sorted with the
    /// old measure can be reproduced; prefer [`Rgb::saturation`].
    pub fn saturation_legacy(self) -> f32 {
        let (r, g, b) = self.channels();
        let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);

        let min = r.min(g).min(b);
        let max = r.max(b).max(b);

        hsl_saturation(min, max)
    }
}

fn hsl_saturation(min: f32, max: f32) -> f32 {
    let delta = max - min;
    let lightness = (min + max) / 2.0;
    let denom = 1.0 - (2.0 * lightness - 1.0).abs();

    // Black and white have no chroma range to saturate.
    if denom == 0.0 {
        return 0.0;
    }

    delta / denom
}

/// Order two colours by ascending luma.
pub fn by_luma(a: Rgb, b: Rgb) -> Ordering {
    a.luma().total_cmp(&b.luma())
}

/// Order two colours by ascending hue.
pub fn by_hue(a: Rgb, b: Rgb) -> Ordering {
    a.hue().cmp(&b.hue())
}

/// Order two colours by ascending saturation.
pub fn by_saturation(a: Rgb, b: Rgb) -> Ordering {
    a.saturation().total_cmp(&b.saturation())
}

impl PartialEq for Rgb {
    fn eq(&self, other: &Self) -> bool {
        // Interning guarantees one allocation per triple.
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for Rgb {}

impl Hash for Rgb {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.0 as *const (u8, u8, u8) as usize).hash(state);
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.channels();
        write!(f, "Rgb({}, {}, {})", r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r(), self.g(), self.b())
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| DabError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| DabError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
