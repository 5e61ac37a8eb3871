//! HSL-space colour adjustment.
//!
//! Lighten/darken and saturate/desaturate move a colour through HSL
//! relative to the remaining range, so repeated small adjustments
//! converge on the extreme instead of clipping past it. Outputs are
//! re-interned.

use palette::{Hsl, IntoColor, Srgb};

use super::rgb::Rgb;

/// Adjust lightness by a signed percentage (-100..=100).
///
/// Positive values move toward white, negative toward black, each
/// relative to the remaining distance.
pub fn adjust_lightness(colour: Rgb, percent: f32) -> Rgb {
    let mut hsl = to_hsl(colour);

    let delta = percent / 100.0;
    if delta > 0.0 {
        hsl.lightness += (1.0 - hsl.lightness) * delta;
    } else {
        hsl.lightness += hsl.lightness * delta;
    }
    hsl.lightness = hsl.lightness.clamp(0.0, 1.0);

    from_hsl(hsl)
}

/// Adjust saturation by a signed percentage (-100..=100).
pub fn adjust_saturation(colour: Rgb, percent: f32) -> Rgb {
    let mut hsl = to_hsl(colour);

    let delta = percent / 100.0;
    if delta > 0.0 {
        hsl.saturation += (1.0 - hsl.saturation) * delta;
    } else {
        hsl.saturation += hsl.saturation * delta;
    }
    hsl.saturation = hsl.saturation.clamp(0.0, 1.0);

    from_hsl(hsl)
}

fn to_hsl(colour: Rgb) -> Hsl {
    let rgb: Srgb<f32> = Srgb::new(
        colour.r() as f32 / 255.0,
        colour.g() as f32 / 255.0,
        colour.b() as f32 / 255.0,
    );
    rgb.into_color()
}

fn from_hsl(hsl: Hsl) -> Rgb {
    let rgb: Srgb<f32> = hsl.into_color();
    Rgb::new(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten_moves_toward_white() {
        let grey = Rgb::new(128, 128, 128);
        let lighter = adjust_lightness(grey, 50.0);

        assert!(lighter.luma() > grey.luma());
    }

    #[test]
    fn test_darken_moves_toward_black() {
        let grey = Rgb::new(128, 128, 128);
        let darker = adjust_lightness(grey, -50.0);

        assert!(darker.luma() < grey.luma());
    }

    #[test]
    fn test_lighten_full_reaches_white() {
        assert_eq!(adjust_lightness(Rgb::new(40, 90, 130), 100.0), Rgb::white());
    }

    #[test]
    fn test_darken_full_reaches_black() {
        assert_eq!(adjust_lightness(Rgb::new(40, 90, 130), -100.0), Rgb::black());
    }

    #[test]
    fn test_adjust_zero_is_near_identity() {
        // HSL round-trips through f32, so allow one step per channel.
        fn close(a: Rgb, b: Rgb) -> bool {
            a.r().abs_diff(b.r()) <= 1
                && a.g().abs_diff(b.g()) <= 1
                && a.b().abs_diff(b.b()) <= 1
        }

        let c = Rgb::new(12, 200, 34);
        assert!(close(adjust_lightness(c, 0.0), c));
        assert!(close(adjust_saturation(c, 0.0), c));
    }

    #[test]
    fn test_desaturate_full_is_grey() {
        let flat = adjust_saturation(Rgb::new(200, 40, 40), -100.0);
        let (r, g, b) = flat.channels();

        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}
