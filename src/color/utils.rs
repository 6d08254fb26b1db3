use crate::color::{Brightness, Hsv, Rgb};

/// Scale a single channel by a brightness percentage
///
/// The result is truncated toward zero and saturates to `0..=255`, so
/// negative or overdriven brightness never wraps.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_channel(value: u8, brightness: Brightness) -> u8 {
    (f32::from(value) * brightness / 100.0) as u8
}

/// Scale every channel of a color by a brightness percentage
#[inline]
pub fn scale_color(color: Rgb, brightness: Brightness) -> Rgb {
    Rgb {
        r: scale_channel(color.r, brightness),
        g: scale_channel(color.g, brightness),
        b: scale_channel(color.b, brightness),
    }
}

/// Hue, saturation and value of a color
///
/// Hue is expressed in 1/256 turns of the color wheel, red at 0, rounded to
/// the nearest unit.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    if max == min {
        return Hsv {
            hue: 0,
            sat: 0,
            val: max,
        };
    }

    let (r, g, b) = (f32::from(rgb.r), f32::from(rgb.g), f32::from(rgb.b));
    let chroma = f32::from(max - min);
    let sixths = if max == rgb.r {
        (g - b) / chroma
    } else if max == rgb.g {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };
    let turns = libm::roundf(sixths / 6.0 * 256.0);

    Hsv {
        hue: libm::fmodf(turns + 256.0, 256.0) as u8,
        sat: libm::roundf(chroma * 255.0 / f32::from(max)) as u8,
        val: max,
    }
}
