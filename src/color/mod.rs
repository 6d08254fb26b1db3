mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{rgb_to_hsv, scale_channel, scale_color};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Brightness percentage, nominally 0-100
///
/// Values above 100 are allowed and saturate each channel when scaled.
pub type Brightness = f32;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
