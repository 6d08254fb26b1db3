//! Frame sink abstraction
//!
//! The player never touches hardware directly. It sets pixels on a
//! [`FrameSink`] and asks it to show the buffered frame.

use smart_leds::SmartLedsWrite;

use crate::color::{BLACK, Rgb};

/// Abstract LED ring driver
///
/// Implement this trait to support different hardware platforms.
/// The pattern player is generic over this trait.
pub trait FrameSink {
    /// Prepare the hardware, called once before the first frame
    fn init(&mut self) {}

    /// Reset every buffered pixel to black
    fn clear(&mut self);

    /// Set a buffered pixel, out-of-range indices are ignored
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Push the buffered pixels to the LEDs
    fn show(&mut self);
}

/// Channel order expected by the LED chips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    #[default]
    Rgb,
    /// Red and green swapped on the wire
    Grb,
}

impl ColorOrder {
    /// Reorder channels so the writer emits them in wire order
    pub const fn apply(self, color: Rgb) -> Rgb {
        match self {
            Self::Rgb => color,
            Self::Grb => Rgb {
                r: color.g,
                g: color.r,
                b: color.b,
            },
        }
    }
}

/// [`FrameSink`] on top of any `smart-leds` writer
///
/// Keeps a frame buffer of `N` pixels and writes it out on [`FrameSink::show`].
pub struct SmartLedsSink<W, const N: usize> {
    writer: W,
    order: ColorOrder,
    buffer: [Rgb; N],
}

impl<W, const N: usize> SmartLedsSink<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W, order: ColorOrder) -> Self {
        Self {
            writer,
            order,
            buffer: [BLACK; N],
        }
    }

    /// Buffered pixels in logical (RGB) order
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.buffer
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W, const N: usize> FrameSink for SmartLedsSink<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn clear(&mut self) {
        self.buffer = [BLACK; N];
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.buffer.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        let order = self.order;
        let _ = self
            .writer
            .write(self.buffer.iter().map(|color| order.apply(*color)));
    }
}
