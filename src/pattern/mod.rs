//! Pattern catalog with compile-time known variants
//!
//! Every pattern is a pure function from a step index to a brightness frame,
//! paired with a delay per step. Patterns hold no state between steps, so the
//! same step always produces the same frame. The player walks the steps and
//! does the sleeping.
//!
//! LED index 0 is the center pixel, the rest form the outer ring. Ring
//! positions are expressed in "virtual position" units of 100 per LED.

mod breathe;
mod circle;
mod fade_in;
mod flash;
mod status;
mod sweep;

use embassy_time::Duration;
pub use breathe::BreathePattern;
pub use circle::CircleInPattern;
pub use fade_in::FadeInPattern;
pub use flash::{FlashPattern, OffPattern};
pub use status::{StatusPattern, StatusVariant};
pub use sweep::{SweepPattern, SweepVariant};

use crate::color::Brightness;

/// Default number of pixels on the ring, center included
pub const RING_LEDS: usize = 7;

/// Distance between two neighbouring LEDs in virtual position units
pub(crate) const LED_SPACING: i32 = 100;

const PATTERN_NAME_FADE_IN: &str = "fade_in";
const PATTERN_NAME_OFF: &str = "off";
const PATTERN_NAME_LOADING: &str = "loading";
const PATTERN_NAME_LOADING_LONG: &str = "loading_long";
const PATTERN_NAME_LOAD_IN: &str = "load_in";
const PATTERN_NAME_LOAD_OUT: &str = "load_out";
const PATTERN_NAME_BREATHE: &str = "breathe";
const PATTERN_NAME_CIRCLE_IN: &str = "circle_in";
const PATTERN_NAME_FLASH: &str = "flash";
const PATTERN_NAME_FLASH_FAST: &str = "flash_fast";
const PATTERN_NAME_PERSIST_STATUS_1: &str = "persist_status_1";
const PATTERN_NAME_PERSIST_STATUS_2: &str = "persist_status_2";

const PATTERN_ID_FADE_IN: u16 = 100;
const PATTERN_ID_OFF: u16 = 200;
const PATTERN_ID_LOADING: u16 = 300;
const PATTERN_ID_LOADING_LONG: u16 = 310;
const PATTERN_ID_LOAD_IN: u16 = 320;
const PATTERN_ID_LOAD_OUT: u16 = 330;
const PATTERN_ID_BREATHE: u16 = 400;
const PATTERN_ID_CIRCLE_IN: u16 = 500;
const PATTERN_ID_FLASH: u16 = 600;
const PATTERN_ID_FLASH_FAST: u16 = 610;
const PATTERN_ID_PERSIST_STATUS_1: u16 = 700;
const PATTERN_ID_PERSIST_STATUS_2: u16 = 701;

pub trait Pattern {
    /// Number of frames in one playback
    fn steps(&self) -> u32;

    /// Pause after the frame of `step` has been shown
    fn delay(&self, step: u32) -> Duration;

    /// Fill `frame` with the brightness of every LED at `step`
    fn render(&self, step: u32, frame: &mut [Brightness]);

    /// Number of pixels the pattern draws, counted from the center
    ///
    /// Pixels past this count are cleared once before the first frame and
    /// left alone afterwards.
    fn drawn_pixels(&self, len: usize) -> usize {
        len
    }

    /// Extra pause after the last frame
    fn hold(&self) -> Duration {
        Duration::from_ticks(0)
    }

    /// Total time one playback takes
    fn duration(&self) -> Duration {
        (0..self.steps()).fold(self.hold(), |total, step| total + self.delay(step))
    }
}

/// Known pattern codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum PatternId {
    FadeIn = PATTERN_ID_FADE_IN,
    Off = PATTERN_ID_OFF,
    Loading = PATTERN_ID_LOADING,
    LoadingLong = PATTERN_ID_LOADING_LONG,
    LoadIn = PATTERN_ID_LOAD_IN,
    LoadOut = PATTERN_ID_LOAD_OUT,
    Breathe = PATTERN_ID_BREATHE,
    CircleIn = PATTERN_ID_CIRCLE_IN,
    Flash = PATTERN_ID_FLASH,
    FlashFast = PATTERN_ID_FLASH_FAST,
    PersistStatus1 = PATTERN_ID_PERSIST_STATUS_1,
    PersistStatus2 = PATTERN_ID_PERSIST_STATUS_2,
}

impl PatternId {
    pub const ALL: [Self; 12] = [
        Self::FadeIn,
        Self::Off,
        Self::Loading,
        Self::LoadingLong,
        Self::LoadIn,
        Self::LoadOut,
        Self::Breathe,
        Self::CircleIn,
        Self::Flash,
        Self::FlashFast,
        Self::PersistStatus1,
        Self::PersistStatus2,
    ];

    pub const fn from_raw(value: u16) -> Option<Self> {
        Some(match value {
            PATTERN_ID_FADE_IN => Self::FadeIn,
            PATTERN_ID_OFF => Self::Off,
            PATTERN_ID_LOADING => Self::Loading,
            PATTERN_ID_LOADING_LONG => Self::LoadingLong,
            PATTERN_ID_LOAD_IN => Self::LoadIn,
            PATTERN_ID_LOAD_OUT => Self::LoadOut,
            PATTERN_ID_BREATHE => Self::Breathe,
            PATTERN_ID_CIRCLE_IN => Self::CircleIn,
            PATTERN_ID_FLASH => Self::Flash,
            PATTERN_ID_FLASH_FAST => Self::FlashFast,
            PATTERN_ID_PERSIST_STATUS_1 => Self::PersistStatus1,
            PATTERN_ID_PERSIST_STATUS_2 => Self::PersistStatus2,
            _ => return None,
        })
    }

    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    pub const fn to_slot(self) -> PatternSlot {
        match self {
            Self::FadeIn => PatternSlot::FadeIn(FadeInPattern),
            Self::Off => PatternSlot::Off(OffPattern),
            Self::Loading => PatternSlot::Sweep(SweepPattern::new(SweepVariant::Loading)),
            Self::LoadingLong => {
                PatternSlot::Sweep(SweepPattern::new(SweepVariant::LoadingLong))
            }
            Self::LoadIn => PatternSlot::Sweep(SweepPattern::new(SweepVariant::LoadIn)),
            Self::LoadOut => PatternSlot::Sweep(SweepPattern::new(SweepVariant::LoadOut)),
            Self::Breathe => PatternSlot::Breathe(BreathePattern),
            Self::CircleIn => PatternSlot::CircleIn(CircleInPattern),
            Self::Flash => PatternSlot::Flash(FlashPattern::new(Duration::from_millis(500))),
            Self::FlashFast => {
                PatternSlot::Flash(FlashPattern::new(Duration::from_millis(200)))
            }
            Self::PersistStatus1 => {
                PatternSlot::Status(StatusPattern::new(StatusVariant::CenterWithRing))
            }
            Self::PersistStatus2 => {
                PatternSlot::Status(StatusPattern::new(StatusVariant::CenterOnly))
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FadeIn => PATTERN_NAME_FADE_IN,
            Self::Off => PATTERN_NAME_OFF,
            Self::Loading => PATTERN_NAME_LOADING,
            Self::LoadingLong => PATTERN_NAME_LOADING_LONG,
            Self::LoadIn => PATTERN_NAME_LOAD_IN,
            Self::LoadOut => PATTERN_NAME_LOAD_OUT,
            Self::Breathe => PATTERN_NAME_BREATHE,
            Self::CircleIn => PATTERN_NAME_CIRCLE_IN,
            Self::Flash => PATTERN_NAME_FLASH,
            Self::FlashFast => PATTERN_NAME_FLASH_FAST,
            Self::PersistStatus1 => PATTERN_NAME_PERSIST_STATUS_1,
            Self::PersistStatus2 => PATTERN_NAME_PERSIST_STATUS_2,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

/// Pattern slot - enum containing all renderers
#[derive(Debug, Clone)]
pub enum PatternSlot {
    FadeIn(FadeInPattern),
    Off(OffPattern),
    /// Comet sweeps across the ring (loading, load in/out)
    Sweep(SweepPattern),
    Breathe(BreathePattern),
    CircleIn(CircleInPattern),
    /// Full on/off blinking
    Flash(FlashPattern),
    /// Center-first status ramps
    Status(StatusPattern),
}

impl PatternSlot {
    fn as_pattern(&self) -> &dyn Pattern {
        match self {
            Self::FadeIn(pattern) => pattern,
            Self::Off(pattern) => pattern,
            Self::Sweep(pattern) => pattern,
            Self::Breathe(pattern) => pattern,
            Self::CircleIn(pattern) => pattern,
            Self::Flash(pattern) => pattern,
            Self::Status(pattern) => pattern,
        }
    }
}

impl Pattern for PatternSlot {
    fn steps(&self) -> u32 {
        self.as_pattern().steps()
    }

    fn delay(&self, step: u32) -> Duration {
        self.as_pattern().delay(step)
    }

    fn render(&self, step: u32, frame: &mut [Brightness]) {
        self.as_pattern().render(step, frame);
    }

    fn drawn_pixels(&self, len: usize) -> usize {
        self.as_pattern().drawn_pixels(len)
    }

    fn hold(&self) -> Duration {
        self.as_pattern().hold()
    }
}

/// Brightness of a triangular comet at `distance` from its head
///
/// Full at the head, fading linearly to zero at `trailing` units away.
#[inline]
pub(crate) fn comet(distance: f32, trailing: f32) -> Brightness {
    libm::fmaxf(100.0 - libm::fabsf(distance) * 100.0 / trailing, 0.0)
}

/// Virtual position of the LED at `index`
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) const fn position(index: usize) -> i32 {
    index as i32 * LED_SPACING
}
