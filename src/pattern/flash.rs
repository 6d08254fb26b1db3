//! Solid fills: blinking flash and instant off

use embassy_time::Duration;

use super::Pattern;
use crate::color::Brightness;

const FLASH_CYCLES: u32 = 2;

/// Fills the whole ring on and off, twice per playback
#[derive(Debug, Clone, Copy)]
pub struct FlashPattern {
    /// Length of each on and each off phase
    half_period: Duration,
}

impl FlashPattern {
    pub const fn new(half_period: Duration) -> Self {
        Self { half_period }
    }
}

impl Pattern for FlashPattern {
    fn steps(&self) -> u32 {
        FLASH_CYCLES * 2
    }

    fn delay(&self, _step: u32) -> Duration {
        self.half_period
    }

    fn render(&self, step: u32, frame: &mut [Brightness]) {
        let level = if step.is_multiple_of(2) { 100.0 } else { 0.0 };
        frame.fill(level);
    }
}

/// Turns every pixel off in a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct OffPattern;

impl Pattern for OffPattern {
    fn steps(&self) -> u32 {
        1
    }

    fn delay(&self, _step: u32) -> Duration {
        Duration::from_ticks(0)
    }

    fn render(&self, _step: u32, frame: &mut [Brightness]) {
        frame.fill(0.0);
    }
}
