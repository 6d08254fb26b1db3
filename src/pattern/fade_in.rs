//! Fade-in with a short overshoot
//!
//! Ramps every pixel from dark past full brightness, then eases back down
//! to full. Overdriven steps saturate per channel.

use embassy_time::Duration;

use super::Pattern;
use crate::color::Brightness;

const RAMP_STEPS: u32 = 120;
const SETTLE_STEPS: u32 = 20;
const RAMP_DELAY: Duration = Duration::from_millis(3);
const SETTLE_DELAY: Duration = Duration::from_millis(4);

#[derive(Debug, Clone, Copy, Default)]
pub struct FadeInPattern;

impl FadeInPattern {
    #[allow(clippy::cast_precision_loss)]
    fn level(step: u32) -> Brightness {
        if step < RAMP_STEPS {
            step as f32
        } else {
            // 120 down to 101
            (2 * RAMP_STEPS - step) as f32
        }
    }
}

impl Pattern for FadeInPattern {
    fn steps(&self) -> u32 {
        RAMP_STEPS + SETTLE_STEPS
    }

    fn delay(&self, step: u32) -> Duration {
        if step < RAMP_STEPS {
            RAMP_DELAY
        } else {
            SETTLE_DELAY
        }
    }

    fn render(&self, step: u32, frame: &mut [Brightness]) {
        frame.fill(Self::level(step));
    }
}
