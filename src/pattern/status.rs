//! Persistent status ramps
//!
//! Both variants bring the center pixel up to full over a hundred steps.

use embassy_time::Duration;

use super::Pattern;
use crate::color::Brightness;

const STEPS: u32 = 100;
/// The ring joins in for the steps after this one
const RING_START_STEP: u32 = 90;
const STEP_DELAY: Duration = Duration::from_millis(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusVariant {
    /// Center ramps to full, ring glows faintly at the very end
    CenterWithRing,
    /// Only the center ramps, the ring is cleared once and left dark
    CenterOnly,
}

#[derive(Debug, Clone, Copy)]
pub struct StatusPattern {
    variant: StatusVariant,
}

impl StatusPattern {
    pub const fn new(variant: StatusVariant) -> Self {
        Self { variant }
    }

    pub const fn variant(&self) -> StatusVariant {
        self.variant
    }
}

impl Pattern for StatusPattern {
    fn steps(&self) -> u32 {
        STEPS
    }

    fn delay(&self, _step: u32) -> Duration {
        STEP_DELAY
    }

    fn drawn_pixels(&self, len: usize) -> usize {
        match self.variant {
            StatusVariant::CenterWithRing => len,
            StatusVariant::CenterOnly => len.min(1),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&self, step: u32, frame: &mut [Brightness]) {
        let (center, ring) = match self.variant {
            StatusVariant::CenterWithRing => {
                ((step + 1) as f32, step.saturating_sub(RING_START_STEP) as f32)
            }
            StatusVariant::CenterOnly => (step as f32, 0.0),
        };
        frame.fill(ring);
        if let Some(first) = frame.first_mut() {
            *first = center;
        }
    }
}
