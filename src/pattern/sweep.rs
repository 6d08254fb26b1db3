//! Comet sweeps across the ring
//!
//! A triangular comet head travels along the virtual position axis, one unit
//! per step. Variants differ in which pixels they touch and in what a pixel
//! shows once the head has passed it.

use embassy_time::Duration;

use super::{Pattern, comet, position};
use crate::color::Brightness;

const STEP_DELAY: Duration = Duration::from_millis(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepVariant {
    /// Comet over the outer ring, center dark
    Loading,
    /// Same as `Loading` with a much longer tail
    LoadingLong,
    /// Pixels light up as the head approaches and stay lit
    LoadIn,
    /// Ring starts lit and pixels go dark behind the head
    LoadOut,
}

/// Comet sweep pattern
#[derive(Debug, Clone, Copy)]
pub struct SweepPattern {
    variant: SweepVariant,
    /// Head position of the first step
    start: i32,
    /// Head position after the last step (exclusive)
    end: i32,
    /// Tail length in virtual position units
    trailing: f32,
}

impl SweepPattern {
    pub const fn new(variant: SweepVariant) -> Self {
        let (start, end, trailing) = match variant {
            SweepVariant::Loading | SweepVariant::LoadOut => (-50, 760, 150.0),
            SweepVariant::LoadingLong => (-600, 1300, 500.0),
            SweepVariant::LoadIn => (-150, 760, 150.0),
        };
        Self {
            variant,
            start,
            end,
            trailing,
        }
    }

    pub const fn variant(&self) -> SweepVariant {
        self.variant
    }

    #[allow(clippy::cast_possible_wrap)]
    const fn head(&self, step: u32) -> i32 {
        self.start + step as i32
    }

    #[allow(clippy::cast_precision_loss)]
    fn comet_at(&self, index: usize, head: i32) -> Brightness {
        comet((position(index) - head) as f32, self.trailing)
    }
}

impl Pattern for SweepPattern {
    #[allow(clippy::cast_sign_loss)]
    fn steps(&self) -> u32 {
        (self.end - self.start) as u32
    }

    fn delay(&self, _step: u32) -> Duration {
        STEP_DELAY
    }

    fn render(&self, step: u32, frame: &mut [Brightness]) {
        let head = self.head(step);
        for (index, level) in frame.iter_mut().enumerate() {
            let pos = position(index);
            *level = match self.variant {
                SweepVariant::Loading | SweepVariant::LoadingLong => {
                    if index == 0 {
                        0.0
                    } else {
                        self.comet_at(index, head)
                    }
                }
                // Freeze at the last value drawn before the head reached it
                SweepVariant::LoadIn => self.comet_at(index, head.min(pos - 1)),
                SweepVariant::LoadOut => {
                    if pos < head {
                        self.comet_at(index, head)
                    } else {
                        100.0
                    }
                }
            };
        }
    }
}
