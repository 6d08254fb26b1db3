//! Circle-in pattern
//!
//! A comet runs around the outer ring twice. Its tail grows every step, so
//! the ring fills in as it goes; on the second lap the center fades in too.

use embassy_time::Duration;

use super::{Pattern, comet, position};
use crate::color::Brightness;

/// Length of one lap in virtual position units, one unit per step
const CIRCUMFERENCE: u32 = 600;
const LAPS: u32 = 2;
/// Tail length at step 0, non-zero so the first frame is defined
const INITIAL_TRAILING: f32 = 0.0001;
const TRAILING_GROWTH: f32 = 0.5;
const STEP_DELAY: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, Default)]
pub struct CircleInPattern;

impl CircleInPattern {
    /// Shortest distance between two positions on the circular track
    #[allow(clippy::cast_possible_wrap)]
    fn circular_distance(a: i32, b: i32) -> i32 {
        let direct = (a - b).abs();
        direct.min(CIRCUMFERENCE as i32 - direct)
    }

    #[allow(clippy::cast_precision_loss)]
    fn trailing(step: u32) -> f32 {
        INITIAL_TRAILING + TRAILING_GROWTH * step as f32
    }
}

impl Pattern for CircleInPattern {
    fn steps(&self) -> u32 {
        CIRCUMFERENCE * LAPS
    }

    fn delay(&self, _step: u32) -> Duration {
        STEP_DELAY
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
    fn render(&self, step: u32, frame: &mut [Brightness]) {
        let lap = step / CIRCUMFERENCE;
        let head = (step % CIRCUMFERENCE) as i32;
        let trailing = Self::trailing(step);

        for (index, level) in frame.iter_mut().enumerate().skip(1) {
            let distance = Self::circular_distance(position(index), head);
            *level = comet(distance as f32, trailing);
        }

        if let Some(center) = frame.first_mut() {
            *center = if lap == 0 {
                0.0
            } else {
                head as f32 / CIRCUMFERENCE as f32 * 100.0
            };
        }
    }
}
