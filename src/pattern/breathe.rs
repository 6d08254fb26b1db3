//! Breathing pattern
//!
//! The center and the outer ring dim at different rates ("breathe out"),
//! then come back up ("breathe in"), followed by a short rest.

use embassy_time::Duration;

use super::Pattern;
use crate::color::Brightness;

const PHASE_STEPS: u32 = 65;
/// Outer ring stays at full for this many steps of each phase
const RING_DELAY_STEPS: u32 = 20;
const OUT_DELAY: Duration = Duration::from_millis(25);
const IN_DELAY: Duration = Duration::from_millis(10);
const REST: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, Default)]
pub struct BreathePattern;

impl BreathePattern {
    /// Brightness dropped by the center and the ring after `k + 1` steps
    /// of a phase
    #[allow(clippy::cast_precision_loss)]
    fn drop_after(k: u32) -> (f32, f32) {
        let center = (k + 1) as f32;
        let ring = 2.0 * k.saturating_sub(RING_DELAY_STEPS) as f32;
        (center, ring)
    }

    /// Levels at the bottom of the breath
    fn bottom() -> (Brightness, Brightness) {
        let (center, ring) = Self::drop_after(PHASE_STEPS - 1);
        (100.0 - center, 100.0 - ring)
    }

    fn levels(step: u32) -> (Brightness, Brightness) {
        if step < PHASE_STEPS {
            let (center, ring) = Self::drop_after(step);
            (100.0 - center, 100.0 - ring)
        } else {
            let (center_low, ring_low) = Self::bottom();
            let (center, ring) = Self::drop_after(step - PHASE_STEPS);
            (center_low + center, ring_low + ring)
        }
    }
}

impl Pattern for BreathePattern {
    fn steps(&self) -> u32 {
        PHASE_STEPS * 2
    }

    fn delay(&self, step: u32) -> Duration {
        if step < PHASE_STEPS { OUT_DELAY } else { IN_DELAY }
    }

    fn render(&self, step: u32, frame: &mut [Brightness]) {
        let (center, ring) = Self::levels(step);
        frame.fill(ring);
        if let Some(first) = frame.first_mut() {
            *first = center;
        }
    }

    fn hold(&self) -> Duration {
        REST
    }
}
