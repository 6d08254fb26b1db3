//! Pattern commands sent to the player
//!
//! Producers (button handlers, network handlers, status events) build a
//! [`PatternMessage`] and push it into the pattern mailbox. They only say
//! *what* to show; the player decides how it is rendered.

use crate::color::{BLACK, Rgb};
use crate::pattern::PatternId;

/// A request to play a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMessage {
    /// Raw pattern code, see [`PatternId`]
    pub pattern: u16,
    /// Color to render with, ignored when `use_previous_color` is set
    pub color: Rgb,
    /// Render with the color of the last message that carried one
    pub use_previous_color: bool,
    /// Replay this pattern on every poll timeout until a new message arrives
    pub allow_replay: bool,
    /// Informational flag, never read by the player
    pub played: bool,
}

impl PatternMessage {
    /// Initial "last message" of a freshly started player
    pub const OFF: Self = Self::from_raw(PatternId::Off.as_u16(), BLACK, false);

    /// Create a message for a known pattern with its own color
    pub const fn new(pattern: PatternId, color: Rgb, allow_replay: bool) -> Self {
        Self::from_raw(pattern.as_u16(), color, allow_replay)
    }

    /// Create a message that reuses the player's previous color
    pub const fn with_previous_color(pattern: PatternId, allow_replay: bool) -> Self {
        Self {
            use_previous_color: true,
            ..Self::from_raw(pattern.as_u16(), BLACK, allow_replay)
        }
    }

    /// Create a message from a raw pattern code
    ///
    /// The code is not validated here; the player reports unknown codes.
    pub const fn from_raw(pattern: u16, color: Rgb, allow_replay: bool) -> Self {
        Self {
            pattern,
            color,
            use_previous_color: false,
            allow_replay,
            played: false,
        }
    }

    /// Resolve the raw code into a known pattern
    pub const fn pattern_id(&self) -> Option<PatternId> {
        PatternId::from_raw(self.pattern)
    }
}
