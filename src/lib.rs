//! Pattern playback engine for addressable LED indicator rings.
//!
//! Producers push [`PatternMessage`]s into a bounded [`PatternChannel`]; a
//! single [`PatternPlayer`] task receives them, picks the color (fresh or
//! carried over), plays the requested animation on a [`FrameSink`] and
//! replays the last pattern on idle timeouts when the message allowed it.
//!
//! # Usage
//!
//! ```ignore
//! static PATTERNS: PatternChannel = PatternChannel::new();
//!
//! #[embassy_executor::task]
//! async fn ring_task(sink: SmartLedsSink<Ws2812, RING_LEDS>) {
//!     let mailbox = ChannelMailbox::new(PATTERNS.receiver(), Delay);
//!     let mut player: PatternPlayer<_, _, _> =
//!         PatternPlayer::new(mailbox, sink, Delay, PlayerConfig::default());
//!     player.run().await
//! }
//!
//! // Anywhere else
//! let message = PatternMessage::new(PatternId::Flash, Rgb::new(255, 0, 0), false);
//! let _ = PATTERNS.sender().try_send(message);
//! ```
#![no_std]

pub mod color;
pub mod error;
pub mod mailbox;
pub mod message;
pub mod pattern;
pub mod player;
pub mod sink;

pub use error::PlayerError;
pub use mailbox::{
    ChannelMailbox, Mailbox, MailboxUnavailable, PatternChannel, PatternReceiver, PatternSender,
};
pub use message::PatternMessage;
pub use pattern::{Pattern, PatternId, PatternSlot, RING_LEDS};
pub use player::{Cycle, PatternPlayer, PlayerConfig, PlayerState};
pub use sink::{ColorOrder, FrameSink, SmartLedsSink};

pub use color::{Brightness, Hsv, Rgb};
pub use embassy_time::Duration;
