//! Shared test doubles for the pattern player integration tests

#![allow(dead_code)] // Each test file uses a different subset

use std::collections::VecDeque;

use embedded_hal_async::delay::DelayNs;
use ring_pattern_player::{
    Duration, FrameSink, Mailbox, MailboxUnavailable, PatternMessage, RING_LEDS, Rgb,
};

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

// ============================================================================
// Virtual clock
// ============================================================================

/// Delay that returns immediately and records how long it was asked to wait
#[derive(Debug, Default)]
pub struct VirtualClock {
    pub elapsed_us: u64,
    pub delays_us: Vec<u64>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_us / 1000
    }

    fn advance(&mut self, us: u64) {
        self.elapsed_us += us;
        self.delays_us.push(us);
    }
}

impl DelayNs for VirtualClock {
    async fn delay_ns(&mut self, ns: u32) {
        self.advance(u64::from(ns) / 1000);
    }

    async fn delay_us(&mut self, us: u32) {
        self.advance(u64::from(us));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.advance(u64::from(ms) * 1000);
    }
}

// ============================================================================
// Recording sink
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkCall {
    Init,
    Clear,
    SetPixel(usize, Rgb),
    Show,
}

/// Sink that keeps a pixel buffer and records every call
#[derive(Debug)]
pub struct RecordingSink {
    pub pixels: [Rgb; RING_LEDS],
    pub calls: Vec<SinkCall>,
    pub shown: Vec<[Rgb; RING_LEDS]>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            pixels: [BLACK; RING_LEDS],
            calls: Vec::new(),
            shown: Vec::new(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    pub fn last_frame(&self) -> Option<&[Rgb; RING_LEDS]> {
        self.shown.last()
    }
}

impl FrameSink for RecordingSink {
    fn init(&mut self) {
        self.calls.push(SinkCall::Init);
    }

    fn clear(&mut self) {
        self.calls.push(SinkCall::Clear);
        self.pixels = [BLACK; RING_LEDS];
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.calls.push(SinkCall::SetPixel(index, color));
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.calls.push(SinkCall::Show);
        self.shown.push(self.pixels);
    }
}

// ============================================================================
// Scripted mailbox
// ============================================================================

/// Mailbox that replays a script; `None` entries and an exhausted script
/// behave like a poll timeout
#[derive(Debug, Default)]
pub struct ScriptedMailbox {
    pub script: VecDeque<Option<PatternMessage>>,
    pub timeouts: Vec<Duration>,
}

impl ScriptedMailbox {
    pub fn new(script: impl IntoIterator<Item = Option<PatternMessage>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            timeouts: Vec::new(),
        }
    }

    pub fn push(&mut self, message: PatternMessage) {
        self.script.push_back(Some(message));
    }
}

impl Mailbox for ScriptedMailbox {
    async fn receive(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<PatternMessage>, MailboxUnavailable> {
        self.timeouts.push(timeout);
        Ok(self.script.pop_front().flatten())
    }
}

// ============================================================================
// Player construction
// ============================================================================

pub type TestPlayer<'a, M> = ring_pattern_player::PatternPlayer<M, RecordingSink, &'a mut VirtualClock>;

/// Build a player with a recording sink and default configuration
pub fn player<M: Mailbox>(mailbox: M, clock: &mut VirtualClock) -> TestPlayer<'_, M> {
    ring_pattern_player::PatternPlayer::new(
        mailbox,
        RecordingSink::new(),
        clock,
        ring_pattern_player::PlayerConfig::default(),
    )
}
