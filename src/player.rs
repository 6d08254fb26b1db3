use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Brightness, Rgb, scale_color};
use crate::error::PlayerError;
use crate::mailbox::{Mailbox, delay_micros};
use crate::message::PatternMessage;
use crate::pattern::{Pattern, PatternId, RING_LEDS};
use crate::sink::FrameSink;

/// Default time to wait for a command before considering a replay
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(10);

/// Shortest receive timeout and unavailable-mailbox back-off
///
/// Keeps every failing or idle cycle awaiting at least once.
pub const MIN_POLL_TIMEOUT: Duration = Duration::from_millis(1);

/// Default number of consecutive mailbox failures between two reports
pub const DEFAULT_UNAVAILABLE_REPORT_INTERVAL: u32 = 100;

/// Configuration for the pattern player
#[derive(Debug, Clone, Copy)]
pub struct PlayerConfig {
    /// How long a single receive waits before the replay check, raised to
    /// [`MIN_POLL_TIMEOUT`] when shorter
    pub poll_timeout: Duration,
    /// Report every n-th consecutive "mailbox unavailable" failure
    pub unavailable_report_interval: u32,
}

impl PlayerConfig {
    /// Receive timeout actually used by the player
    pub fn effective_poll_timeout(&self) -> Duration {
        self.poll_timeout.max(MIN_POLL_TIMEOUT)
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: DEFAULT_POLL_TIMEOUT,
            unavailable_report_interval: DEFAULT_UNAVAILABLE_REPORT_INTERVAL,
        }
    }
}

/// State carried between cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    /// Last color taken from a message, used for replays and
    /// `use_previous_color` messages
    pub previous_color: Rgb,
    /// Last message consumed from the mailbox
    pub last_message: PatternMessage,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            previous_color: BLACK,
            last_message: PatternMessage::OFF,
        }
    }
}

/// What a single player cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// A new message was received and its pattern played
    Played(PatternId),
    /// Nothing arrived, the last pattern was played again
    Replayed(PatternId),
    /// Nothing arrived and nothing was replayed
    Idle,
}

/// Rate limiter for repeated mailbox failures
#[derive(Debug, Clone, Copy)]
pub struct ErrorThrottle {
    interval: u32,
    streak: u32,
}

impl ErrorThrottle {
    pub const fn new(interval: u32) -> Self {
        Self {
            interval: if interval == 0 { 1 } else { interval },
            streak: 0,
        }
    }

    /// Register a failure, returns whether it should be reported
    pub fn should_report(&mut self) -> bool {
        let report = self.streak.is_multiple_of(self.interval);
        self.streak = self.streak.wrapping_add(1);
        report
    }

    /// Forget the current streak of failures
    pub fn reset(&mut self) {
        self.streak = 0;
    }

    pub const fn streak(&self) -> u32 {
        self.streak
    }
}

/// Pattern player - the single consumer of pattern commands
///
/// Owns the frame sink exclusively. Each cycle waits for one command, plays
/// it to completion and goes back to the mailbox; a pattern that has started
/// is never interrupted.
pub struct PatternPlayer<M, S, D, const N: usize = RING_LEDS> {
    // External dependencies and configuration
    mailbox: M,
    sink: S,
    delay: D,
    config: PlayerConfig,

    // Internal state
    state: PlayerState,
    frame: [Brightness; N],
    throttle: ErrorThrottle,
}

impl<M, S, D, const N: usize> PatternPlayer<M, S, D, N>
where
    M: Mailbox,
    S: FrameSink,
    D: DelayNs,
{
    /// Create a new player
    ///
    /// Initializes and clears the sink before any state is created.
    pub fn new(mailbox: M, mut sink: S, delay: D, config: PlayerConfig) -> Self {
        sink.init();
        sink.clear();
        Self {
            mailbox,
            sink,
            delay,
            config,
            state: PlayerState::default(),
            frame: [0.0; N],
            throttle: ErrorThrottle::new(config.unavailable_report_interval),
        }
    }

    /// Run the player forever
    ///
    /// Errors are reported and the loop continues.
    pub async fn run(&mut self) -> ! {
        loop {
            if let Err(err) = self.cycle().await {
                self.report(err);
            }
        }
    }

    /// Perform one receive-and-render cycle
    pub async fn cycle(&mut self) -> Result<Cycle, PlayerError> {
        let timeout = self.config.effective_poll_timeout();
        let received = match self.mailbox.receive(timeout).await {
            Ok(received) => received,
            Err(err) => {
                // Back off instead of spinning on a missing mailbox
                self.sleep(timeout).await;
                return Err(err.into());
            }
        };
        self.throttle.reset();

        match received {
            Some(message) => self.consume(message).await.map(Cycle::Played),
            None if self.state.last_message.allow_replay => {
                let last = self.state.last_message;
                self.play(last.pattern, self.state.previous_color)
                    .await
                    .map(Cycle::Replayed)
            }
            None => Ok(Cycle::Idle),
        }
    }

    /// Play a pattern by raw code to completion
    pub async fn play(&mut self, code: u16, color: Rgb) -> Result<PatternId, PlayerError> {
        let id = PatternId::from_raw(code).ok_or(PlayerError::UnknownPattern(code))?;
        let pattern = id.to_slot();
        let drawn = pattern.drawn_pixels(N).min(N);
        if drawn < N {
            self.sink.clear();
        }

        for step in 0..pattern.steps() {
            pattern.render(step, &mut self.frame);
            for (index, level) in self.frame.iter().take(drawn).enumerate() {
                self.sink.set_pixel(index, scale_color(color, *level));
            }
            self.sink.show();
            self.sleep(pattern.delay(step)).await;
        }
        self.sleep(pattern.hold()).await;

        Ok(id)
    }

    pub const fn state(&self) -> &PlayerState {
        &self.state
    }

    pub const fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn mailbox_mut(&mut self) -> &mut M {
        &mut self.mailbox
    }

    /// Consecutive mailbox failures reported since the last successful
    /// receive
    pub const fn unavailable_streak(&self) -> u32 {
        self.throttle.streak()
    }

    /// Report an error, throttling repeated mailbox failures
    ///
    /// Returns whether the error was emitted.
    pub fn report(&mut self, err: PlayerError) -> bool {
        let emit = match err {
            PlayerError::MailboxUnavailable => self.throttle.should_report(),
            PlayerError::UnknownPattern(_) => true,
        };

        #[cfg(feature = "esp32-log")]
        if emit {
            match err {
                PlayerError::MailboxUnavailable => println!(
                    "[PatternPlayer] {} ({} consecutive failures)",
                    err,
                    self.throttle.streak()
                ),
                PlayerError::UnknownPattern(_) => println!("[PatternPlayer] {}", err),
            }
        }

        emit
    }

    /// Play a freshly received message and fold it into the state
    async fn consume(&mut self, message: PatternMessage) -> Result<PatternId, PlayerError> {
        let result = if message.use_previous_color {
            self.play(message.pattern, self.state.previous_color).await
        } else {
            let result = self.play(message.pattern, message.color).await;
            self.state.previous_color = message.color;
            result
        };
        self.state.last_message = message;

        result
    }

    async fn sleep(&mut self, duration: Duration) {
        let micros = delay_micros(duration);
        if micros > 0 {
            self.delay.delay_us(micros).await;
        }
    }
}
