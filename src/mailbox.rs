//! Bounded command mailbox for `no_std` environments.
//!
//! A simple FIFO channel (multi-sender safe) built on `critical-section` and
//! `heapless::Deque`, plus the [`Mailbox`] trait the player consumes.
//! A full channel rejects new values; queued values are never overwritten.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use heapless::Deque;

use crate::message::PatternMessage;

/// Default number of queued pattern commands.
pub const DEFAULT_MAILBOX_SIZE: usize = 4;

/// Default interval between mailbox polls while waiting for a command.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Convert a duration to whole microseconds for `DelayNs`, saturating at
/// `u32::MAX`
pub(crate) fn delay_micros(duration: Duration) -> u32 {
    u32::try_from(duration.as_micros()).unwrap_or(u32::MAX)
}

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Error returned by a mailbox whose queue is not attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailboxUnavailable;

/// A bounded, thread-safe channel.
///
/// This channel uses critical sections for synchronization, making it suitable
/// for sharing between tasks and interrupt handlers. The channel is backed by
/// a fixed-size `heapless::Deque`.
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Try to send a value into the channel.
    ///
    /// Returns `Err(TrySendError(value))` if the channel is full.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(TrySendError)
        })
    }

    /// Try to receive the oldest value from the channel.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued values
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == SIZE
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    /// Try to send a value into the channel.
    ///
    /// Returns `Err(TrySendError(value))` if the channel is full. The caller
    /// decides whether to retry.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }
}

/// A receiver handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    /// Try to receive a value from the channel.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }
}

/// Type alias for the pattern channel
pub type PatternChannel<const SIZE: usize = DEFAULT_MAILBOX_SIZE> = Channel<PatternMessage, SIZE>;

/// Type alias for pattern sender
pub type PatternSender<'a, const SIZE: usize = DEFAULT_MAILBOX_SIZE> =
    Sender<'a, PatternMessage, SIZE>;

/// Type alias for pattern receiver
pub type PatternReceiver<'a, const SIZE: usize = DEFAULT_MAILBOX_SIZE> =
    Receiver<'a, PatternMessage, SIZE>;

/// Source of pattern commands for the player
pub trait Mailbox {
    /// Wait up to `timeout` for the next command
    ///
    /// Resolves to `Ok(None)` when the timeout elapses with nothing queued.
    fn receive(
        &mut self,
        timeout: Duration,
    ) -> impl Future<Output = Result<Option<PatternMessage>, MailboxUnavailable>>;
}

/// A mailbox slot that may not be attached yet
impl<M: Mailbox> Mailbox for Option<M> {
    async fn receive(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<PatternMessage>, MailboxUnavailable> {
        match self {
            Some(mailbox) => mailbox.receive(timeout).await,
            None => Err(MailboxUnavailable),
        }
    }
}

/// [`Mailbox`] over a [`Channel`] receiver
///
/// Waits by polling the queue, yielding to the executor through `delay`
/// between attempts.
pub struct ChannelMailbox<'a, D, const SIZE: usize = DEFAULT_MAILBOX_SIZE> {
    receiver: PatternReceiver<'a, SIZE>,
    delay: D,
    poll_interval: Duration,
}

impl<'a, D: DelayNs, const SIZE: usize> ChannelMailbox<'a, D, SIZE> {
    pub const fn new(receiver: PatternReceiver<'a, SIZE>, delay: D) -> Self {
        Self {
            receiver,
            delay,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the interval between polls
    #[must_use]
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

impl<D: DelayNs, const SIZE: usize> Mailbox for ChannelMailbox<'_, D, SIZE> {
    async fn receive(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<PatternMessage>, MailboxUnavailable> {
        let mut waited = Duration::from_ticks(0);
        loop {
            if let Ok(message) = self.receiver.try_receive() {
                return Ok(Some(message));
            }
            if waited >= timeout {
                return Ok(None);
            }
            // Zero-length polls would never advance the wait
            let step = self
                .poll_interval
                .min(timeout - waited)
                .max(Duration::from_ticks(1));
            self.delay.delay_us(delay_micros(step)).await;
            waited += step;
        }
    }
}
