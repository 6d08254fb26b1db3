use core::fmt;

use crate::mailbox::MailboxUnavailable;

/// Failures reported by the pattern player
///
/// None of them are fatal: the player reports the error and keeps looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    /// The command mailbox is not attached
    MailboxUnavailable,
    /// A message carried a pattern code outside the catalog
    UnknownPattern(u16),
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MailboxUnavailable => f.write_str("pattern mailbox is unavailable"),
            Self::UnknownPattern(code) => write!(f, "unrecognized LED pattern {}", code),
        }
    }
}

impl core::error::Error for PlayerError {}

impl From<MailboxUnavailable> for PlayerError {
    fn from(_: MailboxUnavailable) -> Self {
        Self::MailboxUnavailable
    }
}
