//! Reconnect policy
//!
//! Every connection attempt ends, one way or another, and the receiver then
//! asks the policy how long to wait before the next attempt. Attempts never
//! stop while the receiver is running.

use std::time::Duration;

use crate::error::Error;
use crate::protocol::constants::DEFAULT_RETRY_DELAY;

/// How a connection attempt ended
#[derive(Debug)]
pub enum AttemptEnd<'a> {
    /// Peer closed the connection on a frame boundary
    Closed,
    /// Connect, read or framing failure
    Failed(&'a Error),
}

/// Delay between connection attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    delay: Duration,
}

impl RetryPolicy {
    /// Wait the same `delay` after every attempt
    pub fn fixed(delay: Duration) -> Self {
        Self { delay }
    }

    /// Delay before the attempt following `end`
    pub fn delay_after(&self, end: AttemptEnd<'_>) -> Duration {
        match end {
            AttemptEnd::Closed | AttemptEnd::Failed(_) => self.delay,
        }
    }

    /// The configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(DEFAULT_RETRY_DELAY)
    }
}
