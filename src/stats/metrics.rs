//! Receiver health counters
//!
//! Connection failures never reach the caller; they are retried forever.
//! These counters are the only way to tell a channel that is down from a
//! channel whose source is simply quiet.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Counters updated by a channel's receiver
///
/// Shared across restarts, so totals cover the channel's whole lifetime.
#[derive(Debug, Default)]
pub struct ReceiverStats {
    connected: AtomicBool,
    connect_attempts: AtomicU64,
    sessions: AtomicU64,
    framing_errors: AtomicU64,
    samples_received: AtomicU64,
}

impl ReceiverStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_attempt(&self) {
        self.connect_attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_connected(&self) {
        self.sessions.fetch_add(1, Ordering::Relaxed);
        self.connected.store(true, Ordering::Relaxed);
    }

    pub(crate) fn record_disconnected(&self) {
        self.connected.store(false, Ordering::Relaxed);
    }

    pub(crate) fn record_framing_error(&self) {
        self.framing_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_samples(&self, count: usize) {
        self.samples_received
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Whether a connection is currently established
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    pub fn connect_attempts(&self) -> u64 {
        self.connect_attempts.load(Ordering::Relaxed)
    }

    /// Number of connections that were established
    pub fn sessions(&self) -> u64 {
        self.sessions.load(Ordering::Relaxed)
    }

    pub fn framing_errors(&self) -> u64 {
        self.framing_errors.load(Ordering::Relaxed)
    }

    pub fn samples_received(&self) -> u64 {
        self.samples_received.load(Ordering::Relaxed)
    }

    /// Point-in-time view, combined with the buffer's last append time
    pub fn health(&self, last_sample_at: Option<Instant>) -> ChannelHealth {
        ChannelHealth {
            connected: self.is_connected(),
            connect_attempts: self.connect_attempts(),
            sessions: self.sessions(),
            framing_errors: self.framing_errors(),
            samples_received: self.samples_received(),
            last_sample_age: last_sample_at.map(|at| at.elapsed()),
        }
    }
}

/// Health of one channel as seen by the refresh loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelHealth {
    /// A connection is currently established
    pub connected: bool,
    /// Connection attempts made, successful or not
    pub connect_attempts: u64,
    /// Connections that were established
    pub sessions: u64,
    /// Connections ended by an incomplete frame
    pub framing_errors: u64,
    /// Samples appended to the buffer
    pub samples_received: u64,
    /// Time since the most recent sample (None if nothing arrived yet)
    pub last_sample_age: Option<Duration>,
}

impl ChannelHealth {
    /// No sample arrived within `threshold`
    pub fn is_stale(&self, threshold: Duration) -> bool {
        match self.last_sample_age {
            Some(age) => age > threshold,
            None => true,
        }
    }
}
