//! Channel entry
//!
//! This module defines the per-channel record stored in the registry: the
//! buffer, the running receiver and the display attributes live together.

use std::sync::Arc;

use crate::buffer::SharedBuffer;
use crate::client::{ChannelReceiver, Endpoint};
use crate::stats::ReceiverStats;

use super::color::Color;
use super::key::ChannelKey;

/// Entry for a single channel in the registry
#[derive(Debug)]
pub struct ChannelEntry {
    /// Channel identity
    pub key: ChannelKey,

    /// Where the receiver connects
    pub endpoint: Endpoint,

    /// Line color for the renderer
    pub color: Color,

    /// Whether the renderer should draw this channel
    pub visible: bool,

    /// Sample storage, reused across receiver restarts
    pub(super) buffer: SharedBuffer,

    /// Health counters, reused across receiver restarts
    pub(super) stats: Arc<ReceiverStats>,

    /// Running receiver (None once stopped)
    pub(super) receiver: Option<ChannelReceiver>,
}

impl ChannelEntry {
    pub(super) fn new(
        key: ChannelKey,
        endpoint: Endpoint,
        color: Color,
        buffer: SharedBuffer,
    ) -> Self {
        Self {
            key,
            endpoint,
            color,
            visible: true,
            buffer,
            stats: Arc::new(ReceiverStats::new()),
            receiver: None,
        }
    }

    /// Whether a receiver task is running for this channel
    pub fn is_running(&self) -> bool {
        self.receiver.as_ref().map_or(false, |r| !r.is_finished())
    }

    pub fn buffer(&self) -> &SharedBuffer {
        &self.buffer
    }

    pub fn stats(&self) -> &Arc<ReceiverStats> {
        &self.stats
    }
}
