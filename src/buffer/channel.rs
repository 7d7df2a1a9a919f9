//! Channel buffer: sliding window + history log

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

use super::history::HistoryLog;
use super::window::SlidingWindow;

/// Buffer shared between a channel's receiver and the refresh loop
pub type SharedBuffer = Arc<RwLock<ChannelBuffer>>;

/// Sample storage for one channel
#[derive(Debug)]
pub struct ChannelBuffer {
    window: SlidingWindow,
    history: HistoryLog,
    last_append_at: Option<Instant>,
}

impl ChannelBuffer {
    /// Create an empty buffer with a zero-filled window of `window_size`
    pub fn new(window_size: usize) -> Self {
        Self {
            window: SlidingWindow::new(window_size),
            history: HistoryLog::new(),
            last_append_at: None,
        }
    }

    /// Create a buffer wrapped for sharing with a receiver task
    pub fn shared(window_size: usize) -> SharedBuffer {
        Arc::new(RwLock::new(Self::new(window_size)))
    }

    /// Append one sample to both the window and the history log
    pub fn append(&mut self, sample: f32) {
        self.window.push(sample);
        self.history.push(sample);
        self.last_append_at = Some(Instant::now());
    }

    /// Append a batch of samples in order
    pub fn extend(&mut self, samples: &[f32]) {
        if samples.is_empty() {
            return;
        }
        for &sample in samples {
            self.window.push(sample);
        }
        self.history.extend_from_slice(samples);
        self.last_append_at = Some(Instant::now());
    }

    /// Change the sliding-window capacity; history is untouched
    pub fn resize(&mut self, window_size: usize) {
        self.window.resize(window_size);
    }

    /// See [`HistoryLog::slice`]
    pub fn history_slice(&self, offset: usize, length: usize) -> Vec<f32> {
        self.history.slice(offset, length)
    }

    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Total samples ever appended
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn window_size(&self) -> usize {
        self.window.capacity()
    }

    /// When the most recent sample arrived
    pub fn last_append_at(&self) -> Option<Instant> {
        self.last_append_at
    }
}
