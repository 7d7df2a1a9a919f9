//! Shared view state: window size + cursor
//!
//! W and the cursor are changed and read together. The registry keeps one
//! `ViewState` behind a single lock, so every channel in a refresh sees the
//! same W, mode and offset.

use crate::buffer::ChannelBuffer;
use crate::error::ConfigError;
use crate::protocol::constants::{MAX_WINDOW_SIZE, MIN_WINDOW_SIZE};

use super::cursor::{max_offset, HistoryCursor, ViewMode};

/// Check a requested window size against the accepted range
pub fn validate_window_size(window_size: usize) -> Result<usize, ConfigError> {
    if (MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&window_size) {
        Ok(window_size)
    } else {
        Err(ConfigError::WindowSizeOutOfRange(window_size))
    }
}

/// Window size and history cursor
#[derive(Debug, Clone)]
pub struct ViewState {
    window_size: usize,
    cursor: HistoryCursor,
}

impl ViewState {
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            cursor: HistoryCursor::new(),
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn cursor(&self) -> &HistoryCursor {
        &self.cursor
    }

    pub fn mode(&self) -> ViewMode {
        self.cursor.mode()
    }

    /// Valid scrub range, `(0, max_offset)`
    pub fn history_range(&self, max_history_len: usize) -> (usize, usize) {
        (0, max_offset(max_history_len, self.window_size))
    }

    /// Change W and keep the cursor inside the new range
    ///
    /// The caller resizes the channel buffers while holding the same lock.
    pub fn set_window_size(&mut self, window_size: usize, max_history_len: usize) {
        self.window_size = window_size;
        self.cursor
            .clamp(max_offset(max_history_len, window_size));
    }

    pub fn enter_live(&mut self) -> bool {
        self.cursor.start()
    }

    pub fn enter_history(&mut self, max_history_len: usize) -> bool {
        self.cursor.stop(max_history_len, self.window_size)
    }

    pub fn scrub(&mut self, offset: usize, max_history_len: usize) -> Option<usize> {
        self.cursor.scrub(offset, max_history_len, self.window_size)
    }

    /// The W values of `buffer` the renderer should see
    pub fn visible_window(&self, buffer: &ChannelBuffer) -> Vec<f32> {
        match self.cursor.mode() {
            ViewMode::Live => buffer.window().to_vec(),
            ViewMode::History => buffer.history_slice(self.cursor.offset(), self.window_size),
        }
    }
}
