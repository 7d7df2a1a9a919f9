//! Live/history cursor
//!
//! One cursor is shared by every channel:
//!
//! ```text
//!            stop()
//!   ┌──────┐ ───────────► ┌─────────┐
//!   │ Live │              │ History │ ◄── scrub(offset)
//!   └──────┘ ◄─────────── └─────────┘
//!            start()
//! ```
//!
//! In history mode the visible window of every channel is
//! `history[offset..offset + W]`. The valid range is `0..=max_offset` with
//! `max_offset = max(0, longest_history - W)`. Receivers keep appending
//! while the view is frozen, so the range keeps growing but the offset only
//! moves when the user scrubs.

/// Which window the renderer sees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Each channel's sliding window
    Live,
    /// A frozen slice of each channel's history log
    History,
}

/// Largest valid history offset
pub fn max_offset(max_history_len: usize, window_size: usize) -> usize {
    max_history_len.saturating_sub(window_size)
}

/// Mode and scrub position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCursor {
    mode: ViewMode,
    offset: usize,
}

impl HistoryCursor {
    /// A cursor in live mode
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Live,
            offset: 0,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_history(&self) -> bool {
        self.mode == ViewMode::History
    }

    /// Current offset; only meaningful in history mode
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Resume live viewing
    ///
    /// Returns false if already live.
    pub fn start(&mut self) -> bool {
        if self.mode == ViewMode::Live {
            return false;
        }
        self.mode = ViewMode::Live;
        true
    }

    /// Freeze the view on the most recent window
    ///
    /// Returns false if already in history mode; the frozen offset is kept.
    pub fn stop(&mut self, max_history_len: usize, window_size: usize) -> bool {
        if self.mode == ViewMode::History {
            return false;
        }
        self.mode = ViewMode::History;
        self.offset = max_offset(max_history_len, window_size);
        true
    }

    /// Move to `offset`, clamped to the valid range
    ///
    /// Ignored in live mode. Returns the new offset otherwise.
    pub fn scrub(
        &mut self,
        offset: usize,
        max_history_len: usize,
        window_size: usize,
    ) -> Option<usize> {
        if self.mode != ViewMode::History {
            return None;
        }
        self.offset = offset.min(max_offset(max_history_len, window_size));
        Some(self.offset)
    }

    /// Pull the offset back inside `0..=max_offset`
    ///
    /// Needed after the window grows, which shrinks the valid range.
    pub fn clamp(&mut self, max_offset: usize) {
        self.offset = self.offset.min(max_offset);
    }
}

impl Default for HistoryCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let cursor = HistoryCursor::new();
        assert_eq!(cursor.mode(), ViewMode::Live);
        assert!(!cursor.is_history());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_max_offset() {
        assert_eq!(max_offset(1000, 200), 800);
        assert_eq!(max_offset(150, 200), 0);
        assert_eq!(max_offset(0, 1), 0);
    }

    #[test]
    fn test_stop_freezes_at_latest_window() {
        let mut cursor = HistoryCursor::new();
        assert!(cursor.stop(1000, 200));
        assert!(cursor.is_history());
        assert_eq!(cursor.offset(), 800);
    }

    #[test]
    fn test_stop_with_short_history() {
        let mut cursor = HistoryCursor::new();
        cursor.stop(50, 200);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_stop_twice_keeps_offset() {
        let mut cursor = HistoryCursor::new();
        cursor.stop(1000, 200);
        cursor.scrub(10, 1000, 200);

        assert!(!cursor.stop(5000, 200));
        assert_eq!(cursor.offset(), 10);
    }

    #[test]
    fn test_offset_frozen_while_history_grows() {
        let mut cursor = HistoryCursor::new();
        cursor.stop(1000, 200);

        // More samples arrive; the range grows but the cursor does not move
        let range_end = max_offset(1500, 200);
        assert_eq!(range_end, 1300);
        assert_eq!(cursor.offset(), 800);
    }

    #[test]
    fn test_scrub_clamps_to_range() {
        let mut cursor = HistoryCursor::new();
        cursor.stop(1000, 200);

        assert_eq!(cursor.scrub(5000, 1000, 200), Some(800));
        assert_eq!(cursor.offset(), 800);

        assert_eq!(cursor.scrub(0, 1000, 200), Some(0));
        assert_eq!(cursor.scrub(123, 1000, 200), Some(123));
    }

    #[test]
    fn test_scrub_ignored_in_live_mode() {
        let mut cursor = HistoryCursor::new();
        assert_eq!(cursor.scrub(10, 1000, 200), None);
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.mode(), ViewMode::Live);
    }

    #[test]
    fn test_start_returns_to_live() {
        let mut cursor = HistoryCursor::new();
        assert!(!cursor.start());

        cursor.stop(10, 5);
        assert!(cursor.start());
        assert_eq!(cursor.mode(), ViewMode::Live);
    }

    #[test]
    fn test_clamp_after_window_growth() {
        let mut cursor = HistoryCursor::new();
        cursor.stop(1000, 200);
        assert_eq!(cursor.offset(), 800);

        cursor.clamp(max_offset(1000, 600));
        assert_eq!(cursor.offset(), 400);
    }
}
