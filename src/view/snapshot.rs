//! Per-refresh snapshots
//!
//! Building a snapshot is a pure function of a buffer, the view state and a
//! channel's display attributes. The timer that decides when to build one
//! lives in the registry.

use crate::buffer::ChannelBuffer;
use crate::registry::{ChannelKey, Color, Group};
use crate::stats::{ChannelHealth, WindowStats};

use super::cursor::ViewMode;
use super::state::ViewState;

/// What the renderer draws for one channel in one refresh
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Channel this snapshot belongs to
    pub key: ChannelKey,
    /// Exactly W values, oldest first
    pub points: Vec<f32>,
    /// Stats over `points`
    pub stats: WindowStats,
    /// Whether the renderer should draw the channel
    pub visible: bool,
    /// Line color
    pub color: Color,
    /// Receiver health
    pub health: ChannelHealth,
}

impl Snapshot {
    /// Capture the visible window of `buffer` under `view`
    pub fn capture(
        key: ChannelKey,
        visible: bool,
        color: Color,
        buffer: &ChannelBuffer,
        view: &ViewState,
        health: ChannelHealth,
    ) -> Self {
        let points = view.visible_window(buffer);
        let stats = WindowStats::from_window(&points).unwrap_or_default();

        Self {
            key,
            points,
            stats,
            visible,
            color,
            health,
        }
    }
}

/// Every channel's snapshot for one refresh, taken under one view
#[derive(Debug, Clone)]
pub struct RefreshFrame {
    /// Live or history
    pub mode: ViewMode,
    /// W at the time of the refresh
    pub window_size: usize,
    /// Cursor offset, in history mode
    pub offset: Option<usize>,
    /// Valid scrub range `(0, max_offset)`
    pub history_range: (usize, usize),
    /// Snapshots ordered by group, then index
    pub channels: Vec<Snapshot>,
}

impl RefreshFrame {
    /// Snapshot for one channel
    pub fn channel(&self, key: ChannelKey) -> Option<&Snapshot> {
        self.channels.iter().find(|s| s.key == key)
    }

    /// Snapshots of one group
    pub fn group(&self, group: Group) -> impl Iterator<Item = &Snapshot> {
        self.channels.iter().filter(move |s| s.key.group == group)
    }

    pub fn is_history_mode(&self) -> bool {
        self.mode == ViewMode::History
    }
}
