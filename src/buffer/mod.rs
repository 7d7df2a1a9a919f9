//! Per-channel sample storage
//!
//! Every channel owns a [`ChannelBuffer`] holding two views of the same
//! samples:
//!
//! ```text
//!   history log   [s0 s1 s2 s3 s4 s5 s6 s7 s8 s9 ...]   unbounded, append-only
//!                                   └──── W ────┘
//!   sliding window             [s5 s6 s7 s8 s9]         exactly W, oldest evicted
//! ```
//!
//! The receiver task is the only writer; the refresh loop is the only reader.
//! Both go through the [`SharedBuffer`] lock, and a decoded batch is appended
//! under a single write lock, so a reader never sees a partial append.

pub mod channel;
pub mod history;
pub mod window;

pub use channel::{ChannelBuffer, SharedBuffer};
pub use history::HistoryLog;
pub use window::SlidingWindow;
