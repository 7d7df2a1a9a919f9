//! What the renderer sees
//!
//! - [`HistoryCursor`]: live/history mode and scrub offset
//! - [`ViewState`]: window size + cursor, changed as one unit
//! - [`Snapshot`] / [`RefreshFrame`]: the per-refresh output

pub mod cursor;
pub mod snapshot;
pub mod state;

pub use cursor::{max_offset, HistoryCursor, ViewMode};
pub use snapshot::{RefreshFrame, Snapshot};
pub use state::{validate_window_size, ViewState};
