//! Statistics for channels
//!
//! - [`WindowStats`]: min/max/avg/last over the visible window
//! - [`ReceiverStats`]: connection health counters kept by each receiver

pub mod aggregate;
pub mod metrics;

pub use aggregate::WindowStats;
pub use metrics::{ChannelHealth, ReceiverStats};
