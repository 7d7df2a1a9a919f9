//! Wire and configuration constants

use std::time::Duration;

/// Bytes per frame on the wire (one little-endian `f32`)
pub const SAMPLE_SIZE: usize = 4;

/// Smallest accepted sliding-window size
pub const MIN_WINDOW_SIZE: usize = 1;

/// Largest accepted sliding-window size
pub const MAX_WINDOW_SIZE: usize = 100_000_000;

/// Sliding-window size used until the first resize
pub const DEFAULT_WINDOW_SIZE: usize = 200;

/// Channels per group
pub const DEFAULT_MAX_CHANNELS: usize = 2;

/// First default port of the signal group
pub const SIGNAL_BASE_PORT: u16 = 4000;

/// First default port of the inference group
pub const INFERENCE_BASE_PORT: u16 = 5000;

/// Host a freshly added channel points at
pub const DEFAULT_HOST: &str = "10.42.0.253";

/// Delay between connection attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Application-level read buffer size
pub const DEFAULT_READ_BUFFER_SIZE: usize = 4096;
