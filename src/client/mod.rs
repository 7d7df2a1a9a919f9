//! Channel receivers
//!
//! Provides the client side of the telemetry wire protocol:
//! - Reconnecting TCP receivers, one task per channel
//! - Endpoint validation and receiver options
//! - The fixed-delay reconnect policy

pub mod config;
pub mod receiver;
pub mod retry;

pub use config::{Endpoint, ReceiverConfig};
pub use receiver::{ChannelReceiver, SessionEnd};
pub use retry::{AttemptEnd, RetryPolicy};
