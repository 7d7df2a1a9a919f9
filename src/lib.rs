//! # telemetry-stream
//!
//! Ingestion and buffering engine for real-time scalar telemetry.
//!
//! Each channel is an independent TCP stream of little-endian `f32` frames.
//! Channels belong to one of two groups, signal and inference, each with a
//! capacity limit. For every channel the crate runs a reconnecting receiver
//! task that appends decoded samples to a fixed-size sliding window and an
//! unbounded history log. A renderer pulls per-channel snapshots (visible
//! points plus min/max/avg/last) once per refresh, either from the live
//! windows or from a frozen, scrubbable position in history.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use telemetry_stream::client::Endpoint;
//! use telemetry_stream::registry::{ChannelRegistry, Group, RegistryConfig};
//!
//! # async fn example() -> telemetry_stream::error::Result<()> {
//! let registry = Arc::new(ChannelRegistry::with_config(RegistryConfig::default())?);
//!
//! let key = registry.add_channel(Group::Signal).await?;
//! registry
//!     .configure_channel(key, Endpoint::new("127.0.0.1", 4000)?)
//!     .await?;
//!
//! let (_task, mut frames) = registry.spawn_refresh_task(Duration::from_millis(50));
//! while let Some(frame) = frames.recv().await {
//!     for snap in &frame.channels {
//!         println!("{} last={:.2} avg={:.2}", snap.key, snap.stats.last, snap.stats.avg);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod client;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod stats;
pub mod view;

pub use client::{ChannelReceiver, Endpoint, ReceiverConfig, RetryPolicy};
pub use error::{Error, Result};
pub use registry::{ChannelKey, ChannelRegistry, Color, Group, RegistryConfig, RegistryError};
pub use stats::{ChannelHealth, WindowStats};
pub use view::{RefreshFrame, Snapshot, ViewMode};
